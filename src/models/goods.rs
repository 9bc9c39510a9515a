use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Good {
    pub name: String,
    pub price: u32,
    pub fragile: bool,
}
