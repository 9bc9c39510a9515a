use serde::{Deserialize, Serialize};

use crate::error::HarnessError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum City {
    CityA,
    CityB,
    CityC,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum DeliveryPreference {
    Fast,
    Cheap,
    Reliable,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MerchantProfile {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub economic_status: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsumerProfile {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub city: City,
    pub economic_status: f64,
    pub delivery_preference: DeliveryPreference,
}

impl ConsumerProfile {
    /// Consumer economic status is normalized; values outside [0, 1] are rejected.
    pub fn new(
        name: String,
        age: u8,
        gender: Gender,
        city: City,
        economic_status: f64,
        delivery_preference: DeliveryPreference,
    ) -> Result<Self, HarnessError> {
        if !(0.0..=1.0).contains(&economic_status) {
            return Err(HarnessError::InvalidProfile(format!(
                "consumer economic_status {economic_status} outside [0, 1]"
            )));
        }

        Ok(Self {
            name,
            age,
            gender,
            city,
            economic_status,
            delivery_preference,
        })
    }
}
