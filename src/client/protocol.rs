use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::HarnessError;
use crate::models::order::OrderRecord;

/// Event name for everything the harness sends to the simulation server.
pub const CLIENT_EVENT: &str = "client_message";

/// Parameter set sent once at session start: map, fleet sizes, speeds and
/// order volume for one delivery simulation run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationConfig {
    pub map_name: String,
    pub simulation_seconds: u32,
    pub drone_count: u32,
    pub rider_count: u32,
    pub rider_max_order: u32,
    pub consumer_count: u32,
    pub order_count: u32,
    pub rider_speed: u32,
    pub drone_speed: u32,
    pub human_speed: u32,
    pub goods_info_file_path: String,
    pub delivery_meal_preparation_time: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            map_name: "hkust-gz-v-5-new".to_string(),
            simulation_seconds: 3600,
            drone_count: 5,
            rider_count: 10,
            rider_max_order: 5,
            consumer_count: 10,
            order_count: 100,
            rider_speed: 5,
            drone_speed: 10,
            human_speed: 3,
            goods_info_file_path: "datas/goods_info.jsonl".to_string(),
            delivery_meal_preparation_time: 10,
        }
    }
}

/// `{message_type, message}` wrapper; `message` is itself a JSON-encoded
/// string, the shape the simulation server unwraps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
    pub message_type: String,
    pub message: String,
}

impl Envelope {
    pub fn init(config: &SimulationConfig) -> Result<Self, HarnessError> {
        Ok(Self {
            message_type: "init".to_string(),
            message: serde_json::to_string(config)?,
        })
    }

    pub fn order(record: &OrderRecord) -> Result<Self, HarnessError> {
        Ok(Self {
            message_type: "order".to_string(),
            message: serde_json::to_string(record)?,
        })
    }
}

/// Named-event frame used on the wire in both directions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventFrame {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

impl EventFrame {
    pub fn client_message(envelope: &Envelope) -> Result<Self, HarnessError> {
        Ok(Self {
            event: CLIENT_EVENT.to_string(),
            data: Value::String(serde_json::to_string(envelope)?),
        })
    }

    pub fn to_text(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string(self)?)
    }
}
