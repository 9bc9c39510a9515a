use serde::{Deserialize, Serialize};

use crate::models::goods::Good;
use crate::models::profile::{ConsumerProfile, MerchantProfile};

/// Latitude, longitude, altitude. Serializes as a three-element JSON array.
/// Altitude is a placeholder and stays at 0 until the simulator uses it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates(pub f64, pub f64, pub f64);

impl Coordinates {
    pub fn lat(&self) -> f64 {
        self.0
    }

    pub fn lng(&self) -> f64 {
        self.1
    }

    pub fn alt(&self) -> f64 {
        self.2
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum OrderMode {
    OrderPlace,
    MealPreparation,
    OutForDeliver,
    Delivered,
}

impl OrderMode {
    /// Integer discriminant the simulation server expects on the wire.
    pub fn wire_value(self) -> u8 {
        match self {
            OrderMode::OrderPlace => 0,
            OrderMode::MealPreparation => 1,
            OrderMode::OutForDeliver => 2,
            OrderMode::Delivered => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum DeliveryType {
    None,
    Drone,
    Rider,
}

impl DeliveryType {
    pub fn wire_value(self) -> u8 {
        match self {
            DeliveryType::None => 0,
            DeliveryType::Drone => 1,
            DeliveryType::Rider => 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub order_id: String,
    pub priority: u8,
    pub good: Good,
    pub customer: ConsumerProfile,
    pub merchant: MerchantProfile,
    pub merchant_coordinates: Coordinates,
    pub customer_coordinates: Coordinates,
    pub order_mode: OrderMode,
    pub delivery_type: DeliveryType,
    pub placed_at: i64,
}

/// Flattened mapping emitted to the simulation server: profiles collapse to
/// their names and the order mode becomes its integer discriminant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderRecord {
    pub good: Good,
    pub order_id: String,
    pub merchant_coordinates: Coordinates,
    pub customer_coordinates: Coordinates,
    pub customer: String,
    pub merchant: String,
    pub order_mode: u8,
    pub customer_order_timestamp: i64,
}

impl Order {
    pub fn to_record(&self) -> OrderRecord {
        OrderRecord {
            good: self.good.clone(),
            order_id: self.order_id.clone(),
            merchant_coordinates: self.merchant_coordinates,
            customer_coordinates: self.customer_coordinates,
            customer: self.customer.name.clone(),
            merchant: self.merchant.name.clone(),
            order_mode: self.order_mode.wire_value(),
            customer_order_timestamp: self.placed_at,
        }
    }
}
