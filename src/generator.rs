use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::goods::Good;
use crate::models::order::{Coordinates, DeliveryType, Order, OrderMode};
use crate::models::profile::{City, ConsumerProfile, DeliveryPreference, Gender, MerchantProfile};

const CITIES: [City; 3] = [City::CityA, City::CityB, City::CityC];
const PREFERENCES: [DeliveryPreference; 3] = [
    DeliveryPreference::Fast,
    DeliveryPreference::Cheap,
    DeliveryPreference::Reliable,
];

/// Bounds for every randomized order field. All ranges are inclusive and
/// must be non-empty: each `_min` must not exceed its `_max`, and
/// `name_pool` must be at least 1. `next_order` panics on an empty range.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub price_min: u32,
    pub price_max: u32,
    pub consumer_age_min: u8,
    pub consumer_age_max: u8,
    pub merchant_age_min: u8,
    pub merchant_age_max: u8,
    pub priority_min: u8,
    pub priority_max: u8,
    /// Name suffixes are drawn from 1..=name_pool.
    pub name_pool: u32,
    pub order_id_min: u32,
    pub order_id_max: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            price_min: 10,
            price_max: 100,
            consumer_age_min: 18,
            consumer_age_max: 65,
            merchant_age_min: 25,
            merchant_age_max: 60,
            priority_min: 1,
            priority_max: 5,
            name_pool: 100,
            order_id_min: 1000,
            order_id_max: 9999,
        }
    }
}

/// Random order factory. Same seed and config produce the same order stream.
pub struct OrderGenerator {
    rng: StdRng,
    config: GeneratorConfig,
}

impl OrderGenerator {
    pub fn new(seed: u64, config: GeneratorConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }

    pub fn from_entropy(config: GeneratorConfig) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            config,
        }
    }

    /// Builds one fully-populated order. Every field stays inside its
    /// configured range, so construction never fails for a config with
    /// non-empty ranges.
    pub fn next_order(&mut self) -> Order {
        let good = Good {
            name: format!("Good-{}", self.rng.gen_range(1..=self.config.name_pool)),
            price: self.rng.gen_range(self.config.price_min..=self.config.price_max),
            fragile: self.rng.gen_bool(0.5),
        };

        let customer = ConsumerProfile::new(
            format!("Consumer-{}", self.rng.gen_range(1..=self.config.name_pool)),
            self.rng
                .gen_range(self.config.consumer_age_min..=self.config.consumer_age_max),
            self.gender(),
            CITIES[self.rng.gen_range(0..CITIES.len())],
            self.rng.gen_range(0.0..=1.0),
            PREFERENCES[self.rng.gen_range(0..PREFERENCES.len())],
        )
        .expect("economic_status drawn inside [0, 1]");

        let merchant = MerchantProfile {
            name: format!("Merchant-{}", self.rng.gen_range(1..=self.config.name_pool)),
            age: self
                .rng
                .gen_range(self.config.merchant_age_min..=self.config.merchant_age_max),
            gender: self.gender(),
            economic_status: self.rng.gen_range(0.0..=1.0),
        };

        Order {
            order_id: format!(
                "ORDER-{}",
                self.rng
                    .gen_range(self.config.order_id_min..=self.config.order_id_max)
            ),
            priority: self
                .rng
                .gen_range(self.config.priority_min..=self.config.priority_max),
            good,
            customer,
            merchant,
            merchant_coordinates: self.coordinates(),
            customer_coordinates: self.coordinates(),
            order_mode: OrderMode::OrderPlace,
            delivery_type: if self.rng.gen_bool(0.5) {
                DeliveryType::Drone
            } else {
                DeliveryType::Rider
            },
            placed_at: Utc::now().timestamp(),
        }
    }

    fn gender(&mut self) -> Gender {
        if self.rng.gen_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    fn coordinates(&mut self) -> Coordinates {
        Coordinates(
            self.rng.gen_range(-90.0..=90.0),
            self.rng.gen_range(-180.0..=180.0),
            0.0,
        )
    }
}
