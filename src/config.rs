use std::env;

use crate::client::protocol::SimulationConfig;
use crate::error::HarnessError;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    /// 0 disables the periodic mock-order feed.
    pub order_feed_interval_secs: u64,
    pub simulation: SimulationConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, HarnessError> {
        let _ = dotenvy::dotenv();

        let defaults = SimulationConfig::default();
        let simulation = SimulationConfig {
            map_name: env::var("MAP_NAME").unwrap_or(defaults.map_name),
            simulation_seconds: parse_or_default("SIMULATION_SECONDS", defaults.simulation_seconds)?,
            drone_count: parse_or_default("DRONE_COUNT", defaults.drone_count)?,
            rider_count: parse_or_default("RIDER_COUNT", defaults.rider_count)?,
            rider_max_order: parse_or_default("RIDER_MAX_ORDER", defaults.rider_max_order)?,
            consumer_count: parse_or_default("CONSUMER_COUNT", defaults.consumer_count)?,
            order_count: parse_or_default("ORDER_COUNT", defaults.order_count)?,
            rider_speed: parse_or_default("RIDER_SPEED", defaults.rider_speed)?,
            drone_speed: parse_or_default("DRONE_SPEED", defaults.drone_speed)?,
            human_speed: parse_or_default("HUMAN_SPEED", defaults.human_speed)?,
            goods_info_file_path: env::var("GOODS_INFO_FILE_PATH")
                .unwrap_or(defaults.goods_info_file_path),
            delivery_meal_preparation_time: parse_or_default(
                "DELIVERY_MEAL_PREPARATION_TIME",
                defaults.delivery_meal_preparation_time,
            )?,
        };

        Ok(Self {
            host: env::var("SIM_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_or_default("SIM_PORT", 5001)?,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            order_feed_interval_secs: parse_or_default("ORDER_FEED_INTERVAL_SECS", 0)?,
            simulation,
        })
    }
}

fn parse_or_default<T>(key: &str, default: T) -> Result<T, HarnessError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|err| HarnessError::Config(format!("invalid {key}: {err}"))),
        Err(_) => Ok(default),
    }
}
