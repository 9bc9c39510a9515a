mod client;
mod config;
mod error;
mod generator;
mod models;

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::client::SimClient;

#[tokio::main]
async fn main() -> Result<(), error::HarnessError> {
    let config = config::Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_level.clone()))
        .with_target(false)
        .compact()
        .init();

    let mut client = SimClient::new(&config.host, config.port, config.simulation.clone());
    if config.order_feed_interval_secs > 0 {
        client = client.with_order_feed(Duration::from_secs(config.order_feed_interval_secs));
    }

    let report = client.run().await?;

    tracing::info!(
        init_sent = report.init_sent,
        events_received = report.events.len(),
        "session finished"
    );

    Ok(())
}
