//! Generates one mock order and prints its wire record as JSON.

use sim_harness::error::HarnessError;
use sim_harness::generator::{GeneratorConfig, OrderGenerator};

fn main() -> Result<(), HarnessError> {
    let mut generator = OrderGenerator::from_entropy(GeneratorConfig::default());
    let record = generator.next_order().to_record();

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
