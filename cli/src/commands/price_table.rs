use anyhow::Result;
use trip_estimator_core::EstimatorConfig;

/// Execute the price-table command
pub fn execute(config: &EstimatorConfig) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&config.price_table)?);
    Ok(())
}
