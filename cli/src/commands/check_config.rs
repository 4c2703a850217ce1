use anyhow::Result;
use std::path::Path;
use tracing::info;
use trip_estimator_core::{format_inr, Destination, EstimatorConfig, TransportMode};

/// Execute the check-config command
///
/// The configuration was already loaded and validated by the time this
/// runs; this prints a summary of what is in effect.
pub fn execute(config: &EstimatorConfig, path: Option<&Path>) -> Result<()> {
    info!("Validating configuration");
    config.validate()?;

    match path {
        Some(path) => println!("✓ Configuration {} is valid", path.display()),
        None => println!("✓ Built-in configuration is valid"),
    }
    println!();

    let table = &config.price_table;
    println!("Flights (per traveler):");
    for destination in Destination::ALL {
        println!(
            "  {:<20}{:>12}",
            destination.display_name(),
            format_inr(table.flight_price(destination))
        );
    }
    println!();

    println!("Hotel (per room, per night):");
    if table.hotel_per_night.is_empty() {
        println!("  (none configured)");
    }
    for (index, price) in table.hotel_per_night.iter().enumerate() {
        println!("  {:<20}{:>12}", format!("{} star", index + 1), format_inr(*price));
    }
    println!();

    println!("Local transport (per day):");
    for mode in TransportMode::ALL {
        println!(
            "  {:<20}{:>12}",
            mode.display_name(),
            format_inr(table.transport_daily(mode))
        );
    }
    println!();

    println!(
        "Animated total: {} ms, {:?}",
        config.presenter.duration_ms, config.presenter.easing
    );

    Ok(())
}
