use anyhow::Result;
use chrono::Local;
use serde_json::json;
use tracing::info;
use trip_estimator_core::{
    format_inr, DateRange, EstimatorConfig, EstimatorSession, SystemClock, TripParameters,
};

use crate::cli::EstimateArgs;

/// Turn command-line selections into trip parameters
fn trip_parameters(args: &EstimateArgs) -> TripParameters {
    let start = args.from.unwrap_or_else(|| Local::now().date_naive());
    let mut params = TripParameters::initial(start);
    if let Some(end) = args.to {
        params.date_range = DateRange::between(start, end);
    }
    params.destination = args.destination;
    params.traveler_count = args.travelers;
    params.include_flights = !args.no_flights;
    params.hotel_tier = args.hotel_tier;
    params.transport_mode = args.transport;
    params
}

/// Execute the estimate command
pub fn execute(config: &EstimatorConfig, args: &EstimateArgs) -> Result<()> {
    let params = trip_parameters(args);
    let session = EstimatorSession::new(config, params, SystemClock::new());
    let breakdown = session.breakdown();

    info!(
        destination = %session.params().destination,
        nights = ?session.nights(),
        total = session.total(),
        "estimate computed"
    );

    if args.json {
        let items: serde_json::Map<String, serde_json::Value> = breakdown
            .items()
            .iter()
            .map(|item| (item.kind.label().to_string(), json!(item.amount)))
            .collect();
        let output = json!({
            "params": session.params(),
            "nights": session.nights(),
            "breakdown": items,
            "total": session.total(),
            "can_proceed_to_booking": session.can_proceed_to_booking(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let params = session.params();
    println!(
        "Trip estimate: {}, {} traveler(s), {}-star hotel, {}",
        params.destination.display_name(),
        params.traveler_count,
        params.hotel_tier,
        params.transport_mode.display_name()
    );
    println!("{}", session.caption());
    println!();

    if breakdown.is_empty() {
        println!("  Select your options to see a breakdown.");
    } else {
        for item in breakdown.items() {
            println!("  {:<18}{:>14}", item.kind.label(), format_inr(item.amount));
        }
        println!("  {}", "-".repeat(32));
    }
    println!("  {:<18}{:>14}", "Total", format_inr(session.total()));

    if !session.can_proceed_to_booking() {
        println!();
        println!("Pick a valid date range to proceed to booking.");
    }

    Ok(())
}
