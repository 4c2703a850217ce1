use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trip_estimator_core::models::trip::{
    MAX_HOTEL_TIER, MAX_TRAVELERS, MIN_HOTEL_TIER, MIN_TRAVELERS,
};
use trip_estimator_core::{Destination, TransportMode};

#[derive(Parser, Debug)]
#[command(name = "trip-estimator", version, about = "Trip cost estimator")]
pub struct Cli {
    /// Configuration file path (JSON). Built-in prices are used when omitted.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Price a trip and print the itemized estimate
    Estimate(EstimateArgs),

    /// Replay the animated total through a sequence of values
    Animate {
        /// Starting total followed by each new target
        #[arg(required = true, num_args = 2..)]
        totals: Vec<i64>,

        /// Retarget after this many milliseconds instead of waiting for completion
        #[arg(long)]
        retarget_after_ms: Option<u64>,

        /// Display refresh rate
        #[arg(long, default_value = "60")]
        fps: u32,
    },

    /// Print the active price table as JSON
    PriceTable,

    /// Validate the configuration file
    CheckConfig,
}

#[derive(clap::Args, Debug, Clone)]
pub struct EstimateArgs {
    /// Destination (goa, kerala, andamans)
    #[arg(short, long, default_value = "andamans")]
    pub destination: Destination,

    /// First day of the trip (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day of the trip (YYYY-MM-DD). Defaults to five days after --from.
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Number of travelers
    #[arg(short, long, default_value = "2", value_parser = clap::value_parser!(u32).range(i64::from(MIN_TRAVELERS)..=i64::from(MAX_TRAVELERS)))]
    pub travelers: u32,

    /// Leave flights out of the estimate
    #[arg(long)]
    pub no_flights: bool,

    /// Hotel star rating
    #[arg(long, default_value = "3", value_parser = clap::value_parser!(u8).range(i64::from(MIN_HOTEL_TIER)..=i64::from(MAX_HOTEL_TIER)))]
    pub hotel_tier: u8,

    /// Local transport (none, scooter, private-cab)
    #[arg(long, default_value = "private-cab")]
    pub transport: TransportMode,

    /// Print the estimate as JSON
    #[arg(long)]
    pub json: bool,
}
