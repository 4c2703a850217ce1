use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trip_estimator_core::EstimatorConfig;

mod cli;
mod commands;

/// Initialize tracing/logging
///
/// Logs go to stderr so estimates printed on stdout stay machine-readable.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

/// Load the configuration file, or fall back to the built-in prices
fn load_config(args: &cli::Cli) -> Result<EstimatorConfig> {
    match &args.config {
        Some(path) => EstimatorConfig::from_path(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => {
            tracing::debug!("no configuration file given; using built-in prices");
            Ok(EstimatorConfig::default())
        }
    }
}

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    init_tracing(args.verbose);

    let config = load_config(&args)?;

    match &args.command {
        cli::Commands::Estimate(estimate) => commands::estimate::execute(&config, estimate)?,
        cli::Commands::Animate {
            totals,
            retarget_after_ms,
            fps,
        } => commands::animate::execute(&config, totals, *retarget_after_ms, *fps)?,
        cli::Commands::PriceTable => commands::price_table::execute(&config)?,
        cli::Commands::CheckConfig => commands::check_config::execute(&config, args.config.as_deref())?,
    }

    Ok(())
}
