//! unicornctl - Unicorn Dynamics telemetry mapper CLI
//!
//! Reads a batch of readings, runs the telemetry engine, prints the report.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use unicorn_telemetry::TelemetryConfig;

use unicornctl::cli::{Cli, Commands};
use unicornctl::{commands, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = TelemetryConfig::load_or_default(cli.config.as_deref())
        .context("failed to load config")?;
    logging::init(&config.logging.level);
    debug!(target: "unicornctl", "starting {}", env!("CARGO_PKG_VERSION"));
    // Subscriber only exists from here on, so the load is reported now
    if let Some(path) = &cli.config {
        info!(
            path = %path.display(),
            overrides = config.thresholds.len(),
            format = %config.output.format,
            "loaded telemetry config"
        );
    }

    let output = match cli.command {
        Commands::Report { input, format } => {
            commands::report(&config, input.as_deref(), format)?
        }
        Commands::Evaluate { metric, value } => commands::evaluate(&config, &metric, value)?,
        Commands::Metrics => commands::metrics(&config)?,
        Commands::Sample { format } => commands::sample(&config, format)?,
    };

    println!("{output}");
    Ok(())
}
