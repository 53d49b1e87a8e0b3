//! CLI - Command-line argument parsing
//!
//! Keeps argument parsing separate from execution logic.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use unicorn_telemetry::OutputFormat;

/// Unicorn Dynamics telemetry mapper
#[derive(Parser, Debug)]
#[command(name = "unicornctl")]
#[command(about = "Map telemetry readings to b9/p9/j9 layers and Grove guides", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// TOML config with threshold overrides and output defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Aggregate a JSON array of readings into a report
    Report {
        /// Readings file ("-" or omitted reads stdin)
        #[arg(long, short)]
        input: Option<PathBuf>,

        /// markdown or json (defaults to the config value)
        #[arg(long, short)]
        format: Option<OutputFormat>,
    },

    /// Classify a single value
    Evaluate {
        /// Metric id (e.g. connection_latency)
        metric: String,

        #[arg(allow_negative_numbers = true)]
        value: f64,
    },

    /// List the metric catalog
    Metrics,

    /// Report on the built-in demonstration batch
    Sample {
        #[arg(long, short)]
        format: Option<OutputFormat>,
    },
}
