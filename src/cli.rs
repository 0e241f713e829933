use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Biolens four-lens telemetry diagnostics.
#[derive(Parser)]
#[command(
    name = "biolens",
    version,
    about = "Four-lens time-series diagnostics for biological telemetry"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run every lens and write a JSON report.
    Analyze(AnalyzeArgs),
    /// Run the signal validator and print each check.
    Validate(ValidateArgs),
    /// Write a synthetic light-intensity telemetry CSV.
    Generate(GenerateArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Input CSV (`time_s,value` or a single value column).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output JSON path; stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sampling rate in Hz; overrides the config and the time column.
    #[arg(long = "sampling-rate")]
    pub sampling_rate: Option<f64>,

    /// Emit only the headline figures instead of the full report.
    #[arg(long)]
    pub summary: bool,
}

/// Arguments for the `validate` subcommand.
#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Input CSV (`time_s,value` or a single value column).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Sampling rate in Hz; overrides the config and the time column.
    #[arg(long = "sampling-rate")]
    pub sampling_rate: Option<f64>,
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Output CSV path.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Period of the light cycle, in hours.
    #[arg(long = "period-hours", default_value_t = 24.0)]
    pub period_hours: f64,

    /// Record length, in hours.
    #[arg(long, default_value_t = 72.0)]
    pub hours: f64,

    /// Sample spacing, in seconds.
    #[arg(long = "interval-s", default_value_t = 300.0)]
    pub interval_s: f64,

    /// Standard deviation of additive Gaussian noise.
    #[arg(long, default_value_t = 0.1)]
    pub noise: f64,

    /// RNG seed; drawn from the OS when omitted.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Inject a spike at this hour.
    #[arg(long = "spike-at-hour")]
    pub spike_at_hour: Option<f64>,
}
