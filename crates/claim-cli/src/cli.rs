//! CLI argument definitions for `claimprep`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "claimprep",
    version,
    about = "Prepare insurance policy data for claim prediction",
    long_about = "Turn a raw policy table into model-ready features.\n\n\
                  Encodes columns by role, splits into train and test sets,\n\
                  rebalances the training split and scales both splits."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full preparation pipeline and report a baseline.
    Prepare(PrepareArgs),

    /// List registered scalers.
    Scalers,

    /// List registered sampling methods.
    Samplers,

    /// Print the effective configuration as TOML.
    Config(ConfigArgs),
}

#[derive(Parser, Default)]
pub struct PrepareArgs {
    /// TOML configuration file (built-in defaults when omitted).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dataset CSV, overriding `data_path`.
    #[arg(long = "data", value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Scaler name, overriding `scaling.method`.
    #[arg(long = "scaler", value_name = "NAME")]
    pub scaler: Option<String>,

    /// Sampling method, overriding `sampling.method`.
    #[arg(long = "sampler", value_name = "NAME")]
    pub sampler: Option<String>,

    /// Balance target, overriding `sampling.strategy`.
    #[arg(long = "strategy", value_name = "STRATEGY")]
    pub strategy: Option<String>,

    /// Seed for the split and the sampler, overriding `random_state`.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Held-out fraction, overriding `test_size`.
    #[arg(long = "test-size", value_name = "FRACTION")]
    pub test_size: Option<f64>,

    /// Directory for `train.csv`, `test.csv` and `metrics.json`.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Parser, Default)]
pub struct ConfigArgs {
    /// TOML configuration file to merge over the defaults.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
