//! Command-line interface definitions.
//!
//! Defines the CLI structure for polyfeed using `clap`: streaming ingestion,
//! resolve-only inspection, CLOB market lookup, and configuration checks.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::paths;
use crate::infrastructure::config::settings::CONFIG_PATH_ENV;

/// Polymarket market-data ingestion CLI
#[derive(Parser, Debug)]
#[command(name = "polyfeed")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve configured events and stream their market data until interrupted
    Run(RunArgs),

    /// Resolve configured events and print their markets and tokens
    Resolve(ConfigPathArg),

    /// Look up one market on the CLOB API by condition id
    Market(MarketArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `polyfeed check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file syntax and semantics.
    Config(ConfigPathArg),
}

/// Shared `--config` argument.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, env = CONFIG_PATH_ENV, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the configuration file.
    #[arg(short, long, env = CONFIG_PATH_ENV, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Override log level (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON.
    #[arg(long)]
    pub json_logs: bool,

    /// Subscribe for forward updates only, without initial book snapshots.
    #[arg(long)]
    pub no_initial_dump: bool,
}

/// Arguments for the `market` subcommand.
#[derive(Parser, Debug)]
pub struct MarketArgs {
    /// Market condition id (e.g. 0xabc...).
    pub condition_id: String,

    /// Path to the configuration file.
    #[arg(short, long, env = CONFIG_PATH_ENV, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}
