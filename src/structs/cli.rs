use std::path::PathBuf;
use clap::Parser;
use crate::config::constants::{DEFAULT_LOG_LEVEL, LOG_LEVEL_ENV};
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "quantia")]
#[clap(about = "Quantia web front end and analysis proxy", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ~/quantia/config.toml)
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(long, global = true, env = LOG_LEVEL_ENV, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    #[clap(subcommand)]
    pub command: Commands,
}
