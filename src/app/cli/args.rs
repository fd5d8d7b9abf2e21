//! Command-line arguments
//!
//! One required positional argument names the configuration file; the
//! remaining flags tune logging and the simulated editing delay.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "newsroom")]
#[command(about = "Concurrent news-processing pipeline simulator")]
#[command(version)]
pub struct Args {
    /// Configuration file: producer (id, articles, queue capacity)
    /// triples followed by the shared queue capacity
    #[arg(value_name = "CONFIG_FILE")]
    pub config_file: PathBuf,

    /// Simulated per-article editing delay in milliseconds
    #[arg(long = "edit-delay-ms", value_name = "MILLIS", default_value_t = 100)]
    pub edit_delay_ms: u64,

    /// Base RNG seed for reproducible article streams
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// Log file path (default: stderr)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Force coloured log output
    #[arg(long = "color")]
    pub color: bool,

    /// Disable coloured log output
    #[arg(long = "no-color", conflicts_with = "color")]
    pub no_color: bool,
}
