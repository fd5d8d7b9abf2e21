//! Application startup
//!
//! Startup order matters: arguments, then logging, then configuration.
//! Configuration errors must be reported through the configured logger and
//! abort the process before any pipeline task spawns.

use crate::app::cli::Args;
use crate::core::config::PipelineConfig;
use crate::core::logging::init_logging;
use crate::pipeline::{run_pipeline, PipelineOptions};
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use std::time::Duration;

/// Parse arguments, initialise logging, load the configuration, and run
/// the pipeline to completion. Returns the process exit code: success on
/// normal completion, failure on configuration or pipeline errors (clap
/// itself exits with a usage error on bad arguments).
pub fn startup() -> ExitCode {
    let args = Args::parse();

    let use_color = (args.color || std::io::stderr().is_terminal()) && !args.no_color;
    let log_file = args.log_file.as_ref().map(|p| p.display().to_string());
    if let Err(e) = init_logging(
        args.log_level.as_deref(),
        args.log_format.as_deref(),
        log_file.as_deref(),
        use_color,
    ) {
        eprintln!("FATAL: failed to initialise logging: {}", e);
        return ExitCode::FAILURE;
    }

    let config = match PipelineConfig::from_file(&args.config_file) {
        Ok(config) => config,
        Err(e) => {
            log::error!("FATAL: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::debug!(
        "configuration loaded: {} producers, shared capacity {}",
        config.producers.len(),
        config.shared_capacity
    );

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("FATAL: failed to start async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let options = PipelineOptions {
        edit_delay: Duration::from_millis(args.edit_delay_ms),
        seed: args.seed,
    };

    match runtime.block_on(run_pipeline(&config, &options, std::io::stdout())) {
        Ok(summary) => {
            log::debug!(
                "run complete: {} articles reported, {} sentinels",
                summary.articles_reported,
                summary.sentinels_seen
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("FATAL: {}", e);
            ExitCode::FAILURE
        }
    }
}
