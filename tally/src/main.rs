//! # Tally
//!
//! Demonstration entry point for `tally_common::sum::sum_positive`.
//!
//! Sums `[10, 5, 20]` by default and prints `Sum of [10, 5, 20] is: 35`.
//! If the input holds a negative number, only the error message is
//! printed. Either way the exit status is 0; a broken config file exits
//! with 1. Logs go to stderr so stdout carries only the result line.

use clap::Parser;
use std::process;
use tally::cli::Args;
use tally::demo::{load_config, render, select_numbers};
use tally_common::config::{ConfigError, TallyConfig};
use tracing::{Level, debug, error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();

    // Config is read before tracing starts so its log_level can apply.
    let loaded: Option<Result<TallyConfig, ConfigError>> = args.config.as_deref().map(load_config);
    let config_level = match &loaded {
        Some(Ok(config)) => config.shared.log_level.into(),
        _ => Level::INFO,
    };
    setup_tracing(&args, config_level);

    let config = match loaded {
        None => TallyConfig::default(),
        Some(Ok(config)) => {
            info!("Config OK: service_name={}", config.shared.service_name);
            config
        }
        Some(Err(e)) => {
            error!("FATAL: {e}");
            process::exit(1);
        }
    };

    let numbers = select_numbers(args.numbers, &config);
    debug!(count = numbers.len(), "Summing demonstration list");

    println!("{}", render(&numbers));
}

/// Setup tracing subscriber based on CLI arguments and config.
fn setup_tracing(args: &Args, config_level: Level) {
    let level = args.log_level(config_level);

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}
