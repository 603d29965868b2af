//! treehash CLI Binary
//!
//! Prints the fingerprint of a directory tree in sequential and/or concurrent mode.

use clap::Parser;
use std::process;
use tracing::{error, info};
use treehash::cli::{Cli, RunContext};
use treehash::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    // Load and validate configuration once; logging settings come from it too
    let context = match RunContext::new(cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{}", treehash::cli::map_error(&e));
            process::exit(1);
        }
    };

    let logging_config = build_logging_config(&cli, &context.config().logging);

    // Initialize logging early
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("treehash starting");

    match context.execute(&cli) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", treehash::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from the loaded config file and CLI args
fn build_logging_config(cli: &Cli, loaded: &LoggingConfig) -> LoggingConfig {
    // If --verbose is not set, disable logging
    if !cli.verbose {
        return LoggingConfig::disabled();
    }

    let mut config = loaded.clone();

    // Override with CLI arguments (highest priority)
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = file.clone();
    }

    config
}
