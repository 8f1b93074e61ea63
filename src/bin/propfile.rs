//! Propfile CLI Binary
//!
//! Prints the merged view of a layered `.properties` configuration.

use clap::Parser;
use propfile::cli::{build_logging_config, map_error, Cli, RunContext};
use propfile::logging::init_logging;
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    let initialized = build_logging_config(&cli).and_then(|config| init_logging(&config));
    if let Err(e) = initialized {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    debug!(name = %cli.name, "propfile starting");

    let context = match RunContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error locating bundled resources: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("Read failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}
