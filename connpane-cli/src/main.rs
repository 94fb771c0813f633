//! `ConnPane` CLI - Command-line front end for the connections pane
//!
//! Drives the pane presenter against a JSON session file and a JSON client
//! state file: list and search connections, explore one, go back, and
//! request removals.

mod cli;
mod commands;
mod display;
mod error;
mod server;
mod util;
mod view;
mod workspace;

use clap::Parser;
use cli::Cli;
use connpane_core::tracing::{TracingConfig, TracingLevel, init_tracing};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let result = commands::dispatch(&cli.overrides(), cli.command);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}

/// Sets up tracing from the `[logging]` settings and the verbosity flags
fn init_logging(cli: &Cli) {
    let settings = util::create_config_manager(cli.config.as_deref())
        .ok()
        .and_then(|manager| manager.load_settings().ok())
        .unwrap_or_default();

    let mut config = TracingConfig::from_settings(&settings.logging);
    config.level = if cli.quiet {
        TracingLevel::Error
    } else {
        TracingLevel::from_verbosity(config.level, cli.verbose)
    };
    if cli.verbose > 0 {
        config.filter = None;
    }

    if let Err(e) = init_tracing(&config) {
        eprintln!("Failed to initialize logging: {e}");
    }
}
