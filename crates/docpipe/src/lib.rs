//! # docpipe
//!
//! **CLI Binary**
//!
//! Entry point for the `docpipe` command-line application. It wires the
//! stage crates together and owns process-level concerns.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Install the log subscriber
//! * Resolve settings from file and flags
//! * Dispatch to the stage handlers
//! * Render errors and pick the exit code
//!
//! This crate should contain minimal business logic.

mod commands;
mod config;
mod error_hints;
mod logging;

use anyhow::Result;
use clap::Parser;
use docpipe_config::Cli;

/// Parse the process arguments and run the selected stage.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.global);
    let settings = config::resolve(&cli)?;
    commands::dispatch(&cli.command, &settings)
}

/// `Error: ...` followed by any matching hints.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
