//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `htaccess_test` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Mapping the run outcome to the process exit code
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use htaccess_test::config::{Opt, TOOL_NAME};
use htaccess_test::initialization::init_logger_with;
use htaccess_test::{run, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run(&config).await {
        Ok(report) => process::exit(report.exit_code()),
        Err(e) => {
            eprintln!("{} error: {:#}", TOOL_NAME, e);
            process::exit(1);
        }
    }
}
