//! `scenario-diff` binary.
//!
//! Parses, formats and diffs Gherkin-style scenario blocks held in feature
//! files or markdown documentation. Output goes to stdout; logs go to stderr.

mod cli;

use std::process::ExitCode;

use clap::Parser;

use scenario_diff_cli::config::CliConfig;
use scenario_diff_cli::logging::init_logging;

use crate::cli::{Cli, run};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&CliConfig::default());
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::from(2);
        }
    };
    init_logging(&config);

    run(cli, &config).unwrap_or_else(|e| {
        tracing::error!("{e:#}");
        ExitCode::FAILURE
    })
}
