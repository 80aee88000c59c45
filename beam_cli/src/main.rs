//! `beam` -- shear force and bending moment diagrams from the terminal.
//!
//! Parses arguments with clap, loads layered configuration, and dispatches
//! to a command handler. Failures are reported on stderr (as JSON with
//! `--json`) and turn into a non-zero exit status.

mod cli;
mod commands;
mod config;
mod prompt;
mod report;

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use beam_core::BeamError;
use cli::{Cli, Commands};

/// Error payload printed with `--json`
#[derive(Serialize)]
struct ErrorReport<'a> {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a BeamError>,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("beam_core=debug,beam=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn report_error(err: &anyhow::Error, json: bool) {
    let beam_error = err.downcast_ref::<BeamError>();
    if json {
        let report = ErrorReport {
            error: format!("{err:#}"),
            code: beam_error.map(BeamError::error_code),
            details: beam_error,
        };
        match serde_json::to_string(&report) {
            Ok(text) => eprintln!("{text}"),
            Err(_) => eprintln!("Error: {err:#}"),
        }
    } else {
        eprintln!("Error: {err:#}");
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let json = cli.global.json;
    let result = config::load_config(cli.global.config.as_deref()).and_then(|config| {
        tracing::debug!(?config, "configuration loaded");
        match &cli.command {
            Commands::Analyze(args) => commands::run_analyze(&config, json, args),
            Commands::Interactive(args) => commands::run_interactive(&config, json, args),
            Commands::Demo(args) => commands::run_demo(&config, json, args),
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, json);
            ExitCode::FAILURE
        }
    }
}
