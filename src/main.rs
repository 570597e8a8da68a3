//! Routewise - best-path computation for router networks
//!
//! Loads a directed router topology, computes single-source best paths
//! (minimum latency or maximum bandwidth) with optional no-transit
//! policies, and reports or renders the result.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use routewise_core::config::RouteConfig;
use routewise_core::error::{ExitCode as RouteExitCode, RouteError};
use routewise_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Parsing can fail before `Cli.format` exists, so look at argv directly
        Err(err) if argv_requests_json() => match parse_failure(&err) {
            Some(error) => {
                eprintln!("{}", error.to_json());
                return exit_with(&error);
            }
            None => err.exit(),
        },
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(RouteExitCode::Success as u8),
        Err(error) => {
            report(&cli, &error);
            exit_with(&error)
        }
    }
}

/// Map a clap failure to a `RouteError`; `None` for help and version output
fn parse_failure(err: &clap::Error) -> Option<RouteError> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => Some(RouteError::UsageError(err.to_string())),
        _ => Some(RouteError::Other(err.to_string())),
    }
}

/// `--format`, then the configured format, then human
fn error_format(cli: &Cli) -> OutputFormat {
    cli.format.unwrap_or_else(|| {
        RouteConfig::resolve(cli.config.as_deref())
            .and_then(|config| config.format())
            .ok()
            .flatten()
            .unwrap_or_default()
    })
}

fn report(cli: &Cli, error: &RouteError) {
    if error_format(cli) == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", error);
    }
}

fn exit_with(error: &RouteError) -> ExitCode {
    ExitCode::from(error.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let args: Vec<String> = env::args().skip(1).collect();
    args.iter().any(|arg| arg == "--format=json")
        || args
            .windows(2)
            .any(|pair| pair[0] == "--format" && pair[1] == "json")
}
