//! Anansi - lazy, prunable traversals of graphs and structured documents
//!
//! Walks adjacency-list graphs in pre-order, breadth-first, post-order or
//! leaves-only order, and lists the element paths of JSON, YAML and TOML
//! documents.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use anansi_core::config::Config;
use anansi_core::error::{AnansiError, ExitCode as AnansiExitCode};
use anansi_core::logging;
use cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is a global flag, but clap may fail parsing before we can
            // inspect `Cli.format`. If the user requested JSON output, emit a
            // structured error envelope.
            if argv_format_json {
                let anansi_error = match err.kind() {
                    // Help and version are informational, not errors - let clap handle them
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::ArgumentConflict => {
                        AnansiError::UsageError(err.to_string())
                    }
                    _ => AnansiError::Other(err.to_string()),
                };

                eprintln!("{}", anansi_error.to_json());
                return ExitCode::from(anansi_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        // If tracing initialization fails, fall back to stderr
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let config = match Config::discover(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => return report(&e, cli.format.unwrap_or_default(), cli.quiet),
    };
    let format = cli.format.unwrap_or(config.output.format);

    match commands::dispatch::run(&cli, &config, start) {
        Ok(()) => ExitCode::from(AnansiExitCode::Success as u8),
        Err(e) => report(&e, format, cli.quiet),
    }
}

fn report(error: &AnansiError, format: OutputFormat, quiet: bool) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", error.to_json());
    } else if !quiet {
        eprintln!("error: {}", error);
    }

    ExitCode::from(error.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
