//! Command dispatch logic for anansi

use std::time::Instant;

use crate::cli::Cli;
use anansi_core::config::Config;
use anansi_core::error::Result;

mod command;
mod commands;
mod macros;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, config: &Config, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
