//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use anansi_core::config::Config;
use anansi_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: &'a Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: &'a Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// `--format` if given, else the configured format
    pub fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.config.output.format)
    }

    /// Whether element values are printed next to their paths
    pub fn show_values(&self, paths_only: bool) -> bool {
        self.config.output.show_values && !paths_only
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("anansi {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Lazy, prunable traversals of graphs and structured documents.");
        println!();
        println!("Run `anansi --help` for usage information.");
        Ok(())
    }
}
