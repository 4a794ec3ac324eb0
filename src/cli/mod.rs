//! CLI argument parsing for anansi
//!
//! Global flags: --format, --config, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod format;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use parse::parse_format;

pub use args::{ElementsArgs, GetArgs, LeavesArgs, WalkArgs};
pub use anansi_core::format::OutputFormat;

/// Anansi - lazy, prunable traversals of graphs and structured documents
#[derive(Parser, Debug)]
#[command(name = "anansi")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human or json [default: the configured format, else human]
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Configuration file [default: ~/.config/anansi/config.toml]
    #[arg(long, global = true, env = "ANANSI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the immediate children of a document's root
    Elements(ElementsArgs),

    /// List every leaf element path of one or more documents
    Leaves(LeavesArgs),

    /// Print the value at an element path
    Get(GetArgs),

    /// Traverse a graph file from a root vertex
    Walk(WalkArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use anansi_core::Order;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_walk_flags() {
        let cli = Cli::try_parse_from([
            "anansi", "walk", "g.json", "--root", "A", "--order", "breadth-first", "--prune",
            "B", "--prune", "C", "--remove", "D", "--limit", "5",
        ])
        .unwrap();
        let Some(Commands::Walk(args)) = cli.command else {
            panic!("expected walk");
        };
        assert_eq!(args.root, "A");
        assert_eq!(args.order, Some(Order::BreadthFirst));
        assert_eq!(args.prune, vec!["B", "C"]);
        assert_eq!(args.remove, vec!["D"]);
        assert_eq!(args.limit, Some(5));
    }

    #[test]
    fn test_global_format_after_subcommand() {
        let cli = Cli::try_parse_from(["anansi", "get", "a.json", "x", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_zero_limit_rejected() {
        assert!(Cli::try_parse_from(["anansi", "walk", "g.json", "--root", "A", "--limit", "0"])
            .is_err());
    }
}
