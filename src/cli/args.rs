//! Command argument structures

use std::path::PathBuf;

use clap::Args;

use super::parse::{parse_limit, parse_order};
use anansi_core::Order;

/// Arguments for the elements command.
#[derive(Args, Debug)]
pub struct ElementsArgs {
    /// JSON, YAML or TOML document
    pub file: PathBuf,

    /// Print element paths without their values
    #[arg(long)]
    pub paths_only: bool,
}

/// Arguments for the leaves command.
#[derive(Args, Debug)]
pub struct LeavesArgs {
    /// Documents, or directories searched recursively for documents
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Print element paths without their values
    #[arg(long)]
    pub paths_only: bool,
}

/// Arguments for the get command.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// JSON, YAML or TOML document
    pub file: PathBuf,

    /// Element path, e.g. `map.people[0].name` (empty for the whole document)
    pub path: String,
}

/// Arguments for the walk command.
#[derive(Args, Debug)]
pub struct WalkArgs {
    /// Graph file: a map from each vertex to its list of children
    pub graph: PathBuf,

    /// Vertex to start from
    #[arg(long)]
    pub root: String,

    /// Traversal order: pre-order, breadth-first, post-order or leaves
    /// [default: the configured order, else pre-order]
    #[arg(long, value_parser = parse_order)]
    pub order: Option<Order>,

    /// Stop after this many walks [default: the configured limit, else 1000]
    #[arg(long, value_parser = parse_limit)]
    pub limit: Option<usize>,

    /// Skip everything below walks ending at this vertex (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub prune: Vec<String>,

    /// Delete the edge into this vertex wherever it is reached (repeatable)
    #[arg(long, action = clap::ArgAction::Append)]
    pub remove: Vec<String>,
}
