//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;
use crate::traverse::Order;

/// Default cap on the number of walks a command prints
pub const DEFAULT_LIMIT: usize = 1000;

/// anansi configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Traversal defaults
    #[serde(default)]
    pub walk: WalkConfig,

    /// Output defaults
    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults for graph traversals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Strategy used when `--order` is not given
    #[serde(default)]
    pub order: Order,

    /// Maximum number of walks printed; a cycle otherwise never ends
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            order: Order::default(),
            limit: default_limit(),
        }
    }
}

/// Defaults for command output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the value next to each element path
    #[serde(default = "default_show_values")]
    pub show_values: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_values: default_show_values(),
        }
    }
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

fn default_show_values() -> bool {
    true
}
