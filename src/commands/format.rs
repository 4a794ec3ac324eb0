//! Format dispatch macros for command output
//!
//! Defined in `crate::cli::format` and re-exported here for command modules.

pub use crate::output_by_format_result;
