//! Error types and exit codes for anansi
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, misuse of a traversal cursor)
//! - 3: Data error (unreadable document, unknown vertex or element)

mod macros;

use thiserror::Error;

/// Exit codes for the anansi CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unreadable document, unknown vertex (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during traversal and document operations
#[derive(Error, Debug)]
pub enum AnansiError {
    // Cursor misuse
    #[error("illegal state for {operation}: {reason}")]
    IllegalState {
        operation: &'static str,
        reason: &'static str,
    },

    #[error("no more walks in this traversal")]
    Exhausted,

    #[error("unsupported operation: {operation}")]
    Unsupported { operation: &'static str },

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl AnansiError {
    /// Create an illegal-state error for a cursor operation
    pub fn illegal_state(operation: &'static str, reason: &'static str) -> Self {
        AnansiError::IllegalState { operation, reason }
    }

    /// Create an error for an operation the adjacency does not offer
    pub fn unsupported(operation: &'static str) -> Self {
        AnansiError::Unsupported { operation }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        AnansiError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        AnansiError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Whether this error came from misusing a traversal cursor
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, AnansiError::IllegalState { .. })
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AnansiError::IllegalState { .. }
            | AnansiError::Unsupported { .. }
            | AnansiError::UnknownFormat(_)
            | AnansiError::UsageError(_)
            | AnansiError::InvalidValue { .. } => ExitCode::Usage,

            AnansiError::NotFound { .. }
            | AnansiError::Yaml(_)
            | AnansiError::Json(_)
            | AnansiError::Toml(_) => ExitCode::Data,

            AnansiError::Exhausted | AnansiError::Io(_) | AnansiError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            AnansiError::IllegalState { .. } => "illegal_state",
            AnansiError::Exhausted => "exhausted",
            AnansiError::Unsupported { .. } => "unsupported",
            AnansiError::UnknownFormat(_) => "unknown_format",
            AnansiError::UsageError(_) => "usage_error",
            AnansiError::InvalidValue { .. } => "invalid_value",
            AnansiError::NotFound { .. } => "not_found",
            AnansiError::Io(_) => "io_error",
            AnansiError::Yaml(_) => "yaml_error",
            AnansiError::Json(_) => "json_error",
            AnansiError::Toml(_) => "toml_error",
            AnansiError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for anansi operations
pub type Result<T> = std::result::Result<T, AnansiError>;
