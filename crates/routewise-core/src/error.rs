//! Error types and exit codes for routewise
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, out-of-range ids, unknown objective)
//! - 3: Data error (malformed topology, unreachable target)

mod macros;

use thiserror::Error;

use crate::graph::NodeId;

/// Exit codes for the routewise binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed topology, unreachable target (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading a topology or computing paths
#[derive(Error, Debug)]
pub enum RouteError {
    // Usage errors (exit code 2)
    #[error("{context} {node} is out of range (router count is {node_count})")]
    OutOfRange {
        context: String,
        node: NodeId,
        node_count: usize,
    },

    #[error("invalid objective: {0} (expected: latency or bandwidth)")]
    InvalidObjective(String),

    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("router {node} is unreachable from the source")]
    Unreachable { node: NodeId },

    #[error("parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl RouteError {
    /// Create an error for a router id outside `[0, node_count)`
    pub fn out_of_range(context: &str, node: NodeId, node_count: usize) -> Self {
        RouteError::OutOfRange {
            context: context.to_string(),
            node,
            node_count,
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RouteError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create a parse error for a 1-based line number
    pub fn parse(line: usize, reason: impl Into<String>) -> Self {
        RouteError::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RouteError::OutOfRange { .. }
            | RouteError::InvalidObjective(_)
            | RouteError::UnknownFormat(_)
            | RouteError::UsageError(_)
            | RouteError::InvalidValue { .. } => ExitCode::Usage,

            RouteError::Unreachable { .. } | RouteError::Parse { .. } => ExitCode::Data,

            RouteError::Io(_) | RouteError::Json(_) | RouteError::Toml(_) | RouteError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RouteError::OutOfRange { .. } => "out_of_range",
            RouteError::InvalidObjective(_) => "invalid_objective",
            RouteError::UnknownFormat(_) => "unknown_format",
            RouteError::UsageError(_) => "usage_error",
            RouteError::InvalidValue { .. } => "invalid_value",
            RouteError::Unreachable { .. } => "unreachable",
            RouteError::Parse { .. } => "parse_error",
            RouteError::Io(_) => "io_error",
            RouteError::Json(_) => "json_error",
            RouteError::Toml(_) => "toml_error",
            RouteError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        match self {
            RouteError::OutOfRange {
                node, node_count, ..
            } => {
                error_obj["node"] = serde_json::json!(node);
                error_obj["node_count"] = serde_json::json!(node_count);
            }
            RouteError::Unreachable { node } => {
                error_obj["node"] = serde_json::json!(node);
            }
            RouteError::Parse { line, .. } => {
                error_obj["line"] = serde_json::json!(line);
            }
            _ => {}
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for routewise operations
pub type Result<T> = std::result::Result<T, RouteError>;
