//! Error types and exit codes for borderpath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including "no route between the countries")
//! - 2: Usage error (bad flags/args, unknown country)
//! - 3: Data error (dataset missing, malformed or lacking adjacency data)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args or unknown country (2)
    Usage = 2,
    /// Data error - missing or unusable dataset (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading datasets or searching routes
#[derive(Error, Debug)]
pub enum BorderpathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("country not found: {id}")]
    CountryNotFound { id: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("dataset not found: {path:?}")]
    DatasetNotFound { path: PathBuf },

    #[error("invalid dataset: {reason}")]
    InvalidDataset { reason: String },

    #[error("adjacency data unavailable for {id}: {reason}")]
    DataUnavailable { id: String, reason: String },

    #[error("asymmetric adjacency: {from} borders {to} but not the reverse")]
    AsymmetricAdjacency { from: String, to: String },

    // Generic failures (exit code 1)
    #[error("no path found from {from} to {to}")]
    NoPathFound { from: String, to: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl BorderpathError {
    /// Create an error for a country identifier absent from the dataset
    pub fn country_not_found(id: impl std::fmt::Display) -> Self {
        BorderpathError::CountryNotFound { id: id.to_string() }
    }

    /// Create an error for a country whose adjacency cannot be derived
    pub fn data_unavailable(id: impl std::fmt::Display, reason: impl Into<String>) -> Self {
        BorderpathError::DataUnavailable {
            id: id.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an error for a structurally invalid dataset
    pub fn invalid_dataset(reason: impl Into<String>) -> Self {
        BorderpathError::InvalidDataset {
            reason: reason.into(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        BorderpathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        BorderpathError::FailedOperation {
            operation: format!("{} {}", operation, path),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            BorderpathError::UnknownFormat(_)
            | BorderpathError::UsageError(_)
            | BorderpathError::CountryNotFound { .. }
            | BorderpathError::InvalidValue { .. } => ExitCode::Usage,

            BorderpathError::DatasetNotFound { .. }
            | BorderpathError::InvalidDataset { .. }
            | BorderpathError::DataUnavailable { .. }
            | BorderpathError::AsymmetricAdjacency { .. } => ExitCode::Data,

            BorderpathError::NoPathFound { .. }
            | BorderpathError::Io(_)
            | BorderpathError::Json(_)
            | BorderpathError::Toml(_)
            | BorderpathError::FailedOperation { .. }
            | BorderpathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            BorderpathError::UnknownFormat(_) => "unknown_format",
            BorderpathError::UsageError(_) => "usage_error",
            BorderpathError::CountryNotFound { .. } => "country_not_found",
            BorderpathError::InvalidValue { .. } => "invalid_value",
            BorderpathError::DatasetNotFound { .. } => "dataset_not_found",
            BorderpathError::InvalidDataset { .. } => "invalid_dataset",
            BorderpathError::DataUnavailable { .. } => "data_unavailable",
            BorderpathError::AsymmetricAdjacency { .. } => "asymmetric_adjacency",
            BorderpathError::NoPathFound { .. } => "no_path_found",
            BorderpathError::Io(_) => "io_error",
            BorderpathError::Json(_) => "json_error",
            BorderpathError::Toml(_) => "toml_error",
            BorderpathError::FailedOperation { .. } => "failed_operation",
            BorderpathError::Other(_) => "other",
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

/// Result type alias for borderpath operations
pub type Result<T> = std::result::Result<T, BorderpathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_distinguish_error_kinds() {
        assert_eq!(
            BorderpathError::country_not_found("ZZZ").exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            BorderpathError::data_unavailable("FRA", "no geometry").exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            BorderpathError::NoPathFound {
                from: "ISL".into(),
                to: "DEU".into()
            }
            .exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_to_json_envelope() {
        let err = BorderpathError::country_not_found("ZZ_NOT_A_COUNTRY");
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 2);
        assert_eq!(json["error"]["type"], "country_not_found");
        assert_eq!(
            json["error"]["message"],
            "country not found: ZZ_NOT_A_COUNTRY"
        );
    }
}
