//! Core error types for motorlog-core.
//!
//! Business-level conditions (missing interval data, duplicate merge keys,
//! provider outages) are not errors and never surface here; only contract
//! violations and configuration problems do.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for motorlog-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Policy/configuration errors
    #[error("Policy error: {0}")]
    Policy(#[from] PolicyError),

    /// External provider errors
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Caller referenced a task id that is not in the schedule
    #[error("Unknown task id: {0}")]
    UnknownTask(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Policy configuration errors.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// Failed to read a policy file
    #[error("Failed to load policy from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse policy TOML
    #[error("Failed to parse policy: {0}")]
    ParseFailed(String),

    /// Invalid policy value
    #[error("Invalid policy value for '{key}': {message}")]
    InvalidValue { key: &'static str, message: String },
}

/// Errors reported by external catalog/forecast providers.
///
/// These never reach the end caller of the engine: the fallback synthesizer
/// recovers from all of them locally.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Provider could not be reached
    #[error("Provider '{service}' unreachable: {message}")]
    Unreachable { service: String, message: String },

    /// Provider returned a response the engine cannot use
    #[error("Provider '{service}' returned a malformed response: {message}")]
    Malformed { service: String, message: String },

    /// Provider returned no usable schedule
    #[error("Provider '{service}' returned an empty schedule")]
    Empty { service: String },
}

/// Validation errors for caller-supplied input.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid field value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
