//! Core error types for sprintpoints-core.
//!
//! The calculator itself never fails. These types cover everything around it:
//! loading and editing configuration, and routing form edits to the right
//! platform and field.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for sprintpoints-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Errors raised while routing an edit to the form.
///
/// Out-of-range numbers are never an error here; they are clamped.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Platform key is not part of the configured set
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    /// Field name is not an editable input
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Edit could not be split into a path and a value
    #[error("malformed edit: {0}")]
    MalformedEdit(String),

    /// A sprint needs at least one platform
    #[error("platform set is empty")]
    EmptyPlatformSet,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
