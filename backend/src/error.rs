//! Error types for the medication list service.
//!
//! - [`LoadError`] - Dataset loading errors (fatal at startup)
//! - [`ConfigError`] - Environment / CLI configuration errors
//! - [`ServerError`] - Top-level errors returned by the binary
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Loading Errors
// =============================================================================

/// Errors while reading the medication CSV into memory.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to decode file content.
    #[error("Failed to decode content as {0}")]
    Encoding(String),

    /// Malformed CSV row.
    #[error("Invalid CSV format: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file.
    #[error("CSV file is empty")]
    EmptyFile,

    /// No headers found.
    #[error("No headers found in CSV")]
    NoHeaders,
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while reading process configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `PORT` is not a valid port number.
    #[error("Invalid port '{0}'")]
    InvalidPort(String),

    /// Any other variable with an unexpected value.
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: String, value: String },
}

// =============================================================================
// Server Errors (top-level)
// =============================================================================

/// Top-level errors of the `medlist` binary.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Dataset could not be loaded.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// Configuration is invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Socket or runtime IO failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
