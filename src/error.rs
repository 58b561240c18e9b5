//! Error types for secguard
//!
//! This module defines custom error types using `thiserror`. The taxonomy is
//! deliberately scoped: a bad rule source, a rule that fails to compile, or a
//! single unreadable file never aborts a scan. Those conditions are consumed
//! internally and surface as diagnostics on the error channel. Only a missing
//! scan target (or an explicitly requested config file that cannot be read)
//! propagates to the caller.

use thiserror::Error;

/// Main error type for secguard
#[derive(Error, Debug)]
pub enum SecGuardError {
    /// The top-level scan target does not exist
    #[error("Path not found: {0}")]
    PathNotFound(String),

    /// Configuration-related errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Scan-related errors
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    /// Failed to serialize results
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors related to configuration and rule sources
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a configuration file
    #[error("Failed to read config '{path}': {source}")]
    FileRead {
        /// Path to the file that failed to read
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to parse a configuration file
    #[error("Failed to parse config '{path}': {source}")]
    Parse {
        /// Path to the file that failed to parse
        path: String,
        /// The underlying TOML error
        source: toml::de::Error,
    },
}

/// Errors that occur during scanning
#[derive(Error, Debug)]
pub enum ScanError {
    /// Failed to write the rendered report
    #[error("Failed to write output '{path}': {source}")]
    OutputWrite {
        /// Path to the output file
        path: String,
        /// The underlying I/O error
        source: std::io::Error,
    },
}
