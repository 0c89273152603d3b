//! Error types for the CLI.
//!
//! Every failure a command can hit is routed through [`CliError`] so exit
//! codes and diagnostics are decided in one place.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error during schema document scanning.
    #[error("Failed to scan input: {0}")]
    Scan(#[from] ScanError),

    /// Error during class generation.
    #[error("Failed to generate classes: {0}")]
    Generate(#[from] pojo_rs::Error),

    /// Error loading configuration.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Error writing output files.
    #[error("Failed to write output: {0}")]
    Write(#[from] WriteError),

    /// Validation failed (generated classes out of date).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error during schema document scanning.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Input path does not exist.
    #[error("Input path not found: {path}")]
    InputNotFound { path: PathBuf },

    /// No schema documents found under the input path.
    #[error("No JSON Schema documents found in: {path}")]
    NoSchemaDocuments { path: PathBuf },

    /// Error from the directory walker.
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file named on the command line does not exist.
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Invalid TOML syntax.
    #[error("Invalid TOML in {path}: {message}")]
    InvalidToml { path: PathBuf, message: String },

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// IO error reading config.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error writing output files.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create a package directory.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a class file.
    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Create an input not found error.
    pub fn input_not_found(path: PathBuf) -> Self {
        Self::InputNotFound { path }
    }

    /// Create a no schema documents error.
    pub fn no_schema_documents(path: PathBuf) -> Self {
        Self::NoSchemaDocuments { path }
    }
}

impl ConfigError {
    /// Create a not found error.
    pub fn not_found(path: PathBuf) -> Self {
        Self::NotFound { path }
    }

    /// Create an invalid TOML error.
    pub fn invalid_toml(path: PathBuf, message: impl Into<String>) -> Self {
        Self::InvalidToml {
            path,
            message: message.into(),
        }
    }

    /// Create an invalid value error.
    pub fn invalid_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            message: message.into(),
        }
    }
}
