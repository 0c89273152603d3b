//! Error types for schema resolution and generation.
//!
//! Resolution and configuration problems abort a generation run. A rule that
//! simply does not apply to a node is not an error and never surfaces here.

use thiserror::Error;

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for a generation run.
#[derive(Debug, Error)]
pub enum Error {
    /// A schema reference could not be resolved.
    #[error("Failed to resolve schema: {0}")]
    Resolution(#[from] ResolutionError),

    /// A configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Error raised while resolving a schema document or fragment.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// The reference is not valid URI syntax.
    #[error("Invalid schema URI '{uri}': {message}")]
    InvalidUri { uri: String, message: String },

    /// The referenced document could not be read.
    #[error("Failed to read schema document {uri}: {source}")]
    Unreachable {
        uri: String,
        #[source]
        source: std::io::Error,
    },

    /// The referenced document is not valid JSON.
    #[error("Invalid JSON in schema document {uri}: {source}")]
    InvalidDocument {
        uri: String,
        #[source]
        source: serde_json::Error,
    },

    /// A fragment path segment does not exist in the document.
    #[error("Fragment segment '{segment}' not found in {uri}")]
    MissingFragment { uri: String, segment: String },

    /// The URI scheme is not supported by the configured reader.
    #[error("Unsupported scheme '{scheme}' in schema URI {uri}")]
    UnsupportedScheme { uri: String, scheme: String },
}

/// Error raised when an enumerated configuration option holds an
/// unrecognized value.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown annotation style name.
    #[error("Unknown annotation style '{value}'")]
    UnknownAnnotationStyle { value: String },

    /// Unknown inclusion level name.
    #[error("Unknown inclusion level '{value}'")]
    UnknownInclusionLevel { value: String },

    /// Invalid configuration value.
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl ResolutionError {
    /// Create an invalid URI error.
    pub fn invalid_uri(uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUri {
            uri: uri.into(),
            message: message.into(),
        }
    }

    /// Create an unreachable document error.
    pub fn unreachable(uri: impl Into<String>, source: std::io::Error) -> Self {
        Self::Unreachable {
            uri: uri.into(),
            source,
        }
    }

    /// Create an invalid document error.
    pub fn invalid_document(uri: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidDocument {
            uri: uri.into(),
            source,
        }
    }

    /// Create a missing fragment segment error.
    pub fn missing_fragment(uri: impl Into<String>, segment: impl Into<String>) -> Self {
        Self::MissingFragment {
            uri: uri.into(),
            segment: segment.into(),
        }
    }

    /// Create an unsupported scheme error.
    pub fn unsupported_scheme(uri: impl Into<String>, scheme: impl Into<String>) -> Self {
        Self::UnsupportedScheme {
            uri: uri.into(),
            scheme: scheme.into(),
        }
    }
}

impl ConfigError {
    /// Create an unknown annotation style error.
    pub fn unknown_annotation_style(value: impl Into<String>) -> Self {
        Self::UnknownAnnotationStyle {
            value: value.into(),
        }
    }

    /// Create an unknown inclusion level error.
    pub fn unknown_inclusion_level(value: impl Into<String>) -> Self {
        Self::UnknownInclusionLevel {
            value: value.into(),
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
