//! Error types for the AI metadata pipeline
//!
//! Data-quality findings are never errors; they are reported inside
//! `ValidationResult` and `ComplianceResult`. This enum covers the operational
//! failures around them: reading inputs, decoding them, and serializing exports.

use thiserror::Error;

/// Main error type for pipeline operations
#[derive(Error, Debug)]
pub enum MetadataError {
    /// Invalid input data or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File access or I/O error
    #[error("File error: {0}")]
    FileError(String),

    /// Metadata or dataset decoding error
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Export serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Metadata could not be promoted to a trusted record
    #[error("Untrusted metadata: {}", .0.join("; "))]
    Untrusted(Vec<String>),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl MetadataError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        MetadataError::InvalidInput(msg.into())
    }

    /// Create a file error
    pub fn file_error(msg: impl Into<String>) -> Self {
        MetadataError::FileError(msg.into())
    }

    /// Create a parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        MetadataError::ParseError(msg.into())
    }

    /// Create a configuration error
    pub fn config_error(msg: impl Into<String>) -> Self {
        MetadataError::ConfigError(msg.into())
    }

    /// Check if this is a user-facing error (vs internal)
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            MetadataError::InvalidInput(_)
                | MetadataError::FileError(_)
                | MetadataError::ParseError(_)
                | MetadataError::ConfigError(_)
                | MetadataError::Untrusted(_)
        )
    }
}

impl From<std::io::Error> for MetadataError {
    fn from(err: std::io::Error) -> Self {
        MetadataError::FileError(err.to_string())
    }
}

impl From<serde_json::Error> for MetadataError {
    fn from(err: serde_json::Error) -> Self {
        MetadataError::ParseError(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for MetadataError {
    fn from(err: serde_yaml::Error) -> Self {
        MetadataError::ParseError(format!("YAML error: {}", err))
    }
}

impl From<toml::de::Error> for MetadataError {
    fn from(err: toml::de::Error) -> Self {
        MetadataError::ParseError(format!("TOML error: {}", err))
    }
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, MetadataError>;
