//! Error types for the site configuration registry.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while loading, parsing or validating a registry.
///
/// Reading the compiled-in constants never fails; these only come from the
/// data-file and lookup helpers.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Registry file loading error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A registry value breaks one of its invariants.
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// Tag name outside the frontmatter vocabulary.
    #[error("Unknown tag: {0:?}")]
    UnknownTag(String),

    /// Aside kind outside `note`, `tip`, `caution`, `danger`.
    #[error("Unknown aside kind: {0:?}")]
    UnknownAside(String),

    /// Link target outside the HTML browsing-context keywords.
    #[error("Unknown link target: {0:?}")]
    UnknownLinkTarget(String),

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic configuration crate error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error for the value at `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Field path of a validation error, if this is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CoreError::config("missing field");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_validation_error_names_field() {
        let err = CoreError::validation("header.internal[1].url", "must start with '/'");
        assert_eq!(
            err.to_string(),
            "Invalid header.internal[1].url: must start with '/'"
        );
        assert_eq!(err.field(), Some("header.internal[1].url"));
    }

    #[test]
    fn test_unknown_tag_error() {
        let err = CoreError::UnknownTag("Rust".to_string());
        assert_eq!(err.to_string(), "Unknown tag: \"Rust\"");
        assert!(err.field().is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CoreError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }
}
