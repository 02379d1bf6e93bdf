//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Cartevv
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum CartevvError {
    /// Invalid or unusable configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Outbound request failed or the upstream misbehaved.
    #[error("Network error: {0}")]
    Network(String),

    /// The requested resource or coordinates do not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Caller supplied a missing or malformed value.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unexpected failure inside the service.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Cartevv operations
pub type Result<T> = std::result::Result<T, CartevvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let err = CartevvError::InvalidInput("missing url".into());
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["type"], "InvalidInput");
        assert_eq!(json["message"], "missing url");
    }

    #[test]
    fn display_includes_category() {
        let err = CartevvError::Network("HTTP connection failure".into());
        assert_eq!(err.to_string(), "Network error: HTTP connection failure");
    }
}
