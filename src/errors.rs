//! Error types for rapid_sentrank
//!
//! Only caller contract violations surface as errors. Degenerate documents
//! and missing tooling are handled by fallback tiers and reported through
//! [`crate::types::SummaryDiagnostics`] instead.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SummaryError>;

/// Main error type for rapid_sentrank
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummaryError {
    /// Input that cannot be coerced to text, or a non-positive summary length
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Internal error (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SummaryError {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error was caused by the caller's input
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<std::str::Utf8Error> for SummaryError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::invalid_input(format!("document is not valid UTF-8 text: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SummaryError::invalid_input("summary length must be >= 1");
        assert!(err.to_string().contains("Invalid input"));
        assert!(err.to_string().contains("summary length"));

        let err = SummaryError::invalid_config("damping must be between 0 and 1");
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_is_input_error() {
        assert!(SummaryError::invalid_input("bad").is_input_error());
        assert!(!SummaryError::internal("oops").is_input_error());
    }

    #[test]
    fn test_from_utf8_error() {
        let bytes = [0x66, 0x6f, 0xff, 0x6f];
        let err: SummaryError = std::str::from_utf8(&bytes).unwrap_err().into();
        assert!(err.is_input_error());
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_from_serde_error() {
        let err: SummaryError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, SummaryError::Serialization { .. }));
    }
}
