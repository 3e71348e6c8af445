//! Error types for postaddr
//!
//! Validation problems are not errors: they are the output of address
//! verification. The variants here cover malformed input and failures of
//! the metadata plumbing.

use thiserror::Error;

/// Common result type for postaddr operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for postaddr
#[derive(Debug, Error)]
pub enum Error {
    // Key and field parsing
    #[error("invalid lookup key: {0}")]
    InvalidKeyFormat(String),

    #[error("unknown address field: {0}")]
    UnknownField(String),

    // Metadata errors
    #[error("no bootstrap data for key: {0}")]
    MissingDefaultData(String),

    #[error("malformed metadata node: {0}")]
    MalformedNode(String),

    #[error("no usable data for key: {0}")]
    BadKey(String),

    // Transport errors
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timeout")]
    Timeout,

    // Configuration
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Create an invalid key error
    pub fn invalid_key(msg: impl Into<String>) -> Self {
        Self::InvalidKeyFormat(msg.into())
    }

    /// Create a malformed node error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedNode(msg.into())
    }

    /// Check if this error came from the network and a later request may succeed
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout | Self::Transport(_))
    }

    /// Check if this error means the key itself is unusable
    #[must_use]
    pub fn is_bad_key(&self) -> bool {
        matches!(self, Self::BadKey(_) | Self::MalformedNode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_retryable() {
        assert!(Error::Timeout.is_retryable());
        assert!(Error::Transport("reset".into()).is_retryable());
        assert!(!Error::invalid_key("x").is_retryable());
    }

    #[test]
    fn test_error_bad_key() {
        assert!(Error::BadKey("data/XX".into()).is_bad_key());
        assert!(Error::malformed("not json").is_bad_key());
        assert!(!Error::Timeout.is_bad_key());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::invalid_key("wrong key type: foo").to_string(),
            "invalid lookup key: wrong key type: foo"
        );
    }
}
