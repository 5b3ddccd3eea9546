//! Adapter framework error types
//!
//! Error definitions with transient/permanent classification so callers
//! can decide whether an operation is worth reissuing. The adapter itself
//! never retries.

use thiserror::Error;

/// Error that can occur during adapter operations.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The transport collaborator failed to complete the exchange
    /// (connection refused, DNS failure, timeout, malformed response).
    #[error("transport error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The server answered with a non-success status. The raw body is kept
    /// for debugging; it is never passed through `deserialize` because the
    /// error envelope shape is not guaranteed to match a success envelope.
    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        body: String,
    },

    /// A serialize/deserialize/query transform failed. Fails the enclosing
    /// call as-is; never wrapped further.
    #[error("{stage} transform failed: {message}")]
    Transform { stage: String, message: String },

    /// The operation is intentionally unsupported by this adapter.
    #[error("{operation} is not implemented")]
    NotImplemented { operation: String },

    /// Adapter or transport configuration is invalid.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl AdapterError {
    /// Check if this error is transient and the operation may succeed if
    /// reissued. Retry itself is the caller's concern.
    pub fn is_transient(&self) -> bool {
        match self {
            AdapterError::Transport { .. } => true,
            AdapterError::UnexpectedStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Check if this error is permanent and reissuing won't help.
    pub fn is_permanent(&self) -> bool {
        !self.is_transient()
    }

    /// Get an error code for classification.
    pub fn error_code(&self) -> &'static str {
        match self {
            AdapterError::Transport { .. } => "TRANSPORT_ERROR",
            AdapterError::UnexpectedStatus { .. } => "UNEXPECTED_STATUS",
            AdapterError::Transform { .. } => "TRANSFORM_FAILED",
            AdapterError::NotImplemented { .. } => "NOT_IMPLEMENTED",
            AdapterError::InvalidConfiguration { .. } => "INVALID_CONFIG",
        }
    }

    // Convenience constructors

    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        AdapterError::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Create a transport error with source.
    pub fn transport_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AdapterError::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a transform error for the given pipeline stage.
    pub fn transform(stage: impl Into<String>, message: impl Into<String>) -> Self {
        AdapterError::Transform {
            stage: stage.into(),
            message: message.into(),
        }
    }

    /// Create a not-implemented error.
    pub fn not_implemented(operation: impl Into<String>) -> Self {
        AdapterError::NotImplemented {
            operation: operation.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        AdapterError::InvalidConfiguration {
            message: message.into(),
        }
    }
}

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_errors() {
        let transient_errors = vec![
            AdapterError::transport("connection refused"),
            AdapterError::UnexpectedStatus {
                status: 503,
                url: "http://api.example.com/users".to_string(),
                body: String::new(),
            },
            AdapterError::UnexpectedStatus {
                status: 429,
                url: "http://api.example.com/users".to_string(),
                body: String::new(),
            },
        ];

        for err in transient_errors {
            assert!(
                err.is_transient(),
                "Expected {} to be transient",
                err.error_code()
            );
            assert!(!err.is_permanent());
        }
    }

    #[test]
    fn test_permanent_errors() {
        let permanent_errors = vec![
            AdapterError::UnexpectedStatus {
                status: 404,
                url: "http://api.example.com/users/42".to_string(),
                body: String::new(),
            },
            AdapterError::transform("serialize", "bad payload"),
            AdapterError::not_implemented("create_many"),
            AdapterError::invalid_configuration("base_url is required"),
        ];

        for err in permanent_errors {
            assert!(
                err.is_permanent(),
                "Expected {} to be permanent",
                err.error_code()
            );
            assert!(!err.is_transient());
        }
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AdapterError::transport("boom").error_code(),
            "TRANSPORT_ERROR"
        );
        assert_eq!(
            AdapterError::not_implemented("update_many").error_code(),
            "NOT_IMPLEMENTED"
        );
        assert_eq!(
            AdapterError::transform("query", "bad").error_code(),
            "TRANSFORM_FAILED"
        );
    }

    #[test]
    fn test_error_display() {
        let err = AdapterError::not_implemented("create_many");
        assert_eq!(err.to_string(), "create_many is not implemented");

        let err = AdapterError::UnexpectedStatus {
            status: 500,
            url: "http://api.example.com/users".to_string(),
            body: "oops".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unexpected status 500 from http://api.example.com/users"
        );
    }

    #[test]
    fn test_error_with_source() {
        let source_err = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let err = AdapterError::transport_with_source("request failed", source_err);

        assert!(err.is_transient());
        if let AdapterError::Transport { source, .. } = &err {
            assert!(source.is_some());
        } else {
            panic!("Expected Transport variant");
        }
    }
}
