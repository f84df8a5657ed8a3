//! Unified error types for Jarvis

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all Jarvis operations
#[derive(Error, Debug)]
pub enum JarvisError {
    // Command validation
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    // Webhook delivery
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    #[error("network error: {0}")]
    Network(String),

    #[error("webhook returned HTTP {0}")]
    Http(u16),

    // Agent catalog
    #[error("unknown or disabled agent: {0}")]
    AgentNotFound(String),

    // Console errors
    #[error("console error: {0}")]
    Console(String),

    // Configuration
    #[error("configuration error: {0}")]
    Config(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Generic
    #[error("{0}")]
    Other(String),
}

/// Result type alias using JarvisError
pub type Result<T> = std::result::Result<T, JarvisError>;

/// Display taxonomy for webhook delivery failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Attempt aborted because the deadline fired
    Timeout,
    /// Transport-level failure (unreachable host, reset connection)
    Network,
    /// Non-success HTTP status from the webhook
    Http,
    /// Anything else
    Unknown,
}

impl ErrorKind {
    /// Generic user-facing message for this kind
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Timeout => "The request took too long. Please try again.",
            Self::Network => "Unable to connect to the server. Please check your connection.",
            Self::Http => "Server error. Please try again later.",
            Self::Unknown => "An unexpected error occurred. Please try again.",
        }
    }
}

impl JarvisError {
    /// Classify this error into the display taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Timeout(_) => ErrorKind::Timeout,
            Self::Network(_) => ErrorKind::Network,
            Self::Http(_) => ErrorKind::Http,
            _ => ErrorKind::Unknown,
        }
    }
}

/// Display info derived from a delivery failure
///
/// `message` carries the technical detail for logs; `user_message` is what
/// the console shows in the log panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
    pub user_message: String,
}

impl ErrorInfo {
    /// Build display info from an error
    pub fn from_error(err: &JarvisError) -> Self {
        let kind = err.kind();
        let user_message = match err {
            JarvisError::Http(status) => {
                format!("Server error ({}). Please try again later.", status)
            }
            _ => kind.user_message().to_string(),
        };

        Self {
            kind,
            message: err.to_string(),
            user_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_classification() {
        assert_eq!(JarvisError::Timeout(30000).kind(), ErrorKind::Timeout);
        assert_eq!(
            JarvisError::Network("connection refused".into()).kind(),
            ErrorKind::Network
        );
        assert_eq!(JarvisError::Http(502).kind(), ErrorKind::Http);
        assert_eq!(JarvisError::Other("boom".into()).kind(), ErrorKind::Unknown);
        assert_eq!(
            JarvisError::Config("bad toml".into()).kind(),
            ErrorKind::Unknown
        );
    }

    #[test]
    fn test_http_error_info_preserves_status() {
        let info = ErrorInfo::from_error(&JarvisError::Http(503));
        assert_eq!(info.kind, ErrorKind::Http);
        assert!(info.user_message.contains("503"));
        assert!(info.message.contains("503"));
    }

    #[test]
    fn test_timeout_error_info() {
        let info = ErrorInfo::from_error(&JarvisError::Timeout(5000));
        assert_eq!(info.kind, ErrorKind::Timeout);
        assert_eq!(info.user_message, ErrorKind::Timeout.user_message());
    }

    #[test]
    fn test_unknown_error_info_keeps_detail_in_message() {
        let info = ErrorInfo::from_error(&JarvisError::Other("weird failure".into()));
        assert_eq!(info.kind, ErrorKind::Unknown);
        assert!(info.message.contains("weird failure"));
        assert!(!info.user_message.is_empty());
    }
}
