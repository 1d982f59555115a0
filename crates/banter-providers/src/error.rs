//! Provider failure type.
//!
//! Everything that can go wrong between "build a request" and "extract the
//! reply text" lands here. The orchestrator returns this type instead of
//! folding failures into chat content; the UI decides how to present it.

use std::time::Duration;

use strum::Display;
use thiserror::Error;

/// Stable tag for a [`ProviderError`], independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ProviderErrorKind {
    /// The request never completed (connect, DNS, TLS, timeout).
    Request,
    /// The provider answered with a non-success HTTP status.
    Api,
    /// The provider's response envelope could not be parsed.
    InvalidResponse,
    /// The envelope parsed but contained no reply text.
    EmptyResponse,
}

/// A failed provider call.
///
/// No variant is retried by Banter; `is_retryable` only records what the
/// transport or status code suggests.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Transport-level failure before any response arrived.
    #[error("{message}")]
    Request {
        message: String,
        is_retryable: bool,
    },

    /// Non-success HTTP status, with the message extracted from the
    /// provider's JSON error body when it parses.
    #[error("{message}")]
    Api {
        status_code: u16,
        message: String,
        is_retryable: bool,
        retry_after: Option<Duration>,
    },

    /// The response body was not the expected envelope.
    #[error("{0}")]
    InvalidResponse(String),

    /// A well-formed envelope with nothing to show the user.
    #[error("{0}")]
    EmptyResponse(String),
}

impl ProviderError {
    /// The error's stable tag.
    pub fn kind(&self) -> ProviderErrorKind {
        match self {
            Self::Request { .. } => ProviderErrorKind::Request,
            Self::Api { .. } => ProviderErrorKind::Api,
            Self::InvalidResponse(_) => ProviderErrorKind::InvalidResponse,
            Self::EmptyResponse(_) => ProviderErrorKind::EmptyResponse,
        }
    }

    /// Whether the transport or status code suggested a retry might help.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request { is_retryable, .. } | Self::Api { is_retryable, .. } => *is_retryable,
            Self::InvalidResponse(_) | Self::EmptyResponse(_) => false,
        }
    }

    /// The HTTP status code, when one was received.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        let err = ProviderError::Request {
            message: "connection refused".to_string(),
            is_retryable: true,
        };
        assert_eq!(err.kind(), ProviderErrorKind::Request);
        assert!(err.is_retryable());
        assert_eq!(err.status_code(), None);

        let err = ProviderError::EmptyResponse("no candidates".to_string());
        assert_eq!(err.kind(), ProviderErrorKind::EmptyResponse);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_display_is_the_plain_message() {
        let err = ProviderError::Api {
            status_code: 429,
            message: "RESOURCE_EXHAUSTED: quota exceeded".to_string(),
            is_retryable: true,
            retry_after: Some(Duration::from_secs(7)),
        };
        assert_eq!(err.to_string(), "RESOURCE_EXHAUSTED: quota exceeded");
        assert_eq!(err.status_code(), Some(429));
    }
}
