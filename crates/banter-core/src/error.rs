//! Error types for the Banter domain layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shared error type for the domain layer.
///
/// Provider-call failures have their own type in `banter-providers`; this
/// enum covers everything that can go wrong before a request is ever built.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoreError {
    /// A required API key is absent from the process environment.
    ///
    /// Startup must halt on this error before any input is accepted.
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// A generation parameter was rejected by validation.
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}

impl CoreError {
    /// Creates a MissingCredential error
    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self::MissingCredential(message.into())
    }

    /// Creates an InvalidSetting error
    pub fn invalid_setting(message: impl Into<String>) -> Self {
        Self::InvalidSetting(message.into())
    }

    /// Check if this is a MissingCredential error
    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential(_))
    }

    /// Check if this is an InvalidSetting error
    pub fn is_invalid_setting(&self) -> bool {
        matches!(self, Self::InvalidSetting(_))
    }
}

/// A type alias for `Result<T, CoreError>`.
pub type Result<T> = std::result::Result<T, CoreError>;
