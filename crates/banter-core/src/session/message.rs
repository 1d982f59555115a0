//! Conversation turn types.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum ChatRole {
    /// The person typing questions.
    User,
    /// The remote model's reply (or the formatted failure standing in for it).
    Bot,
}

/// A single turn in a session transcript.
///
/// Turns are immutable once created and are only ever appended; they are
/// discarded with the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// The role of the turn's author.
    pub role: ChatRole,
    /// The turn's text, verbatim.
    pub text: String,
    /// Timestamp when the turn was created (RFC 3339 format).
    pub timestamp: String,
}

impl ChatTurn {
    /// Creates a user turn stamped with the current time.
    pub fn user(text: impl Into<String>) -> Self {
        Self::stamped(ChatRole::User, text)
    }

    /// Creates a bot turn stamped with the current time.
    pub fn bot(text: impl Into<String>) -> Self {
        Self::stamped(ChatRole::Bot, text)
    }

    fn stamped(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
