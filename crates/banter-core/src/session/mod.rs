//! Session domain model.
//!
//! A session owns everything that used to live in the UI framework's
//! ambient state: the transcript, the generation settings, and the
//! idle/responding mode. It is created at startup, passed explicitly into
//! the turn loop and the renderer, and dropped at exit.

pub mod message;
pub mod transcript;

pub use message::{ChatRole, ChatTurn};
pub use transcript::Transcript;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::provider::ProviderKind;
use crate::settings::GenerationSettings;

/// The system's only state machine: waiting for input, or one provider
/// call in flight. There are no intermediate, cancelled, or timed-out
/// states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionMode {
    /// Waiting for input.
    Idle,
    /// A provider call is in flight.
    Responding,
}

/// One UI session's explicit state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    /// Unique session identifier (UUID format).
    pub id: String,
    /// Timestamp when the session started (RFC 3339 format).
    pub started_at: String,
    /// The provider this session is bound to.
    pub provider: ProviderKind,
    /// Current mode.
    pub mode: SessionMode,
    /// Current generation parameters; snapshotted per turn, never attached
    /// to past turns.
    pub settings: GenerationSettings,
    /// The session's conversation history.
    pub transcript: Transcript,
}

impl ChatSession {
    /// Creates a fresh session bound to `provider`, with default settings
    /// and an empty transcript.
    pub fn new(provider: ProviderKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            started_at: chrono::Utc::now().to_rfc3339(),
            provider,
            mode: SessionMode::Idle,
            settings: GenerationSettings::defaults_for(provider),
            transcript: Transcript::new(),
        }
    }

    /// Marks a provider call as in flight.
    pub fn begin_response(&mut self) {
        self.mode = SessionMode::Responding;
    }

    /// Marks the in-flight call as finished, successfully or not.
    pub fn complete_response(&mut self) {
        self.mode = SessionMode::Idle;
    }

    /// Whether the session is waiting for input.
    pub fn is_idle(&self) -> bool {
        self.mode == SessionMode::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_idle_and_empty() {
        let session = ChatSession::new(ProviderKind::Gemini);
        assert!(session.is_idle());
        assert!(session.transcript.is_empty());
        assert_eq!(session.settings.model, "gemini-1.5-flash");
        assert!(!session.id.is_empty());
    }

    #[test]
    fn test_sessions_get_unique_ids() {
        let a = ChatSession::new(ProviderKind::OpenAi);
        let b = ChatSession::new(ProviderKind::OpenAi);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_mode_transitions() {
        let mut session = ChatSession::new(ProviderKind::OpenAi);
        session.begin_response();
        assert_eq!(session.mode, SessionMode::Responding);
        session.complete_response();
        assert!(session.is_idle());
    }
}
