//! Session transcript.
//!
//! An append-only, insertion-ordered sequence of turns, private to one
//! session. Nothing is ever removed, bounded, or persisted; the transcript
//! lives exactly as long as the session.

use serde::{Deserialize, Serialize};

use super::message::ChatTurn;

/// The ordered history of one session's turns.
///
/// After any completed turn the length is even: every user turn is followed
/// by its bot turn. [`Transcript::record_exchange`] appends the pair in one
/// call so no caller can observe a half-recorded turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single turn.
    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    /// Appends a completed exchange: the user's question, then the bot's
    /// answer (which may be a formatted failure).
    pub fn record_exchange(
        &mut self,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) {
        self.turns.push(ChatTurn::user(question));
        self.turns.push(ChatTurn::bot(answer));
    }

    /// All turns in chronological order.
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Number of stored turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the transcript has no turns yet.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
