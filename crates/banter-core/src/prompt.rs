//! Prompt template.
//!
//! A fixed two-slot structure: a static system instruction plus the current
//! turn's question. The same template instance is reused for every turn and
//! holds no per-turn state.

use serde::{Deserialize, Serialize};

const DEFAULT_SYSTEM_INSTRUCTION: &str =
    "You are a helpful and professional AI assistant named Banter.";

/// The two-message template every turn is rendered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    system: String,
}

impl PromptTemplate {
    /// Creates a template with a custom system instruction.
    pub fn new(system: impl Into<String>) -> Self {
        Self {
            system: system.into(),
        }
    }

    /// The system instruction text.
    pub fn system(&self) -> &str {
        &self.system
    }

    /// Fills the question slot for one turn.
    pub fn render(&self, question: &str) -> RenderedPrompt {
        RenderedPrompt {
            system: self.system.clone(),
            question: question.to_string(),
        }
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_INSTRUCTION)
    }
}

/// A prompt ready to be sent: system instruction plus the user's question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedPrompt {
    /// The system instruction.
    pub system: String,
    /// The user's question, verbatim.
    pub question: String,
}
