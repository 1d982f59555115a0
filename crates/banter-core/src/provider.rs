//! Provider identity.
//!
//! Banter talks to exactly one remote provider per session. The kind is
//! detected at startup from the process environment (see [`crate::credential`])
//! and never changes for the lifetime of the session.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::models;

/// The remote LLM provider a session is bound to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum ProviderKind {
    /// Google Gemini (generateContent REST API).
    Gemini,
    /// OpenAI (chat completions REST API).
    OpenAi,
}

impl ProviderKind {
    /// Name of the environment variable holding this provider's API key.
    pub fn api_key_env(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "GOOGLE_API_KEY",
            ProviderKind::OpenAi => "OPENAI_API_KEY",
        }
    }

    /// The model used when the user has not picked one.
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => models::DEFAULT_GEMINI_MODEL,
            ProviderKind::OpenAi => models::DEFAULT_OPENAI_MODEL,
        }
    }
}
