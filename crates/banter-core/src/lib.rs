pub mod credential;
pub mod error;
pub mod models;
pub mod prompt;
pub mod provider;
pub mod session;
pub mod settings;

// Re-export the pieces a turn touches.
pub use error::CoreError;
pub use prompt::{PromptTemplate, RenderedPrompt};
pub use provider::ProviderKind;
pub use session::{ChatRole, ChatSession, ChatTurn, SessionMode, Transcript};
pub use settings::GenerationSettings;
