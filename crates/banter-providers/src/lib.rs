pub mod chat_model;
pub mod error;
pub mod gemini;
pub mod openai;
pub mod orchestrator;

pub use chat_model::ChatModel;
pub use error::{ProviderError, ProviderErrorKind};
pub use gemini::GeminiClient;
pub use openai::OpenAiClient;
pub use orchestrator::TurnOrchestrator;
