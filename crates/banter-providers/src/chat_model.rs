//! The provider seam.

use async_trait::async_trait;
use banter_core::RenderedPrompt;

use crate::error::ProviderError;

/// One single-shot chat call against a remote provider.
///
/// Implementations are stateless: a fresh instance is built for every turn
/// and dropped afterwards, so nothing is pooled or reused across turns.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// The model identifier requests are issued against.
    fn model_id(&self) -> &str;

    /// Sends the rendered prompt and returns the reply text verbatim.
    async fn generate(&self, prompt: &RenderedPrompt) -> Result<String, ProviderError>;
}
