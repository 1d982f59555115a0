//! Turn orchestration.
//!
//! One call per user submission: snapshot the settings, build a fresh
//! provider client, render the prompt template, send, extract text. The
//! call blocks the session's only flow of control until the provider
//! answers or fails; there is no retry, no timeout beyond the transport's
//! own defaults, and no partial result.

use banter_core::{GenerationSettings, PromptTemplate, ProviderKind};

use crate::chat_model::ChatModel;
use crate::error::ProviderError;
use crate::gemini::GeminiClient;
use crate::openai::OpenAiClient;

/// Drives one conversation turn against the session's provider.
///
/// Owns the pieces fixed at startup (provider kind, API key, prompt
/// template); the generation settings are passed in per turn so the panel's
/// current values always win.
pub struct TurnOrchestrator {
    provider: ProviderKind,
    api_key: String,
    template: PromptTemplate,
}

impl TurnOrchestrator {
    /// Creates an orchestrator with the default prompt template.
    pub fn new(provider: ProviderKind, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            api_key: api_key.into(),
            template: PromptTemplate::default(),
        }
    }

    /// Overrides the prompt template after construction.
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    /// The provider this orchestrator dispatches to.
    pub fn provider(&self) -> ProviderKind {
        self.provider
    }

    /// The prompt template used for every turn.
    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Produces the reply for one question.
    ///
    /// Exactly one provider request is issued per call, from a client
    /// constructed for this call alone. On success the extracted text is
    /// returned verbatim, with no post-processing or truncation.
    ///
    /// # Errors
    ///
    /// Every failure mode - request construction, transmission, HTTP error
    /// status, envelope parsing, empty candidates - is caught at this
    /// boundary and returned as a [`ProviderError`]. The session remains
    /// usable for further attempts.
    pub async fn respond(
        &self,
        question: &str,
        settings: &GenerationSettings,
    ) -> Result<String, ProviderError> {
        let prompt = self.template.render(question);
        let client = self.build_client(settings);

        tracing::debug!(
            provider = %self.provider,
            model = client.model_id(),
            "dispatching chat turn"
        );

        client.generate(&prompt).await.inspect_err(|err| {
            tracing::error!(
                provider = %self.provider,
                kind = %err.kind(),
                "provider call failed: {err}"
            );
        })
    }

    fn build_client(&self, settings: &GenerationSettings) -> Box<dyn ChatModel> {
        match self.provider {
            ProviderKind::Gemini => Box::new(GeminiClient::new(&self.api_key, settings)),
            ProviderKind::OpenAi => Box::new(OpenAiClient::new(&self.api_key, settings)),
        }
    }
}
