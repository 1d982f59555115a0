//! Supported LLM model versions.
//!
//! The choice sets offered by the parameter panel are fixed here; Banter
//! does not call the providers' model-listing APIs.
//!
//! # Supported Models
//!
//! ## Google Gemini
//!
//! | Model ID | Notes |
//! |----------|-------|
//! | `gemini-1.5-flash` | Fast, budget-friendly (default) |
//! | `gemini-1.5-pro` | Stronger reasoning |
//!
//! Reference: <https://ai.google.dev/gemini-api/docs/models>
//!
//! ## OpenAI
//!
//! | Model ID | Notes |
//! |----------|-------|
//! | `gpt-4o-mini` | Smaller, faster (default) |
//! | `gpt-4o` | Flagship |
//!
//! Reference: <https://platform.openai.com/docs/models>
//!
//! # How to Add or Update Model Versions
//!
//! When a provider releases a new model, update these locations:
//!
//! 1. The catalog constants below (`GEMINI_MODELS`, `OPENAI_MODELS`)
//! 2. The default constants below if the default changes
//! 3. The model table in this documentation

use crate::provider::ProviderKind;

/// Models selectable for a Gemini session.
pub const GEMINI_MODELS: &[&str] = &["gemini-1.5-flash", "gemini-1.5-pro"];

/// Models selectable for an OpenAI session.
pub const OPENAI_MODELS: &[&str] = &["gpt-4o-mini", "gpt-4o"];

/// Default Gemini model when no model is specified.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Default OpenAI model when no model is specified.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Returns the fixed choice set for the given provider.
pub fn catalog(kind: ProviderKind) -> &'static [&'static str] {
    match kind {
        ProviderKind::Gemini => GEMINI_MODELS,
        ProviderKind::OpenAi => OPENAI_MODELS,
    }
}

/// Checks whether `model` is in the provider's choice set.
pub fn is_supported(kind: ProviderKind, model: &str) -> bool {
    catalog(kind).contains(&model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_are_non_empty_and_contain_defaults() {
        assert!(GEMINI_MODELS.contains(&DEFAULT_GEMINI_MODEL));
        assert!(OPENAI_MODELS.contains(&DEFAULT_OPENAI_MODEL));
    }

    #[test]
    fn test_is_supported_rejects_cross_provider_models() {
        assert!(is_supported(ProviderKind::OpenAi, "gpt-4o-mini"));
        assert!(!is_supported(ProviderKind::OpenAi, "gemini-1.5-flash"));
        assert!(!is_supported(ProviderKind::Gemini, "gpt-4o"));
    }
}
