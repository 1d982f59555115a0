//! Generation parameters.
//!
//! The three values the parameter panel exposes: model, temperature, and
//! maximum output tokens. They are snapshotted on every turn; past turns are
//! never re-associated with the settings that produced them.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::models;
use crate::provider::ProviderKind;

/// Lower bound of the max-tokens slider.
pub const MIN_MAX_TOKENS: u32 = 50;
/// Upper bound of the max-tokens slider.
pub const MAX_MAX_TOKENS: u32 = 2048;
/// Temperature used when the user has not picked one.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Max output tokens used when the user has not picked one.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Adjustable generation parameters for a session.
///
/// Mutations go through the validating setters; a rejected value leaves the
/// previous one in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    /// Model identifier, always from the active provider's catalog.
    pub model: String,
    /// Sampling temperature in `[0.0, 1.0]`.
    pub temperature: f32,
    /// Maximum output length in tokens.
    pub max_tokens: u32,
}

impl GenerationSettings {
    /// Creates the default settings for a provider.
    pub fn defaults_for(kind: ProviderKind) -> Self {
        Self {
            model: kind.default_model().to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Sets the model after checking it against the provider's catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidSetting`] listing the valid choices when
    /// `model` is not in the catalog.
    pub fn set_model(&mut self, kind: ProviderKind, model: &str) -> Result<()> {
        if !models::is_supported(kind, model) {
            return Err(CoreError::invalid_setting(format!(
                "unknown {} model '{}' (choices: {})",
                kind,
                model,
                models::catalog(kind).join(", ")
            )));
        }
        self.model = model.to_string();
        Ok(())
    }

    /// Sets the temperature, rejecting values outside `[0.0, 1.0]`.
    pub fn set_temperature(&mut self, temperature: f32) -> Result<()> {
        if !(0.0..=1.0).contains(&temperature) {
            return Err(CoreError::invalid_setting(format!(
                "temperature {} out of range [0.0, 1.0]",
                temperature
            )));
        }
        self.temperature = temperature;
        Ok(())
    }

    /// Sets the max output tokens, rejecting values outside the slider range.
    pub fn set_max_tokens(&mut self, max_tokens: u32) -> Result<()> {
        if !(MIN_MAX_TOKENS..=MAX_MAX_TOKENS).contains(&max_tokens) {
            return Err(CoreError::invalid_setting(format!(
                "max tokens {} out of range [{}, {}]",
                max_tokens, MIN_MAX_TOKENS, MAX_MAX_TOKENS
            )));
        }
        self.max_tokens = max_tokens;
        Ok(())
    }
}
