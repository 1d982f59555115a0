//! API key reading.
//!
//! Banter reads exactly one secret: the API key of the session's provider,
//! taken from the process environment. If no key is present the caller must
//! halt before any user input is accepted.

use std::env;

use crate::error::{CoreError, Result};
use crate::provider::ProviderKind;

/// Reads the API key for `kind` from the process environment.
///
/// An empty or whitespace-only value counts as absent.
///
/// # Errors
///
/// Returns [`CoreError::MissingCredential`] naming the variable when it is
/// not set. The error message never contains the key itself.
pub fn read_api_key(kind: ProviderKind) -> Result<String> {
    read_api_key_from(kind, |name| env::var(name).ok())
}

/// Picks the session provider from whichever API key is present.
///
/// Gemini wins when both keys are set.
///
/// # Errors
///
/// Returns [`CoreError::MissingCredential`] naming both variables when
/// neither key is set.
pub fn detect_provider() -> Result<ProviderKind> {
    detect_provider_from(|name| env::var(name).ok())
}

fn read_api_key_from<F>(kind: ProviderKind, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let name = kind.api_key_env();
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(CoreError::missing_credential(format!(
            "{} not found in environment variables",
            name
        ))),
    }
}

fn detect_provider_from<F>(lookup: F) -> Result<ProviderKind>
where
    F: Fn(&str) -> Option<String>,
{
    for kind in [ProviderKind::Gemini, ProviderKind::OpenAi] {
        if read_api_key_from(kind, &lookup).is_ok() {
            return Ok(kind);
        }
    }

    Err(CoreError::missing_credential(format!(
        "neither {} nor {} found in environment variables",
        ProviderKind::Gemini.api_key_env(),
        ProviderKind::OpenAi.api_key_env()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_read_api_key_present() {
        let lookup = lookup_from(&[("GOOGLE_API_KEY", "test-key-123")]);
        let key = read_api_key_from(ProviderKind::Gemini, lookup).unwrap();
        assert_eq!(key, "test-key-123");
    }

    #[test]
    fn test_read_api_key_absent() {
        let lookup = lookup_from(&[]);
        let err = read_api_key_from(ProviderKind::OpenAi, lookup).unwrap_err();
        assert!(err.is_missing_credential());
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_read_api_key_blank_counts_as_absent() {
        let lookup = lookup_from(&[("GOOGLE_API_KEY", "   ")]);
        let err = read_api_key_from(ProviderKind::Gemini, lookup).unwrap_err();
        assert!(err.is_missing_credential());
    }

    #[test]
    fn test_detect_provider_prefers_gemini() {
        let lookup = lookup_from(&[
            ("GOOGLE_API_KEY", "g-key"),
            ("OPENAI_API_KEY", "o-key"),
        ]);
        assert_eq!(detect_provider_from(lookup).unwrap(), ProviderKind::Gemini);
    }

    #[test]
    fn test_detect_provider_falls_back_to_openai() {
        let lookup = lookup_from(&[("OPENAI_API_KEY", "o-key")]);
        assert_eq!(detect_provider_from(lookup).unwrap(), ProviderKind::OpenAi);
    }

    #[test]
    fn test_detect_provider_reports_both_variables() {
        let err = detect_provider_from(lookup_from(&[])).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("GOOGLE_API_KEY"));
        assert!(message.contains("OPENAI_API_KEY"));
    }
}
