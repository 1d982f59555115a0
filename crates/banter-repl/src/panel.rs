//! Parameter panel.
//!
//! The sidebar of the original UI becomes slash commands: one dropdown
//! (`/model`) and two sliders (`/temperature`, `/tokens`), plus `/settings`
//! to inspect the current values. Invalid input leaves the settings
//! unchanged and reports the validation message.

use banter_core::{ChatSession, models};

/// Slash commands the panel understands, used for completion and `/help`.
pub const COMMANDS: &[&str] = &["/help", "/model", "/settings", "/temperature", "/tokens"];

/// A parsed panel command.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelCommand {
    /// Select a model from the active provider's catalog.
    Model(String),
    /// Set the sampling temperature.
    Temperature(f32),
    /// Set the maximum output tokens.
    MaxTokens(u32),
    /// Show the current settings.
    Settings,
    /// Show the command list.
    Help,
}

/// Parses a slash-command line.
///
/// # Errors
///
/// Returns a user-facing message for unknown commands or unusable
/// arguments.
pub fn parse(line: &str) -> Result<PanelCommand, String> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default();
    let argument = words.next();

    match command {
        "/model" => argument
            .map(|m| PanelCommand::Model(m.to_string()))
            .ok_or_else(|| "usage: /model <model-id>".to_string()),
        "/temperature" => argument
            .and_then(|t| t.parse::<f32>().ok())
            .map(PanelCommand::Temperature)
            .ok_or_else(|| "usage: /temperature <0.0-1.0>".to_string()),
        "/tokens" => argument
            .and_then(|t| t.parse::<u32>().ok())
            .map(PanelCommand::MaxTokens)
            .ok_or_else(|| "usage: /tokens <50-2048>".to_string()),
        "/settings" => Ok(PanelCommand::Settings),
        "/help" => Ok(PanelCommand::Help),
        other => Err(format!("unknown command '{}' (try /help)", other)),
    }
}

/// Applies a command to the session and returns the feedback line.
pub fn apply(command: PanelCommand, session: &mut ChatSession) -> String {
    match command {
        PanelCommand::Model(model) => {
            match session.settings.set_model(session.provider, &model) {
                Ok(()) => format!("model set to {}", session.settings.model),
                Err(err) => err.to_string(),
            }
        }
        PanelCommand::Temperature(temperature) => {
            match session.settings.set_temperature(temperature) {
                Ok(()) => format!("temperature set to {}", session.settings.temperature),
                Err(err) => err.to_string(),
            }
        }
        PanelCommand::MaxTokens(max_tokens) => {
            match session.settings.set_max_tokens(max_tokens) {
                Ok(()) => format!("max tokens set to {}", session.settings.max_tokens),
                Err(err) => err.to_string(),
            }
        }
        PanelCommand::Settings => format!(
            "provider: {} | model: {} | temperature: {} | max tokens: {} (choices: {})",
            session.provider,
            session.settings.model,
            session.settings.temperature,
            session.settings.max_tokens,
            models::catalog(session.provider).join(", ")
        ),
        PanelCommand::Help => format!("commands: {}", COMMANDS.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use banter_core::ProviderKind;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!(
            parse("/model gpt-4o").unwrap(),
            PanelCommand::Model("gpt-4o".to_string())
        );
        assert_eq!(
            parse("/temperature 0.2").unwrap(),
            PanelCommand::Temperature(0.2)
        );
        assert_eq!(parse("/tokens 800").unwrap(), PanelCommand::MaxTokens(800));
        assert_eq!(parse("/settings").unwrap(), PanelCommand::Settings);
        assert_eq!(parse("/help").unwrap(), PanelCommand::Help);
    }

    #[test]
    fn test_parse_reports_usage_for_bad_arguments() {
        assert!(parse("/model").unwrap_err().contains("usage"));
        assert!(parse("/temperature warm").unwrap_err().contains("usage"));
        assert!(parse("/tokens lots").unwrap_err().contains("usage"));
    }

    #[test]
    fn test_parse_rejects_unknown_commands() {
        let message = parse("/plan now").unwrap_err();
        assert!(message.contains("/plan"));
        assert!(message.contains("/help"));
    }

    #[test]
    fn test_apply_updates_settings() {
        let mut session = ChatSession::new(ProviderKind::OpenAi);
        let feedback = apply(PanelCommand::Model("gpt-4o".to_string()), &mut session);
        assert_eq!(session.settings.model, "gpt-4o");
        assert!(feedback.contains("gpt-4o"));

        apply(PanelCommand::Temperature(0.1), &mut session);
        assert_eq!(session.settings.temperature, 0.1);

        apply(PanelCommand::MaxTokens(1024), &mut session);
        assert_eq!(session.settings.max_tokens, 1024);
    }

    #[test]
    fn test_apply_rejected_value_leaves_settings_unchanged() {
        let mut session = ChatSession::new(ProviderKind::Gemini);
        let feedback = apply(PanelCommand::Temperature(2.0), &mut session);
        assert!(feedback.contains("out of range"));
        assert_eq!(session.settings.temperature, 0.7);

        let feedback = apply(PanelCommand::Model("gpt-4o".to_string()), &mut session);
        assert!(feedback.contains("unknown gemini model"));
        assert_eq!(session.settings.model, "gemini-1.5-flash");
    }

    #[test]
    fn test_settings_summary_names_all_three_parameters() {
        let mut session = ChatSession::new(ProviderKind::Gemini);
        let summary = apply(PanelCommand::Settings, &mut session);
        assert!(summary.contains("gemini-1.5-flash"));
        assert!(summary.contains("0.7"));
        assert!(summary.contains("500"));
    }
}
