//! Transcript rendering.
//!
//! A pure read over the transcript: one role-tagged block per turn, redrawn
//! in full after every completed turn. No diffing, no state.

use banter_core::{ChatRole, Transcript};
use colored::Colorize;

/// Prefix that marks a bot turn as a recorded failure.
pub const ERROR_PREFIX: &str = "Error:";

/// Renders the whole transcript as display lines, oldest first.
///
/// Idempotent: the same transcript always produces the same lines. User
/// turns are green, bot turns bright blue, and bot turns that record a
/// failure are red so errors stay visually distinct from chat content.
pub fn transcript_lines(transcript: &Transcript) -> Vec<String> {
    let mut lines = Vec::new();

    for turn in transcript.turns() {
        lines.push(format!("[{}]", turn.role).bright_magenta().to_string());
        for line in turn.text.lines() {
            let styled = match turn.role {
                ChatRole::User => line.green().to_string(),
                ChatRole::Bot if turn.text.starts_with(ERROR_PREFIX) => line.red().to_string(),
                ChatRole::Bot => line.bright_blue().to_string(),
            };
            lines.push(styled);
        }
        lines.push(String::new());
    }

    lines
}

/// Formats a provider failure as the bot turn's recorded text.
pub fn failure_text(err: &banter_providers::ProviderError) -> String {
    format!("{} {}", ERROR_PREFIX, err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use banter_providers::ProviderError;

    fn plain() {
        // Keep assertions independent of the terminal.
        colored::control::set_override(false);
    }

    #[test]
    fn test_render_tags_each_turn_with_its_role() {
        plain();
        let mut transcript = Transcript::new();
        transcript.record_exchange("What is 2+2?", "4");

        let lines = transcript_lines(&transcript);

        assert_eq!(lines[0], "[User]");
        assert_eq!(lines[1], "What is 2+2?");
        assert_eq!(lines[3], "[Bot]");
        assert_eq!(lines[4], "4");
    }

    #[test]
    fn test_render_is_idempotent() {
        plain();
        let mut transcript = Transcript::new();
        transcript.record_exchange("first", "one");
        transcript.record_exchange("second", "two\nlines");

        assert_eq!(transcript_lines(&transcript), transcript_lines(&transcript));
    }

    #[test]
    fn test_render_splits_multi_line_replies() {
        plain();
        let mut transcript = Transcript::new();
        transcript.record_exchange("list two fruit", "apple\nbanana");

        let lines = transcript_lines(&transcript);
        assert!(lines.contains(&"apple".to_string()));
        assert!(lines.contains(&"banana".to_string()));
    }

    #[test]
    fn test_failure_text_contains_error_marker() {
        let err = ProviderError::Request {
            message: "connection refused".to_string(),
            is_retryable: true,
        };
        let text = failure_text(&err);
        assert!(text.contains("Error"));
        assert!(text.contains("connection refused"));
        assert!(text.starts_with(ERROR_PREFIX));
    }
}
