mod panel;
mod render;

use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use banter_core::{ChatSession, ProviderKind, credential, models};
use banter_providers::TurnOrchestrator;

/// CLI helper for rustyline that completes the panel commands and, for
/// `/model`, the active provider's model catalog.
#[derive(Clone)]
struct CliHelper {
    commands: Vec<String>,
    models: Vec<String>,
}

impl CliHelper {
    fn new(provider: ProviderKind) -> Self {
        Self {
            commands: panel::COMMANDS.iter().map(|c| c.to_string()).collect(),
            models: models::catalog(provider)
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        // Complete the /model argument against the provider's catalog.
        if let Some(prefix) = line.strip_prefix("/model ") {
            let candidates: Vec<Pair> = self
                .models
                .iter()
                .filter(|model| model.starts_with(prefix))
                .map(|model| Pair {
                    display: model.clone(),
                    replacement: model.clone(),
                })
                .collect();
            return Ok((line.len() - prefix.len(), candidates));
        }

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

/// The main entry point for the Banter REPL.
///
/// Startup reads the provider API key from the environment and refuses to
/// serve without it, before any input is accepted. The loop then alternates
/// between two states: waiting for input, and one provider call in flight.
/// Each question is answered inline - the call blocks until the provider
/// responds or fails - and the full transcript is redrawn after every
/// completed turn.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // ===== Credential check (fail fast, before any interaction) =====
    let provider = match credential::detect_provider() {
        Ok(provider) => provider,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            std::process::exit(1);
        }
    };
    let api_key = match credential::read_api_key(provider) {
        Ok(key) => key,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            std::process::exit(1);
        }
    };

    let orchestrator = TurnOrchestrator::new(provider, api_key);
    let mut session = ChatSession::new(provider);

    // ===== REPL Setup =====
    let helper = CliHelper::new(provider);
    let mut rl = Editor::new()?;
    rl.set_helper(Some(helper));

    println!("{}", "=== Banter ===".bright_magenta().bold());
    println!(
        "{}",
        format!(
            "Chatting with {} ({}). Type a question, '/help' for settings commands, or 'quit' to exit.",
            provider, session.settings.model
        )
        .bright_black()
    );
    println!();

    // ===== Main REPL Loop =====
    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let trimmed = line.trim();

                // Handle quit command
                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }

                // Skip empty lines
                if trimmed.is_empty() {
                    continue;
                }

                // Add to history
                let _ = rl.add_history_entry(&line);

                // Parameter panel commands
                if trimmed.starts_with('/') {
                    match panel::parse(trimmed) {
                        Ok(command) => {
                            println!("{}", panel::apply(command, &mut session).bright_yellow());
                        }
                        Err(message) => println!("{}", message.bright_black()),
                    }
                    continue;
                }

                // One chat turn: the call blocks until the provider answers.
                session.begin_response();
                println!("{}", "thinking...".bright_black());

                let reply = orchestrator.respond(trimmed, &session.settings).await;
                let bot_text = match reply {
                    Ok(text) => text,
                    Err(err) => {
                        // Failures stay visually distinct, but are recorded
                        // as the bot turn so the exchange stays paired.
                        println!("{}", format!("[{}]", err.kind()).red().bold());
                        render::failure_text(&err)
                    }
                };

                session.transcript.record_exchange(trimmed, bot_text);
                session.complete_response();

                // Full redraw of the whole history, oldest first.
                println!();
                for line in render::transcript_lines(&session.transcript) {
                    println!("{}", line);
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}
