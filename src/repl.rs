//! Terminal front-end for a translation session.
//!
//! Reads one command per line and prints the result, then any notices the
//! command produced, then the page path when the language selection changed.
//! A line that does not start with `:` is taken as text to translate.

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::catalog::{ModelRegistry, Side};
use crate::clipboard::Clipboard;
use crate::session::{NoticeLevel, TranslationSession};

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Models,
    Model(&'a str),
    Langs(Side),
    From(&'a str),
    To(&'a str),
    Swap,
    Copy,
    Keyboard,
    Key(&'a str),
    Text(&'a str),
    Translate,
    Health,
    State,
    Stats,
    Help,
    Quit,
    /// Plain text: set the input and translate
    Submit(&'a str),
    Empty,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Command<'a> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Command::Empty;
        }
        if !line.starts_with(':') {
            return Command::Submit(line);
        }

        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        match (name, arg) {
            (":models", "") => Command::Models,
            (":model", code) if !code.is_empty() => Command::Model(code),
            (":langs", "" | "source") => Command::Langs(Side::Source),
            (":langs", "target") => Command::Langs(Side::Target),
            (":from", code) if !code.is_empty() => Command::From(code),
            (":to", code) if !code.is_empty() => Command::To(code),
            (":swap", "") => Command::Swap,
            (":copy", "") => Command::Copy,
            (":kbd", "") => Command::Keyboard,
            (":key", button) if !button.is_empty() => Command::Key(button),
            (":text", text) => Command::Text(text),
            (":translate", "") => Command::Translate,
            (":health", "") => Command::Health,
            (":state", "") => Command::State,
            (":stats", "") => Command::Stats,
            (":help", "") => Command::Help,
            (":quit" | ":q", "") => Command::Quit,
            _ => Command::Unknown(line),
        }
    }
}

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(Vec<String>),
    Quit,
}

pub struct Repl<C: Clipboard> {
    session: TranslationSession,
    clipboard: C,
}

impl<C: Clipboard> Repl<C> {
    pub fn new(session: TranslationSession, clipboard: C) -> Self {
        Self { session, clipboard }
    }

    pub fn session(&self) -> &TranslationSession {
        &self.session
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Run until `:quit` or end of input.
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        loop {
            let prompt = format!("{}> ", self.session.state().selected_model);
            output.write_all(prompt.as_bytes()).await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            match self.execute(&line).await {
                Outcome::Continue(reply) => {
                    for reply_line in reply {
                        output.write_all(reply_line.as_bytes()).await?;
                        output.write_all(b"\n").await?;
                    }
                }
                Outcome::Quit => break,
            }
        }

        output.flush().await?;
        Ok(())
    }

    /// Run one input line and collect what should be printed.
    pub async fn execute(&mut self, line: &str) -> Outcome {
        let command = Command::parse(line);
        debug!("Command: {:?}", command);

        let selection_before = self.selection();
        let mut reply = match command {
            Command::Quit => return Outcome::Quit,
            command => self.dispatch(command).await,
        };

        let strings = self.session.strings();
        for notice in self.session.take_notices() {
            let marker = match notice.level() {
                NoticeLevel::Success => "✔",
                NoticeLevel::Error => "✖",
            };
            reply.push(format!("{} {}", marker, notice.message(strings)));
        }

        if self.selection() != selection_before {
            reply.push(format!("→ {}", self.session.page_path()));
        }

        Outcome::Continue(reply)
    }

    fn selection(&self) -> (Option<String>, Option<String>) {
        let state = self.session.state();
        (state.source_language.clone(), state.target_language.clone())
    }

    async fn dispatch(&mut self, command: Command<'_>) -> Vec<String> {
        let strings = self.session.strings();

        match command {
            Command::Models => {
                let selected = self.session.state().selected_model.code();
                ModelRegistry::get()
                    .list_all()
                    .into_iter()
                    .map(|model| {
                        let marker = if model.code == selected { "*" } else { " " };
                        format!("{} {:<12} {}", marker, model.code, model.label)
                    })
                    .collect()
            }
            Command::Model(code) => match self.session.select_model(code) {
                Ok(model) => vec![format!("{}: {}", strings.model_label, model.label())],
                Err(e) => vec![invalid_selection(strings.invalid_selection, &e)],
            },
            Command::Langs(side) => self
                .session
                .available_languages(side)
                .into_iter()
                .map(|lang| format!("{:<10} {}", lang.code, lang.label))
                .collect(),
            Command::From(code) => match self.session.select_source_language(code) {
                Ok(()) => vec![self.language_line(Side::Source)],
                Err(e) => vec![invalid_selection(strings.invalid_selection, &e)],
            },
            Command::To(code) => match self.session.select_target_language(code) {
                Ok(()) => vec![self.language_line(Side::Target)],
                Err(e) => vec![invalid_selection(strings.invalid_selection, &e)],
            },
            Command::Swap => {
                self.session.swap_languages();
                vec![
                    self.language_line(Side::Source),
                    self.language_line(Side::Target),
                    format!("{}: {}", strings.input_label, self.session.state().input_text),
                ]
            }
            Command::Copy => {
                // Outcome is reported through the queued notice.
                let _ = self.session.copy_result(&mut self.clipboard);
                Vec::new()
            }
            Command::Keyboard => {
                if self.session.toggle_keyboard() {
                    self.keyboard_lines()
                } else {
                    Vec::new()
                }
            }
            Command::Key(button) => {
                let layout_before = self.session.state().keyboard_layout;
                self.session.on_key_press(button);

                let mut lines = Vec::new();
                if self.session.state().keyboard_layout != layout_before {
                    lines.extend(self.keyboard_lines());
                }
                lines.push(format!("{}: {}", strings.input_label, self.session.state().input_text));
                lines
            }
            Command::Text(text) => {
                self.session.set_input_text(text);
                Vec::new()
            }
            Command::Translate => self.translate().await,
            Command::Submit(text) => {
                self.session.set_input_text(text);
                self.translate().await
            }
            Command::Health => match self.session.client().health().await {
                Ok(report) => {
                    let mut lines = vec![report.status.clone()];
                    lines.extend(
                        report
                            .models
                            .iter()
                            .map(|(name, status)| format!("  {:<12} {}", name, status)),
                    );
                    lines
                }
                Err(e) => {
                    warn!("Health check failed: {}", e);
                    vec![format!("✖ {}", e)]
                }
            },
            Command::State => self.state_lines(),
            Command::Stats => {
                let report = self.session.metrics().report();
                vec![serde_json::to_string_pretty(&report).unwrap_or_default()]
            }
            Command::Help => strings.help.lines().map(str::to_string).collect(),
            Command::Empty => Vec::new(),
            Command::Unknown(command) => {
                vec![strings.unknown_command.replace("{command}", command)]
            }
            Command::Quit => Vec::new(),
        }
    }

    async fn translate(&mut self) -> Vec<String> {
        match self.session.submit_translation().await {
            Ok(translation) => vec![format!("⇒ {}", translation)],
            Err(_) => Vec::new(),
        }
    }

    fn language_line(&self, side: Side) -> String {
        let strings = self.session.strings();
        let label = match side {
            Side::Source => strings.source_label,
            Side::Target => strings.target_label,
        };

        match (
            self.session.state().language(side),
            self.session.selected_label(side),
        ) {
            (Some(code), Some(name)) => format!("{}: {} ({})", label, name, code),
            _ => format!("{}: {}", label, strings.not_selected),
        }
    }

    fn keyboard_lines(&self) -> Vec<String> {
        let layout = self.session.state().keyboard_layout;
        let mut lines = vec![format!("[{}]", layout)];
        lines.extend(layout.display_rows().into_iter().map(|row| format!("  {}", row)));
        lines
    }

    fn state_lines(&self) -> Vec<String> {
        let strings = self.session.strings();
        let state = self.session.state();

        let mut lines = vec![
            format!("{}: {}", strings.model_label, state.selected_model.label()),
            self.language_line(Side::Source),
            self.language_line(Side::Target),
            format!("{}: {}", strings.input_label, state.input_text),
        ];
        if !state.translated_text.is_empty() {
            lines.push(format!("⇒ {}", state.translated_text));
        }
        if state.keyboard_visible {
            lines.push(format!("[{}]", state.keyboard_layout));
        }
        lines.push(format!("→ {}", self.session.page_path()));
        lines
    }
}

fn invalid_selection(template: &str, error: &dyn std::fmt::Display) -> String {
    template.replace("{error}", &error.to_string())
}
