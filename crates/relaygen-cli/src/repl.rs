//! Interactive REPL over the dispatcher.
//!
//! Each line is an independent generation; no conversation state is kept.
//! Line history is shared across sessions through a file in the data dir.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rustyline::config::Configurer;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, warn};

use relaygen_core::utils::get_history_path;
use relaygen_providers::ProviderDispatcher;

use crate::helpers;

const EXIT_COMMANDS: &[&str] = &["exit", "quit", "/exit", "/quit", ":q"];
const MAX_HISTORY: usize = 1000;

/// What a line typed at the prompt asks for.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Blank,
    Exit,
    Prompt(&'a str),
}

fn classify(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Input::Blank
    } else if EXIT_COMMANDS
        .iter()
        .any(|cmd| cmd.eq_ignore_ascii_case(trimmed))
    {
        Input::Exit
    } else {
        Input::Prompt(trimmed)
    }
}

/// A readline editor bound to its history file.
struct HistoryEditor {
    editor: DefaultEditor,
    path: PathBuf,
}

impl HistoryEditor {
    fn open(path: PathBuf) -> Result<Self> {
        let mut editor = DefaultEditor::new().context("failed to start line editor")?;
        editor.set_max_history_size(MAX_HISTORY)?;
        match editor.load_history(&path) {
            Ok(()) => debug!(path = %path.display(), "REPL history loaded"),
            Err(e) => debug!(path = %path.display(), error = %e, "no REPL history loaded"),
        }
        Ok(Self { editor, path })
    }

    /// Next line from the user, or `None` once input ends (Ctrl-C, Ctrl-D, read error).
    fn read_line(&mut self) -> Option<String> {
        match self.editor.readline("You: ") {
            Ok(line) => Some(line),
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => None,
            Err(e) => {
                eprintln!("Input error: {e}");
                None
            }
        }
    }

    fn remember(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    fn persist(mut self) {
        if let Some(parent) = self.path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = self.editor.save_history(&self.path) {
            warn!(path = %self.path.display(), error = %e, "failed to save REPL history");
        }
    }
}

/// Run the interactive REPL loop.
pub async fn run(dispatcher: &ProviderDispatcher, system_prompt: &str, model: &str) -> Result<()> {
    helpers::print_banner(&dispatcher.chain());

    let mut editor = HistoryEditor::open(get_history_path())?;

    while let Some(line) = editor.read_line() {
        let prompt = match classify(&line) {
            Input::Blank => continue,
            Input::Exit => {
                println!("\nGoodbye!");
                break;
            }
            Input::Prompt(prompt) => prompt,
        };

        editor.remember(&line);
        debug!(chars = prompt.chars().count(), "processing input");

        helpers::print_thinking();
        let response = dispatcher.generate(model, system_prompt, prompt).await;
        helpers::clear_thinking();
        helpers::print_response(&response);
    }

    editor.persist();
    Ok(())
}
