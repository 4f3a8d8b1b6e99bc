/// Line-based terminal front end for the prediction form
///
/// Typed or pasted lines build up a draft. An empty line submits the draft
/// once it parses as JSON; until then the blank line is kept as part of the
/// paste. Commands start with `:`.
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::form::render::{render_form, render_panels};
use crate::form::PredictForm;
use crate::logger::{self, LogTag};
use crate::transaction::TransactionRecord;

pub const INTERACTIVE_HELP: &str = "Commands:
  :sample   load the sample transaction into the buffer
  :submit   submit the draft or buffer as is (alias :s)
  :show     show the form, panels and API base
  :clear    discard the draft and empty the buffer
  :help     show this help
  :quit     leave (alias :q)
Paste a JSON object, then press Enter on an empty line to submit it.
An empty line inside an incomplete object is kept as part of the paste.";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Continue(String),
    Quit,
}

pub struct InteractiveSession {
    form: Arc<PredictForm>,
    draft: String,
}

impl InteractiveSession {
    pub fn new(form: Arc<PredictForm>) -> Self {
        Self {
            form,
            draft: String::new(),
        }
    }

    pub fn form(&self) -> &PredictForm {
        &self.form
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Process one input line and return what to print
    pub async fn handle_line(&mut self, line: &str) -> SessionAction {
        let trimmed = line.trim();

        match trimmed {
            ":quit" | ":q" => return SessionAction::Quit,
            ":help" | ":h" => return SessionAction::Continue(INTERACTIVE_HELP.to_string()),
            ":sample" => {
                self.draft.clear();
                self.form.use_sample();
                return SessionAction::Continue(self.form.input());
            }
            ":clear" => {
                self.draft.clear();
                self.form.set_input(String::new());
                return SessionAction::Continue("Buffer cleared.".to_string());
            }
            ":show" => {
                return SessionAction::Continue(render_form(
                    &self.form.snapshot(),
                    self.form.api_base_label(),
                ))
            }
            ":submit" | ":s" => return SessionAction::Continue(self.submit().await),
            _ => {}
        }

        if trimmed.starts_with(':') {
            return SessionAction::Continue(format!(
                "Unknown command '{}'. Type :help for commands.",
                trimmed
            ));
        }

        if trimmed.is_empty() {
            if self.draft.trim().is_empty() {
                return SessionAction::Continue(String::new());
            }
            if TransactionRecord::parse(&self.draft).is_ok() {
                return SessionAction::Continue(self.submit().await);
            }
            self.draft.push('\n');
            return SessionAction::Continue(String::new());
        }

        if !self.draft.is_empty() {
            self.draft.push('\n');
        }
        self.draft.push_str(line);
        SessionAction::Continue(String::new())
    }

    async fn submit(&mut self) -> String {
        if !self.draft.trim().is_empty() {
            self.form.set_input(std::mem::take(&mut self.draft));
        }

        if !self.form.is_submit_enabled() {
            return "Submitting… please wait.".to_string();
        }

        let _ = self.form.submit().await;
        render_panels(&self.form.snapshot())
    }
}

/// Run the form against stdin until EOF or `:quit`
pub async fn run_interactive(form: Arc<PredictForm>) -> std::io::Result<()> {
    let mut session = InteractiveSession::new(form);
    println!(
        "{}",
        render_form(&session.form().snapshot(), session.form().api_base_label())
    );
    println!();
    println!("{}", INTERACTIVE_HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match session.handle_line(&line).await {
            SessionAction::Continue(output) => {
                if !output.is_empty() {
                    println!("{}", output);
                }
            }
            SessionAction::Quit => break,
        }
    }

    logger::debug(LogTag::Form, "Interactive session finished");
    Ok(())
}
