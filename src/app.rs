//! Application state and core logic

use crate::sink::SubmissionSink;
use crate::state::{AppState, FieldKind, FieldName, Form, FormButton};
use crate::submit::SubmitGate;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Destination for accepted submissions
    sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            state: AppState::default(),
            sink,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the alert queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Alerts are modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        self.status_message = None;

        let form = &mut self.state.form;
        let on_buttons = form.is_buttons_row_active();
        let active_kind = form.get_field(form.active_field()).map(|f| f.kind);

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit().await;
            }
            KeyCode::Char('v') if key.modifiers.contains(crate::platform::PASTE_MODIFIER) => {
                self.paste_from_clipboard();
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            // Action row
            KeyCode::Left
            | KeyCode::Right
            | KeyCode::Up
            | KeyCode::Down
            | KeyCode::Char('h')
            | KeyCode::Char('l')
            | KeyCode::Char('j')
            | KeyCode::Char('k')
                if on_buttons =>
            {
                form.toggle_button();
            }
            KeyCode::Enter if on_buttons => match form.selected_button {
                FormButton::Register => self.submit().await,
                FormButton::Reset => {
                    form.reset();
                    self.status_message = Some("Form cleared".to_string());
                }
            },
            // Select field
            KeyCode::Left if active_kind == Some(FieldKind::Select) => form.cycle_choice(false),
            KeyCode::Right | KeyCode::Char(' ') if active_kind == Some(FieldKind::Select) => {
                form.cycle_choice(true)
            }
            // Field input
            KeyCode::Enter if active_kind == Some(FieldKind::Multiline) => form.input_char('\n'),
            KeyCode::Enter => form.next_field(),
            KeyCode::Char(c) if !on_buttons && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.input_char(c)
            }
            KeyCode::Backspace if !on_buttons => form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Run the submit gate and hand an accepted submission to the sink
    pub async fn submit(&mut self) {
        match SubmitGate::check(&self.state.form) {
            Ok(submission) => match self.sink.emit(&submission).await {
                Ok(()) => {
                    self.state.submitted_count += 1;
                    tracing::info!(id = %submission.id, "Submission accepted");
                    self.status_message = Some("Registration submitted!".to_string());
                }
                Err(err) => {
                    tracing::error!("Failed to emit submission: {err:?}");
                    self.push_error(format!("Failed to record registration: {err}"));
                }
            },
            Err(reason) => {
                tracing::debug!(%reason, "Submission rejected");
                self.push_error(reason.to_string());
            }
        }
    }

    /// Paste clipboard text into the active field
    fn paste_from_clipboard(&mut self) {
        match Self::read_clipboard() {
            Ok(text) => self.state.form.paste(&text),
            Err(err) => {
                tracing::warn!("Clipboard read failed: {err:?}");
                self.status_message = Some("Clipboard unavailable".to_string());
            }
        }
    }

    fn read_clipboard() -> Result<String> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        Ok(clipboard.get_text()?)
    }

    /// Flush the sink once the terminal has been restored
    pub async fn finish(&mut self) -> Result<()> {
        self.sink.finish().await
    }

    /// Verdict line for a field: `None` while empty or without live validation
    pub fn field_feedback(&self, name: FieldName) -> Option<(bool, &str)> {
        let form = &self.state.form;
        if form.field(name).as_text().is_empty() {
            return None;
        }
        form.verdict(name)
            .map(|verdict| (verdict.valid, verdict.message.as_str()))
    }
}
