//! Application core logic and key handling

use crate::backend::{BackendClient, OnboardingApi};
use crate::config::AppConfig;
use crate::state::{AppState, FormFocus};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// User-visible acknowledgment after a successful submission
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Backend client for submitting the form
    backend: Box<dyn OnboardingApi>,
    /// Whether the app should quit
    quit: bool,
    /// Whether the success dialog is showing
    pub show_success: bool,
    /// Transient status-bar message (required-field nudges)
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance against the configured backend
    pub fn new(config: &AppConfig) -> Self {
        Self::with_backend(Box::new(BackendClient::new(config)))
    }

    fn with_backend(backend: Box<dyn OnboardingApi>) -> Self {
        Self {
            state: AppState::default(),
            backend,
            quit: false,
            show_success: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // The success dialog swallows input until dismissed
        if self.show_success {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.show_success = false;
            }
            return Ok(());
        }

        match key.code {
            // Submit from anywhere (Ctrl+S)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_form().await;
            }
            KeyCode::Tab => self.state.focus_next(),
            KeyCode::BackTab => self.state.focus_prev(),
            KeyCode::Up => self.state.option_up(),
            KeyCode::Down => self.state.option_down(),
            KeyCode::Enter => match self.state.focus {
                FormFocus::Submit => self.submit_form().await,
                FormFocus::JobTitle => self.state.focus_next(),
                _ => self.state.activate_option(),
            },
            KeyCode::Char(' ') if self.state.focus.option_count() > 0 => {
                self.state.activate_option();
            }
            KeyCode::Char(c) if matches!(self.state.focus, FormFocus::JobTitle) => {
                self.state.form.push_job_title_char(c);
            }
            KeyCode::Backspace if matches!(self.state.focus, FormFocus::JobTitle) => {
                self.state.form.pop_job_title_char();
            }
            KeyCode::Esc => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Submit the form to the backend
    ///
    /// At most one submission is in flight at a time; the request is
    /// awaited inline, and the in-flight flag returns to false on every
    /// branch.
    pub async fn submit_form(&mut self) {
        if self.state.status.in_flight {
            return;
        }

        if let Some(field) = self.state.form.missing_required() {
            self.status_message = Some(format!("{field} is required"));
            return;
        }

        self.status_message = None;
        self.state.status.begin();

        let submission = self.state.form.to_submission();
        match self.backend.submit_onboarding(&submission).await {
            Ok(()) => {
                tracing::info!(job_title = %submission.job_title, "onboarding form submitted");
                self.state.status.succeed();
                self.state.clear_form();
                self.show_success = true;
            }
            Err(err) => {
                tracing::warn!(error = %err, "onboarding submission failed");
                self.state.status.fail(err.to_string());
            }
        }
    }
}
