//! Application state definitions

use super::form::{Intent, OnboardingForm, Persona, Vertical};

/// Form control currently holding keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    JobTitle,
    Verticals,
    Persona,
    Intent,
    Submit,
}

impl FormFocus {
    pub fn next(&self) -> Self {
        match self {
            Self::JobTitle => Self::Verticals,
            Self::Verticals => Self::Persona,
            Self::Persona => Self::Intent,
            Self::Intent => Self::Submit,
            Self::Submit => Self::JobTitle,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::JobTitle => Self::Submit,
            Self::Verticals => Self::JobTitle,
            Self::Persona => Self::Verticals,
            Self::Intent => Self::Persona,
            Self::Submit => Self::Intent,
        }
    }

    /// Number of selectable options in the focused control (0 when the
    /// control has no option cursor)
    pub fn option_count(&self) -> usize {
        match self {
            Self::JobTitle | Self::Submit => 0,
            Self::Verticals => Vertical::ALL.len(),
            Self::Persona => Persona::ALL.len(),
            Self::Intent => Intent::ALL.len(),
        }
    }
}

/// Outcome tracking for the one in-flight submission
#[derive(Debug, Clone, Default)]
pub struct SubmissionStatus {
    pub in_flight: bool,
    pub last_error: Option<String>,
}

impl SubmissionStatus {
    /// Mark a submission as started, clearing any stale error
    pub fn begin(&mut self) {
        self.in_flight = true;
        self.last_error = None;
    }

    /// Mark the submission as resolved successfully
    pub fn succeed(&mut self) {
        self.in_flight = false;
        self.last_error = None;
    }

    /// Mark the submission as resolved with an error
    pub fn fail(&mut self, message: impl Into<String>) {
        self.in_flight = false;
        self.last_error = Some(message.into());
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Field values entered so far
    pub form: OnboardingForm,
    /// In-flight flag and last submission error
    pub status: SubmissionStatus,
    /// Focused control
    pub focus: FormFocus,
    /// Cursor within the focused option group
    pub option_index: usize,
}

impl AppState {
    /// Move focus to the next control
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.option_index = 0;
    }

    /// Move focus to the previous control
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
        self.option_index = 0;
    }

    /// Move the option cursor up within the focused group
    pub fn option_up(&mut self) {
        if self.focus.option_count() > 0 {
            self.option_index = self.option_index.saturating_sub(1);
        }
    }

    /// Move the option cursor down within the focused group
    pub fn option_down(&mut self) {
        let count = self.focus.option_count();
        if count > 0 && self.option_index < count - 1 {
            self.option_index += 1;
        }
    }

    /// Activate the highlighted option in the focused group
    pub fn activate_option(&mut self) {
        match self.focus {
            FormFocus::Verticals => {
                if let Some(v) = Vertical::ALL.get(self.option_index) {
                    self.form.toggle_vertical(*v);
                }
            }
            FormFocus::Persona => {
                if let Some(p) = Persona::ALL.get(self.option_index) {
                    self.form.set_persona(*p);
                }
            }
            FormFocus::Intent => {
                if let Some(i) = Intent::ALL.get(self.option_index) {
                    self.form.set_intent(*i);
                }
            }
            FormFocus::JobTitle | FormFocus::Submit => {}
        }
    }

    /// Clear the form and return focus to the first field
    pub fn clear_form(&mut self) {
        self.form.reset();
        self.focus = FormFocus::JobTitle;
        self.option_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_forward() {
        let mut state = AppState::default();
        assert_eq!(state.focus, FormFocus::JobTitle);
        state.focus_next();
        assert_eq!(state.focus, FormFocus::Verticals);
        state.focus_next();
        state.focus_next();
        state.focus_next();
        assert_eq!(state.focus, FormFocus::Submit);
        state.focus_next();
        assert_eq!(state.focus, FormFocus::JobTitle);
    }

    #[test]
    fn test_focus_cycles_backward() {
        let mut state = AppState::default();
        state.focus_prev();
        assert_eq!(state.focus, FormFocus::Submit);
        state.focus_prev();
        assert_eq!(state.focus, FormFocus::Intent);
    }

    #[test]
    fn test_focus_change_resets_option_cursor() {
        let mut state = AppState::default();
        state.focus = FormFocus::Persona;
        state.option_down();
        state.option_down();
        assert_eq!(state.option_index, 2);
        state.focus_next();
        assert_eq!(state.option_index, 0);
    }

    #[test]
    fn test_option_cursor_clamps_at_ends() {
        let mut state = AppState::default();
        state.focus = FormFocus::Verticals;
        state.option_up();
        assert_eq!(state.option_index, 0);
        for _ in 0..10 {
            state.option_down();
        }
        assert_eq!(state.option_index, Vertical::ALL.len() - 1);
    }

    #[test]
    fn test_option_cursor_noop_on_text_field() {
        let mut state = AppState::default();
        state.option_down();
        assert_eq!(state.option_index, 0);
    }

    #[test]
    fn test_activate_toggles_vertical() {
        let mut state = AppState::default();
        state.focus = FormFocus::Verticals;
        state.option_index = 1;
        state.activate_option();
        assert!(state.form.has_vertical(Vertical::Government));
        state.activate_option();
        assert!(!state.form.has_vertical(Vertical::Government));
    }

    #[test]
    fn test_activate_selects_persona_and_intent() {
        let mut state = AppState::default();
        state.focus = FormFocus::Persona;
        state.option_index = 1;
        state.activate_option();
        assert_eq!(state.form.persona, Some(Persona::RisingStar));

        state.focus = FormFocus::Intent;
        state.option_index = 4;
        state.activate_option();
        assert_eq!(state.form.intent, Some(Intent::BuildingProfessionalBrand));
    }

    #[test]
    fn test_activate_noop_on_submit_focus() {
        let mut state = AppState::default();
        state.focus = FormFocus::Submit;
        state.activate_option();
        assert_eq!(state.form, OnboardingForm::new());
    }

    #[test]
    fn test_clear_form_resets_focus() {
        let mut state = AppState::default();
        state.focus = FormFocus::Intent;
        state.option_index = 3;
        state.form.set_job_title("Engineer".to_string());
        state.clear_form();
        assert_eq!(state.focus, FormFocus::JobTitle);
        assert_eq!(state.option_index, 0);
        assert_eq!(state.form, OnboardingForm::new());
    }

    #[test]
    fn test_status_begin_clears_stale_error() {
        let mut status = SubmissionStatus::default();
        status.fail("boom");
        assert!(!status.in_flight);
        status.begin();
        assert!(status.in_flight);
        assert!(status.last_error.is_none());
    }

    #[test]
    fn test_status_resolution_always_lands_idle() {
        let mut status = SubmissionStatus::default();
        status.begin();
        status.succeed();
        assert!(!status.in_flight);
        assert!(status.last_error.is_none());

        status.begin();
        status.fail("connection refused");
        assert!(!status.in_flight);
        assert_eq!(status.last_error.as_deref(), Some("connection refused"));
    }
}
