//! Application state

use super::forms::RegistrationForm;
use std::collections::VecDeque;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The one in-memory form
    pub form: RegistrationForm,

    /// Blocking alerts, shown one at a time
    pub errors: VecDeque<String>,

    /// Number of submissions accepted this session
    pub submitted_count: usize,
}

impl AppState {
    /// Queue an alert for display
    pub fn push_error(&mut self, message: String) {
        self.errors.push_back(message);
    }

    /// Alert currently on screen
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Dismiss the alert currently on screen
    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_errors() {
        let state = AppState::default();
        assert!(!state.has_errors());
        assert!(state.current_error().is_none());
        assert_eq!(state.submitted_count, 0);
    }

    #[test]
    fn test_errors_are_shown_in_order() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));

        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));

        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_dismiss_on_empty_is_noop() {
        let mut state = AppState::default();
        state.dismiss_error();
        assert!(!state.has_errors());
    }
}
