//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_registration(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Alerts draw last so they overlay the form
    if let Some(message) = app.state.current_error() {
        let queued = app.state.errors.len().saturating_sub(1);
        components::render_error_dialog(frame, message, queued);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::LogSink;
    use crate::state::FieldName;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 36);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_every_field_label() {
        let app = App::new(Box::new(LogSink));
        let screen = render(&app);
        for label in [
            "Full name",
            "Username",
            "Password",
            "Specialization",
            "Years of experience",
            "Description",
            "Register",
            "Reset",
        ] {
            assert!(screen.contains(label), "missing {label}");
        }
    }

    #[test]
    fn test_password_is_masked_on_screen() {
        let mut app = App::new(Box::new(LogSink));
        app.state.form.set_value(FieldName::Password, "Secret#99");
        let screen = render(&app);
        assert!(!screen.contains("Secret#99"));
        assert!(screen.contains("•••••••••"));
    }

    #[test]
    fn test_invalid_username_shows_message() {
        let mut app = App::new(Box::new(LogSink));
        app.state.form.set_value(FieldName::Username, "ab");
        let screen = render(&app);
        assert!(screen.contains("At least 6 alphanumeric characters"));
    }

    #[test]
    fn test_short_description_shows_message() {
        let mut app = App::new(Box::new(LogSink));
        app.state.form.set_value(FieldName::Description, "too short");
        let screen = render(&app);
        assert!(screen.contains("Between 100 and 1000 characters"));
        assert!(!screen.contains("At least 6 alphanumeric characters"));
    }

    #[test]
    fn test_alert_overlays_form() {
        let mut app = App::new(Box::new(LogSink));
        app.push_error("Please fill in all fields");
        let screen = render(&app);
        assert!(screen.contains("Cannot register"));
        assert!(screen.contains("Please fill in all fields"));
    }
}
