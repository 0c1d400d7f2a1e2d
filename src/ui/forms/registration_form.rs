//! Registration form rendering

use super::field_renderer::{draw_feedback, draw_field};
use crate::app::App;
use crate::state::{FieldName, Form, FormButton};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use crate::validation::{DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the registration form with action sidebar
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw the form fields with their verdict lines
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let border_color = if form.is_buttons_row_active() {
        Color::DarkGray
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(" Developer Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Full name
            Constraint::Length(3), // Username
            Constraint::Length(1),
            Constraint::Length(3), // Password
            Constraint::Length(1),
            Constraint::Length(3), // Specialization
            Constraint::Length(3), // Years of experience
            Constraint::Min(5),    // Description
            Constraint::Length(1),
            Constraint::Length(1), // Help text
        ])
        .margin(1)
        .split(area);

    // Field areas in display order, with the verdict line for validated fields
    let areas = [
        (chunks[0], None),
        (chunks[1], Some(chunks[2])),
        (chunks[3], Some(chunks[4])),
        (chunks[5], None),
        (chunks[6], None),
        (chunks[7], Some(chunks[8])),
    ];

    for (index, (field_area, feedback_area)) in areas.into_iter().enumerate() {
        let Some(field) = form.get_field(index) else {
            continue;
        };
        draw_field(frame, field_area, field, form.active_field() == index);
        if let Some(feedback_area) = feedback_area {
            draw_feedback(frame, feedback_area, app.field_feedback(field.name));
        }
    }

    draw_help_text(frame, chunks[9], app);
}

fn draw_help_text(frame: &mut Frame, area: Rect, app: &App) {
    let key_style = Style::default().fg(Color::Cyan);
    let mut spans = vec![
        Span::styled("Tab", key_style),
        Span::raw(": next field  "),
        Span::styled(crate::platform::SUBMIT_SHORTCUT, key_style),
        Span::raw(": register  "),
        Span::styled(crate::platform::PASTE_SHORTCUT, key_style),
        Span::raw(": paste  "),
        Span::styled("Esc", key_style),
        Span::raw(": quit"),
    ];

    let form = &app.state.form;
    if form.active_field_name() == Some(FieldName::Specialization) {
        spans.push(Span::raw("  "));
        spans.push(Span::styled("←/→", key_style));
        spans.push(Span::raw(": choose"));
    }
    if form.active_field_name() == Some(FieldName::Description) {
        let len = form.description.as_text().trim().chars().count();
        spans.push(Span::raw(format!(
            "  {len}/{DESCRIPTION_MIN_CHARS}-{DESCRIPTION_MAX_CHARS} chars"
        )));
    }

    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_focused = form.is_buttons_row_active();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Register (primary)
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Min(0),
        ])
        .split(inner_area);

    for (chunk, button, accent) in [
        (button_chunks[0], FormButton::Register, Color::Green),
        (button_chunks[1], FormButton::Reset, Color::Yellow),
    ] {
        render_action_button(
            frame,
            chunk,
            button.label(),
            is_focused && form.selected_button == button,
            accent,
        );
    }
}
