//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// Draw a form field with its label as the border title
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let color = if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let style = Style::default().fg(color);

    let display_value = field.display_value();
    let display_str = if display_value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        display_value
    };

    let cursor = if is_active { CURSOR } else { "" };
    let cursor_style = Style::default().fg(Color::Cyan);

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(style);

    if field.is_multiline() {
        let inner = block.inner(area);
        let width = inner.width as usize;
        let mut rows = wrap_chars(&display_str, width);
        if is_active {
            // The cursor takes a cell of its own; start a new row when the last is full
            match rows.last() {
                Some(last) if last.chars().count() < width => {}
                _ => rows.push(String::new()),
            }
        }

        let offset = scroll_offset(rows.len(), inner.height as usize);
        let last_row = rows.len().saturating_sub(1);
        let lines: Vec<Line> = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let mut spans = vec![Span::raw(row)];
                if i == last_row {
                    spans.push(Span::styled(cursor, cursor_style));
                }
                Line::from(spans)
            })
            .collect();

        // Rows are pre-wrapped so the scroll offset matches what is drawn
        let paragraph = Paragraph::new(lines).scroll((offset, 0)).block(block);
        frame.render_widget(paragraph, area);
    } else {
        let paragraph = Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, cursor_style),
        ]))
        .wrap(Wrap { trim: false })
        .block(block);
        frame.render_widget(paragraph, area);
    }
}

/// Hard-wrap text into rows of at most `width` characters.
/// Explicit newlines always start a new row.
fn wrap_chars(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    rows
}

/// First row to show so that the last of `total` rows stays visible
fn scroll_offset(total: usize, visible: usize) -> u16 {
    total.saturating_sub(visible.max(1)) as u16
}

/// Draw the verdict line under a validated field.
/// `None` leaves the line blank.
pub fn draw_feedback(frame: &mut Frame, area: Rect, feedback: Option<(bool, &str)>) {
    let line = match feedback {
        None => Line::from(""),
        Some((true, _)) => Line::from(Span::styled(
            " ✅ Valid",
            Style::default().fg(Color::Green),
        )),
        Some((false, message)) => Line::from(Span::styled(
            format!(" ✗ {message}"),
            Style::default().fg(Color::Red),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldKind, FieldName};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_wrap_chars_splits_long_lines() {
        assert_eq!(wrap_chars("abcdefg", 3), vec!["abc", "def", "g"]);
    }

    #[test]
    fn test_wrap_chars_keeps_blank_lines() {
        assert_eq!(wrap_chars("ab\n\ncd", 10), vec!["ab", "", "cd"]);
        assert_eq!(wrap_chars("", 10), vec![""]);
    }

    #[test]
    fn test_scroll_offset_only_when_overflowing() {
        assert_eq!(scroll_offset(3, 5), 0);
        assert_eq!(scroll_offset(5, 5), 0);
        assert_eq!(scroll_offset(12, 5), 7);
    }

    #[test]
    fn test_long_description_keeps_tail_visible() {
        let mut field = FormField::new(FieldName::Description, "Description", FieldKind::Multiline);
        let text = format!("{}END", "x".repeat(997));
        field.push_str(&text);

        let backend = TestBackend::new(40, 7);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_field(frame, frame.area(), &field, true))
            .unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("END"));
        assert!(screen.contains(CURSOR));
    }
}
