//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field occupies: borders plus content, plus one row for an
/// inline error annotation when the field carries one
pub fn field_height(field: &FormField) -> u16 {
    let base = if field.is_multiline { 6 } else { 3 };
    if field.is_invalid() {
        base + 1
    } else {
        base
    }
}

/// Draw a form field using FormField from the domain layer.
/// An invalid field gets a red border and its error message on the
/// line directly below.
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let (field_area, error_area) = if field.is_invalid() && area.height > 1 {
        (
            Rect {
                height: area.height - 1,
                ..area
            },
            Some(Rect {
                y: area.y + area.height - 1,
                height: 1,
                ..area
            }),
        )
    } else {
        (area, None)
    };

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if field.is_invalid() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_str = if field.value.is_empty() && !is_active {
        "(empty)".to_string()
    } else {
        field.value.clone()
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let title = if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), field_area);

    if let (Some(error_area), Some(message)) = (error_area, field.error.as_deref()) {
        let error = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(error, error_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_height_grows_with_error() {
        let mut field = FormField::email("email", "Email", true);
        assert_eq!(field_height(&field), 3);
        field.set_error("Enter a valid email");
        assert_eq!(field_height(&field), 4);
    }

    #[test]
    fn test_multiline_field_is_taller() {
        let field = FormField::text("message", "Message", true, true);
        assert_eq!(field_height(&field), 6);
    }
}
