//! FAQ view: accordion with a single open entry

use crate::app::App;
use crate::state::FAQ_ENTRIES;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::new();

    for (idx, entry) in FAQ_ENTRIES.iter().enumerate() {
        let is_open = app.state.faq.is_open(idx);
        let is_selected = idx == app.state.faq.selected;

        let marker = if is_open { "▼" } else { "▶" };
        let question_style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        lines.push(Line::from(Span::styled(
            format!("{marker} {}", entry.question),
            question_style,
        )));
        if is_open {
            lines.push(Line::from(Span::styled(
                format!("   {}", entry.answer),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        area,
    );
}
