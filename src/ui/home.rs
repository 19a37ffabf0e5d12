//! Home view: the salon's landing sections with scroll and fade-in

use crate::app::App;
use crate::state::HOME_SECTIONS;
use crate::ui::components::reveal_style;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let now = Instant::now();
    let mut lines: Vec<Line> = Vec::new();

    for (idx, section) in HOME_SECTIONS.iter().enumerate() {
        let style = reveal_style(app.state.home_reveal.progress(idx, now));
        lines.push(Line::from(Span::styled(
            section.title,
            style.add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            "─".repeat(section.title.chars().count()),
            style,
        )));
        for body_line in section.body {
            lines.push(Line::from(Span::styled(*body_line, style)));
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).scroll((app.state.home_scroll.offset(), 0));
    frame.render_widget(paragraph, area);
}
