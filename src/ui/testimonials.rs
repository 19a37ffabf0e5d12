//! Testimonials view: one slide at a time with position dots

use crate::app::App;
use crate::state::TESTIMONIALS;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let carousel = &app.state.carousel;
    let Some(testimonial) = TESTIMONIALS.get(carousel.index()) else {
        return;
    };

    let dots: String = (0..carousel.len())
        .map(|i| if i == carousel.index() { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ");
    let pause_marker = if carousel.is_paused() { "  (paused)" } else { "" };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("\u{201c}{}\u{201d}", testimonial.quote),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", testimonial.author),
            Style::default().fg(Color::Magenta),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(dots, Style::default().fg(Color::Cyan)),
            Span::styled(pause_marker, Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let block = Block::default()
        .title(" What our visitors say ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::horizontal(2));

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
