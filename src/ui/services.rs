//! Services view: one bordered card per bookable reading

use crate::app::App;
use crate::format::format_eur;
use crate::ui::components::reveal_style;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

/// Rows one service card occupies (borders, price line, description)
pub const SERVICE_CARD_HEIGHT: u16 = 5;

const CARD_MAX_WIDTH: u16 = 70;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let now = Instant::now();

    for (idx, service) in app.state.services.iter().enumerate() {
        let y = area.y + idx as u16 * SERVICE_CARD_HEIGHT;
        if y + SERVICE_CARD_HEIGHT > area.y + area.height {
            break;
        }
        let card_area = Rect {
            x: area.x,
            y,
            width: area.width.min(CARD_MAX_WIDTH),
            height: SERVICE_CARD_HEIGHT,
        };

        let is_selected = idx == app.state.selected_service;
        let border_style = if is_selected {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let text_style = reveal_style(app.state.services_reveal.progress(idx, now));

        let content = vec![
            Line::from(Span::styled(
                format_eur(service.price),
                Style::default().fg(Color::Yellow),
            )),
            Line::from(Span::styled(service.description, text_style)),
        ];
        let block = Block::default()
            .title(format!(" {} ", service.name))
            .borders(Borders::ALL)
            .border_style(border_style);

        frame.render_widget(
            Paragraph::new(content).wrap(Wrap { trim: true }).block(block),
            card_area,
        );
    }
}
