//! Banner stack rendering

use crate::app::App;
use crate::state::Severity;
use crate::ui::NAV_HEIGHT;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BANNER_HEIGHT: u16 = 3;
const BANNER_MAX_WIDTH: u16 = 60;

/// Draw the auto-dismissing banners stacked below the nav bar,
/// anchored to the right edge
pub fn draw_notifications(frame: &mut Frame, app: &App) {
    let area = frame.area();

    for (idx, notification) in app.state.notifications.items().iter().enumerate() {
        let width = (notification.message.chars().count() as u16 + 6)
            .min(BANNER_MAX_WIDTH)
            .min(area.width.saturating_sub(2));
        let y = NAV_HEIGHT + idx as u16 * BANNER_HEIGHT;
        if y + BANNER_HEIGHT > area.height {
            break;
        }
        let banner_area = Rect {
            x: area.width.saturating_sub(width + 1),
            y,
            width,
            height: BANNER_HEIGHT,
        };

        let (icon, color) = match notification.severity {
            Severity::Success => ("✓", Color::Green),
            Severity::Error => ("✗", Color::Red),
        };

        frame.render_widget(Clear, banner_area);
        let banner = Paragraph::new(Line::from(vec![
            Span::styled(format!(" {icon} "), Style::default().fg(color)),
            Span::raw(notification.message.as_str()),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(banner, banner_area);
    }
}
