//! Layout components (nav bar, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows of the bordered nav bar at the top
pub const NAV_HEIGHT: u16 = 3;

/// Rows of the status line at the bottom
pub const STATUS_HEIGHT: u16 = 1;

/// Split the terminal into nav bar and main content, reserving the
/// bottom line for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the top nav bar with the active view highlighted
pub fn draw_nav_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            " ✦ Mystica ",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];

    for view in View::ALL.iter() {
        let style = if *view == app.state.current_view {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!(" {} {} ", view.nav_index() + 1, view.label()),
            style,
        ));
    }

    let nav = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(nav, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(STATUS_HEIGHT),
        width: area.width,
        height: STATUS_HEIGHT,
    };

    let mut spans = vec![];
    if app.config.show_hints() {
        spans.push(Span::styled(
            format!(" {}", get_view_hints(app)),
            Style::default().fg(Color::Gray),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: status_area.y,
        width: quit_hint.len() as u16,
        height: STATUS_HEIGHT,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view (or the open dialog)
fn get_view_hints(app: &App) -> &'static str {
    if app.state.reservation.is_some() {
        return "Tab:next  ^S:send  Esc:close";
    }
    match app.state.current_view {
        View::Home => "j/k:scroll  n/p:section  1-5:nav  q:quit",
        View::Services => "j/k:select  Enter:reserve  1-5:nav  q:quit",
        View::Testimonials => "h/l:slide  Space:pause  1-5:nav  q:quit",
        View::Faq => "j/k:select  Enter:toggle  1-5:nav  q:quit",
        View::Contact => "Tab:next  ^S:send  Esc:back",
    }
}
