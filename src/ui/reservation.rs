//! Reservation dialog overlay

use crate::app::App;
use crate::ui::components::{
    centered_rect, draw_dialog_frame, draw_field, field_height, render_button, BUTTON_HEIGHT,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const DIALOG_WIDTH: u16 = 48;

pub fn draw(frame: &mut Frame, app: &App) {
    let Some(reservation) = app.state.reservation.as_ref() else {
        return;
    };
    let form = &reservation.form;

    let fields_height: u16 = form.fields.iter().map(field_height).sum();
    // borders + price line + spacer + fields + button
    let height = 2 + 2 + fields_height + BUTTON_HEIGHT;
    let area = centered_rect(DIALOG_WIDTH, height, frame.area());
    let inner = draw_dialog_frame(frame, area, "Reserve a reading");

    let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
    for field in &form.fields {
        constraints.push(Constraint::Length(field_height(field)));
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let price_line = Paragraph::new(Line::from(vec![
        Span::raw(reservation.service_name.as_str()),
        Span::raw("  "),
        Span::styled(
            reservation.service_price.as_str(),
            Style::default().fg(Color::Yellow),
        ),
    ]));
    frame.render_widget(price_line, chunks[0]);

    for (idx, field) in form.fields.iter().enumerate() {
        draw_field(frame, chunks[idx + 2], field, form.active_index == idx);
    }

    let button_chunk = chunks[form.fields.len() + 2];
    let button_area = Rect {
        width: (form.submit_display_label().chars().count() as u16 + 4).min(inner.width),
        ..button_chunk
    };
    render_button(
        frame,
        button_area,
        form.submit_display_label(),
        form.is_submit_row_active(),
        !form.busy,
    );
}
