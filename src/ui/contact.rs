//! Contact view: the salon's contact form

use crate::app::App;
use crate::ui::components::{draw_field, field_height, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const FORM_MAX_WIDTH: u16 = 60;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.contact_form;

    let mut constraints = vec![Constraint::Length(2)];
    for field in &form.fields {
        constraints.push(Constraint::Length(field_height(field)));
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let width = area.width.min(FORM_MAX_WIDTH);
    let form_area = Rect { width, ..area };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(form_area);

    let title = Paragraph::new(vec![Line::from(Span::styled(
        "Get in touch",
        Style::default().add_modifier(Modifier::BOLD),
    ))]);
    frame.render_widget(title, chunks[0]);

    for (idx, field) in form.fields.iter().enumerate() {
        draw_field(frame, chunks[idx + 1], field, form.active_index == idx);
    }

    let button_area = Rect {
        width: (form.submit_display_label().chars().count() as u16 + 4).min(width),
        ..chunks[form.fields.len() + 1]
    };
    render_button(
        frame,
        button_area,
        form.submit_display_label(),
        form.is_submit_row_active(),
        !form.busy,
    );

    // Footer: validation summary while fields are flagged, otherwise the
    // salon's contact details, dimmed
    let footer_area = chunks[form.fields.len() + 2];
    if footer_area.height > 0 {
        let footer_line = if form.has_errors() {
            Line::from(Span::styled(
                "Please correct the highlighted fields.",
                Style::default().fg(Color::Red),
            ))
        } else {
            Line::from(Span::styled(
                "Calle de la Luna 13, Madrid  ·  hello@mystica.example",
                Style::default().fg(Color::DarkGray),
            ))
        };
        frame.render_widget(Paragraph::new(footer_line), footer_area);
    }
}
