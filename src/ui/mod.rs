//! UI module for rendering the TUI

mod components;
mod contact;
mod faq;
mod home;
mod layout;
mod reservation;
mod services;
mod testimonials;

pub use layout::{NAV_HEIGHT, STATUS_HEIGHT};
pub use services::SERVICE_CARD_HEIGHT;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (nav_area, content_area) = layout::create_layout(area);

    layout::draw_nav_bar(frame, nav_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Home => home::draw(frame, content_area, app),
        View::Services => services::draw(frame, content_area, app),
        View::Testimonials => testimonials::draw(frame, content_area, app),
        View::Faq => faq::draw(frame, content_area, app),
        View::Contact => contact::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, app);

    // Overlays: the reservation modal, then the banner stack on top
    if app.state.reservation.is_some() {
        reservation::draw(frame, app);
    }
    components::draw_notifications(frame, app);
}
