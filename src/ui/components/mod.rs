//! Shared UI components

mod button;
mod dialog;
mod field_renderer;
mod notification;

pub use button::*;
pub use dialog::*;
pub use field_renderer::*;
pub use notification::*;

use ratatui::style::{Color, Style};

/// Text style for an element at the given fade-in progress.
/// Unrevealed elements render invisibly; the fade brightens in steps.
pub fn reveal_style(progress: f32) -> Style {
    if progress >= 1.0 {
        Style::default()
    } else if progress >= 0.5 {
        Style::default().fg(Color::Gray)
    } else if progress > 0.0 {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Black)
    }
}
