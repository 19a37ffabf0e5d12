//! Application state module

mod app_state;
mod carousel;
mod content;
mod faq;
mod forms;
mod notification;
mod reveal;

pub use app_state::*;
pub use carousel::*;
pub use content::*;
pub use faq::*;
pub use forms::*;
pub use notification::*;
pub use reveal::*;
