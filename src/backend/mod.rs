//! Submission backends

mod simulated;
mod traits;

pub use simulated::*;
pub use traits::*;
