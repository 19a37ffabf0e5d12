//! Form domain: fields, validation, and the submission workflow

mod field;
mod form;
mod validate;
mod workflow;

pub use field::*;
pub use form::*;
pub use validate::*;
pub use workflow::*;
