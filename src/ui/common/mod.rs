//! Common reusable UI components shared by both form screens

pub mod form;
pub mod message;

pub use form::FormField;
pub use message::{ErrorMessage, SuccessMessage};
