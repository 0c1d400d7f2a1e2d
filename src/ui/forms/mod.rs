//! Form rendering module
//!
//! - `field_renderer`: field and verdict rendering utilities
//! - `registration_form`: the registration form with its action panel

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration;
