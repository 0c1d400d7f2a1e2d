//! Form domain layer
//!
//! Type-safe field values and the registration form that owns them.

mod field;
mod form_state;

pub use field::{FieldKind, FormField};
pub use form_state::{FieldName, Form, FormButton, FormFields, RegistrationForm};

#[cfg(test)]
pub use form_state::BUTTONS_ROW;
