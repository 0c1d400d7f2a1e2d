//! Registration form state

use super::field::{FieldKind, FormField};
use crate::validation::{self, Verdict};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Names of the registration form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FullName,
    Username,
    Password,
    Specialization,
    YearsExperience,
    Description,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::FullName,
        FieldName::Username,
        FieldName::Password,
        FieldName::Specialization,
        FieldName::YearsExperience,
        FieldName::Description,
    ];

    /// Key of the field in the emitted payload
    pub fn key(&self) -> &'static str {
        match self {
            FieldName::FullName => "fullName",
            FieldName::Username => "username",
            FieldName::Password => "password",
            FieldName::Specialization => "specialization",
            FieldName::YearsExperience => "yearsExperience",
            FieldName::Description => "description",
        }
    }
}

/// Developer specialization offered by the select field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specialization {
    FullStack,
    Frontend,
    Backend,
}

impl Specialization {
    pub const OPTIONS: [Specialization; 3] = [
        Specialization::FullStack,
        Specialization::Frontend,
        Specialization::Backend,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Specialization::FullStack => "Full Stack",
            Specialization::Frontend => "Frontend",
            Specialization::Backend => "Backend",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::OPTIONS.into_iter().find(|o| o.label() == label)
    }

    /// Step through `None` and the three options, wrapping at both ends
    pub fn cycle(current: Option<Self>, forward: bool) -> Option<Self> {
        let slots = Self::OPTIONS.len() + 1;
        let index = match current {
            None => 0,
            Some(choice) => Self::OPTIONS.iter().position(|o| *o == choice).unwrap_or(0) + 1,
        };
        let next = if forward {
            (index + 1) % slots
        } else {
            (index + slots - 1) % slots
        };
        if next == 0 {
            None
        } else {
            Some(Self::OPTIONS[next - 1])
        }
    }
}

/// Snapshot of every field value, keyed the way the payload is emitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFields {
    pub full_name: String,
    pub username: String,
    pub password: String,
    pub specialization: String,
    pub years_experience: String,
    pub description: String,
}

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Action buttons on the last row of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Register,
    Reset,
}

impl FormButton {
    pub fn label(&self) -> &'static str {
        match self {
            FormButton::Register => "Register",
            FormButton::Reset => "Reset",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            FormButton::Register => FormButton::Reset,
            FormButton::Reset => FormButton::Register,
        }
    }
}

/// Index of the action row, after the six fields
pub const BUTTONS_ROW: usize = 6;

#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub full_name: FormField,
    pub username: FormField,
    pub password: FormField,
    pub specialization: FormField,
    pub years_experience: FormField,
    pub description: FormField,
    pub active_field_index: usize,
    pub selected_button: FormButton,
    /// Stored verdicts for fields with live validation, updated on every edit
    results: BTreeMap<FieldName, Verdict>,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::new(FieldName::FullName, "Full name", FieldKind::Text),
            username: FormField::new(FieldName::Username, "Username", FieldKind::Text),
            password: FormField::new(FieldName::Password, "Password", FieldKind::Password),
            specialization: FormField::new(
                FieldName::Specialization,
                "Specialization",
                FieldKind::Select,
            ),
            years_experience: FormField::new(
                FieldName::YearsExperience,
                "Years of experience",
                FieldKind::Number,
            ),
            description: FormField::new(
                FieldName::Description,
                "Description",
                FieldKind::Multiline,
            ),
            active_field_index: 0,
            selected_button: FormButton::default(),
            results: BTreeMap::new(),
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::FullName => &self.full_name,
            FieldName::Username => &self.username,
            FieldName::Password => &self.password,
            FieldName::Specialization => &self.specialization,
            FieldName::YearsExperience => &self.years_experience,
            FieldName::Description => &self.description,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::FullName => &mut self.full_name,
            FieldName::Username => &mut self.username,
            FieldName::Password => &mut self.password,
            FieldName::Specialization => &mut self.specialization,
            FieldName::YearsExperience => &mut self.years_experience,
            FieldName::Description => &mut self.description,
        }
    }

    /// Field name at a display index, `None` for the action row
    pub fn field_name_at(index: usize) -> Option<FieldName> {
        FieldName::ALL.get(index).copied()
    }

    pub fn active_field_name(&self) -> Option<FieldName> {
        Self::field_name_at(self.active_field_index)
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    pub fn toggle_button(&mut self) {
        self.selected_button = self.selected_button.toggle();
    }

    pub fn input_char(&mut self, c: char) {
        if let Some(name) = self.active_field_name() {
            if self.field_mut(name).push_char(c) {
                self.on_change(name);
            }
        }
    }

    pub fn paste(&mut self, text: &str) {
        if let Some(name) = self.active_field_name() {
            if self.field_mut(name).push_str(text) {
                self.on_change(name);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(name) = self.active_field_name() {
            if self.field_mut(name).pop_char() {
                self.on_change(name);
            }
        }
    }

    pub fn cycle_choice(&mut self, forward: bool) {
        if let Some(name) = self.active_field_name() {
            if self.field_mut(name).cycle_choice(forward) {
                self.on_change(name);
            }
        }
    }

    fn on_change(&mut self, name: FieldName) {
        if validation::has_live_validation(name) {
            let verdict = validation::validate(name, self.field(name).as_text());
            tracing::debug!(field = name.key(), valid = verdict.valid, "field validated");
            self.results.insert(name, verdict);
        }
    }

    /// Stored verdict for a field, if it has been edited
    pub fn verdict(&self, name: FieldName) -> Option<&Verdict> {
        self.results.get(&name)
    }

    /// True when any stored verdict carries an error message
    pub fn has_errors(&self) -> bool {
        self.results.values().any(|v| !v.message.is_empty())
    }

    pub fn values(&self) -> FormFields {
        FormFields {
            full_name: self.full_name.as_text().to_string(),
            username: self.username.as_text().to_string(),
            password: self.password.as_text().to_string(),
            specialization: self.specialization.as_text().to_string(),
            years_experience: self.years_experience.as_text().to_string(),
            description: self.description.as_text().to_string(),
        }
    }

    /// Empty every field and drop stored verdicts
    pub fn reset(&mut self) {
        for name in FieldName::ALL {
            self.field_mut(name).clear();
        }
        self.results.clear();
        self.active_field_index = 0;
        self.selected_button = FormButton::default();
    }
}

#[cfg(test)]
impl RegistrationForm {
    /// Replace a field's value and re-run its live rule
    pub fn set_value(&mut self, name: FieldName, value: &str) {
        let field = self.field_mut(name);
        field.clear();
        field.push_str(value);
        self.on_change(name);
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        BUTTONS_ROW + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        Self::field_name_at(index).map(|name| self.field(name))
    }
}
