//! Form field value objects

use super::form_state::{FieldName, Specialization};

/// How a field accepts input and renders its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
    Number,
    Select,
    Multiline,
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice(Option<Specialization>),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: String,
    pub value: FieldValue,
    pub kind: FieldKind,
}

impl FormField {
    /// Create a new empty field of the given kind
    pub fn new(name: FieldName, label: &str, kind: FieldKind) -> Self {
        let value = match kind {
            FieldKind::Select => FieldValue::Choice(None),
            _ => FieldValue::Text(String::new()),
        };
        Self {
            name,
            label: label.to_string(),
            value,
            kind,
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Multiline
    }

    /// The raw value as submitted (empty string for an unset select)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(choice) => choice.map(|c| c.label()).unwrap_or(""),
        }
    }

    /// Whether a character is accepted by this field
    fn accepts(&self, c: char) -> bool {
        match self.kind {
            FieldKind::Number => c.is_ascii_digit() || c == '-' || c == '.',
            FieldKind::Select => false,
            FieldKind::Multiline => true,
            FieldKind::Text | FieldKind::Password => c != '\n',
        }
    }

    /// Push a character to the field value. Returns true if the value changed.
    pub fn push_char(&mut self, c: char) -> bool {
        if !self.accepts(c) {
            return false;
        }
        match &mut self.value {
            FieldValue::Text(s) => {
                s.push(c);
                true
            }
            FieldValue::Choice(_) => false,
        }
    }

    /// Append pasted text, keeping only accepted characters.
    /// A select field picks the option whose label matches the text.
    /// Returns true if the value changed.
    pub fn push_str(&mut self, text: &str) -> bool {
        if let FieldValue::Choice(choice) = &mut self.value {
            return match Specialization::from_label(text.trim()) {
                Some(picked) => {
                    *choice = Some(picked);
                    true
                }
                None => false,
            };
        }
        let mut changed = false;
        for c in text.chars().filter(|c| *c != '\r') {
            changed |= self.push_char(c);
        }
        changed
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) -> bool {
        match &mut self.value {
            FieldValue::Text(s) => s.pop().is_some(),
            FieldValue::Choice(_) => false,
        }
    }

    /// Cycle a select field forward or backward through its options
    pub fn cycle_choice(&mut self, forward: bool) -> bool {
        match &mut self.value {
            FieldValue::Choice(choice) => {
                *choice = Specialization::cycle(*choice, forward);
                true
            }
            FieldValue::Text(_) => false,
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice(choice) => *choice = None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match (&self.value, self.kind) {
            (FieldValue::Text(s), FieldKind::Password) => "•".repeat(s.chars().count()),
            (FieldValue::Text(s), _) => s.clone(),
            (FieldValue::Choice(None), _) => "-- Select --".to_string(),
            (FieldValue::Choice(Some(choice)), _) => format!("◀ {} ▶", choice.label()),
        }
    }
}
