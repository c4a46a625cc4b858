use tracing::trace;

use crate::color::ShirtColor;
use crate::constants::*;
use crate::error::ValidationError;
use crate::preview::{build_preview_url, PreviewConfig};

/// Per-field validation result. `None` means the field is fine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<ValidationError>,
    pub number: Option<ValidationError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.number.is_none()
    }

    pub fn name_message(&self) -> String {
        self.name.map(|e| e.to_string()).unwrap_or_default()
    }

    pub fn number_message(&self) -> String {
        self.number.map(|e| e.to_string()).unwrap_or_default()
    }
}

/// Both fields are required; whitespace alone counts as empty.
pub fn validate(name: &str, number: &str) -> FieldErrors {
    let errors = FieldErrors {
        name: name.trim().is_empty().then_some(ValidationError::EmptyName),
        number: number.trim().is_empty().then_some(ValidationError::EmptyNumber),
    };
    trace!(?errors, "validated form fields");
    errors
}

/// Keeps at most `max` characters, never splitting a code point.
pub fn truncate_chars(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    name: String,
    number: String,
    color: ShirtColor,
    errors: FieldErrors,
}

impl Default for FormState {
    fn default() -> Self {
        let name = DEFAULT_NAME.to_string();
        let number = DEFAULT_NUMBER.to_string();
        let errors = validate(&name, &number);

        Self {
            name,
            number,
            color: ShirtColor::default(),
            errors,
        }
    }
}

impl FormState {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn color(&self) -> ShirtColor {
        self.color
    }

    pub fn errors(&self) -> FieldErrors {
        self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Stores the first `NAME_MAX_CHARS` characters of `name`.
    pub fn set_name(&mut self, name: &str) {
        self.name = truncate_chars(name, NAME_MAX_CHARS).to_string();
        self.errors = validate(&self.name, &self.number);
    }

    pub fn set_number(&mut self, number: &str) {
        self.number = number.to_string();
        self.errors = validate(&self.name, &self.number);
    }

    pub fn set_color(&mut self, color: ShirtColor) {
        self.color = color;
    }

    /// Empty when either field is invalid.
    pub fn preview_url(&self, config: &PreviewConfig) -> String {
        build_preview_url(config, &self.name, &self.number, self.color)
    }
}
