//! Error types for the t-shirt form

use thiserror::Error;

/// A required form field failed validation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty.")]
    EmptyName,

    #[error("Number cannot be empty.")]
    EmptyNumber,
}

/// A color token that is not one of the fixed shirt colors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown shirt color: {0}")]
pub struct ParseColorError(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    #[test]
    fn messages_match_inline_text() {
        assert_eq!(ValidationError::EmptyName.to_string(), NAME_EMPTY_MESSAGE);
        assert_eq!(ValidationError::EmptyNumber.to_string(), NUMBER_EMPTY_MESSAGE);
    }

    #[test]
    fn parse_error_names_token() {
        let err = ParseColorError("teal".to_string());
        assert_eq!(err.to_string(), "Unknown shirt color: teal");
    }
}
