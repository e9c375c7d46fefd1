//! Input validation

use super::sanitize::{CleanInput, sanitize};
use crate::core::error::InputError;

/// Minimum number of characters (after trimming) worth sending to the model
pub const MIN_INPUT_CHARS: usize = 3;

/// Outcome of validating a sanitized input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(CleanInput),
    Invalid(InputError),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// The user-facing rejection reason, if any
    pub fn reason(&self) -> Option<String> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(e) => Some(e.to_string()),
        }
    }

    pub fn into_result(self) -> Result<CleanInput, InputError> {
        match self {
            ValidationResult::Valid(input) => Ok(input),
            ValidationResult::Invalid(e) => Err(e),
        }
    }
}

/// Reject empty or too-short input.
pub fn validate(input: CleanInput) -> ValidationResult {
    let trimmed = input.as_str().trim();
    if trimmed.is_empty() {
        return ValidationResult::Invalid(InputError::Empty);
    }
    if trimmed.chars().count() < MIN_INPUT_CHARS {
        return ValidationResult::Invalid(InputError::TooShort);
    }
    ValidationResult::Valid(input)
}

/// Validate arbitrary text. The text is sanitized first, which is a no-op
/// for text that is already clean.
pub fn validate_str(text: &str) -> ValidationResult {
    validate(sanitize(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_invalid() {
        assert_eq!(validate_str(""), ValidationResult::Invalid(InputError::Empty));
    }

    #[test]
    fn test_whitespace_only_is_invalid() {
        let result = validate_str("   ");
        assert_eq!(result, ValidationResult::Invalid(InputError::Empty));
        assert_eq!(
            result.reason().as_deref(),
            Some("Please enter some text for prediction.")
        );
    }

    #[test]
    fn test_two_chars_too_short() {
        let result = validate_str("ab");
        assert_eq!(result, ValidationResult::Invalid(InputError::TooShort));
        assert_eq!(
            result.reason().as_deref(),
            Some("Input is too short. Please enter a longer phrase.")
        );
    }

    #[test]
    fn test_three_chars_valid() {
        let result = validate_str("abc");
        assert!(result.is_valid());
        assert_eq!(result.reason(), None);
        assert_eq!(result.into_result().unwrap().as_str(), "abc");
    }

    #[test]
    fn test_length_counts_chars() {
        // Two multibyte characters are still too short
        assert_eq!(
            validate_str("éé"),
            ValidationResult::Invalid(InputError::TooShort)
        );
        assert!(validate_str("ééé").is_valid());
    }

    #[test]
    fn test_tags_only_input_is_empty() {
        assert_eq!(
            validate_str("<b></b>"),
            ValidationResult::Invalid(InputError::Empty)
        );
    }

    #[test]
    fn test_invalid_reason_never_empty() {
        for text in ["", " ", "a", "ab", "<i>x</i>"] {
            if let Some(reason) = validate_str(text).reason() {
                assert!(!reason.is_empty());
            }
        }
    }
}
