//! Domain error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input errors detected before any model call is made.
///
/// The `Display` text is the message shown to the user.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputError {
    #[error("Please enter some text for prediction.")]
    Empty,

    #[error("Input is too short. Please enter a longer phrase.")]
    TooShort,
}

impl InputError {
    /// Stable identifier used in JSON output and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            InputError::Empty => "input_empty",
            InputError::TooShort => "input_too_short",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_error_display() {
        assert_eq!(
            InputError::Empty.to_string(),
            "Please enter some text for prediction."
        );
    }

    #[test]
    fn test_too_short_error_display() {
        assert_eq!(
            InputError::TooShort.to_string(),
            "Input is too short. Please enter a longer phrase."
        );
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(InputError::Empty.as_str(), "input_empty");
        assert_eq!(InputError::TooShort.as_str(), "input_too_short");
    }
}
