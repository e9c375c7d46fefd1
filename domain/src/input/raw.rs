//! Raw user input value object

use crate::core::string::truncate_chars;

/// Maximum number of characters accepted from the user
pub const MAX_INPUT_CHARS: usize = 100;

/// Text exactly as entered by the user (Value Object)
///
/// Anything past [`MAX_INPUT_CHARS`] characters is dropped on construction,
/// the same way a bounded text field refuses further typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    text: String,
}

impl RawInput {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            text: truncate_chars(text.as_ref(), MAX_INPUT_CHARS).to_string(),
        }
    }

    /// Whether the given text would be cut when wrapped
    pub fn exceeds_limit(text: &str) -> bool {
        text.chars().count() > MAX_INPUT_CHARS
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for RawInput {
    fn from(s: &str) -> Self {
        RawInput::new(s)
    }
}

impl From<String> for RawInput {
    fn from(s: String) -> Self {
        RawInput::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_kept_verbatim() {
        let raw = RawInput::new("  The quick <b>brown</b> fox ");
        assert_eq!(raw.as_str(), "  The quick <b>brown</b> fox ");
    }

    #[test]
    fn test_long_input_truncated_to_limit() {
        let text = "a".repeat(150);
        assert!(RawInput::exceeds_limit(&text));
        let raw = RawInput::new(&text);
        assert_eq!(raw.as_str().chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_limit_counts_chars_not_bytes() {
        let text = "é".repeat(MAX_INPUT_CHARS);
        assert!(!RawInput::exceeds_limit(&text));
        assert_eq!(RawInput::new(&text).as_str(), text);
    }

    #[test]
    fn test_empty() {
        assert!(RawInput::new("").is_empty());
    }
}
