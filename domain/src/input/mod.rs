//! User input handling
//!
//! - [`RawInput`]: text as typed, bounded to [`MAX_INPUT_CHARS`]
//! - [`sanitize`]: strips tags and normalizes whitespace into a [`CleanInput`]
//! - [`validate`]: rejects empty or too-short input

mod raw;
mod sanitize;
mod validation;

pub use raw::{MAX_INPUT_CHARS, RawInput};
pub use sanitize::{CleanInput, sanitize};
pub use validation::{MIN_INPUT_CHARS, ValidationResult, validate, validate_str};
