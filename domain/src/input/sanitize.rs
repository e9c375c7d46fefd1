//! Input sanitization
//!
//! Removes markup-like substrings and collapses whitespace so that the text
//! embedded into the prompt is a single clean line.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// Sanitized user text (Value Object)
///
/// Only [`sanitize`] constructs this, so every instance has no `<...>`
/// substring and no leading, trailing, or doubled whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CleanInput(String);

impl CleanInput {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in characters
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl std::fmt::Display for CleanInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CleanInput {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strip every `<...>` tag, then collapse whitespace runs and trim.
///
/// Total and idempotent: after tag removal no `<` has a `>` anywhere after
/// it, and joining on single spaces cannot introduce one.
pub fn sanitize(text: &str) -> CleanInput {
    if text.is_empty() {
        return CleanInput::default();
    }

    let stripped = TAG_PATTERN.replace_all(text, "");
    let normalized = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    CleanInput(normalized)
}
