//! Response interpretation
//!
//! Turns whatever the model client produced into a [`PredictionOutcome`].
//! Every path returns a value; nothing here fails.
//!
//! Provider errors only expose free-text messages, so they are classified
//! by substring. All of that lives in [`classify_error`] so it can be
//! replaced by structured error codes without touching callers.

use super::outcome::{PredictionOutcome, WarningCategory};
use super::response::RawModelResponse;
use regex::Regex;
use std::sync::LazyLock;

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]+").expect("word pattern is valid"));

/// Ordered classification rules. First match wins.
const ERROR_RULES: &[(&[&str], WarningCategory)] = &[
    (&["blocked", "safety"], WarningCategory::ContentBlocked),
    (&["stopped"], WarningCategory::GenerationStopped),
    (&["not found", "model"], WarningCategory::ModelUnavailable),
    (&["api key", "authentication"], WarningCategory::AuthError),
    (&["quota", "limit"], WarningCategory::QuotaExceeded),
];

/// First word-like token in `text`, if any.
pub fn first_word(text: &str) -> Option<&str> {
    WORD_PATTERN.find(text.trim()).map(|m| m.as_str())
}

/// Interpret a successful response from the model.
pub fn interpret_response(response: &RawModelResponse) -> PredictionOutcome {
    match response.text().filter(|t| !t.is_empty()).and_then(first_word) {
        Some(word) => PredictionOutcome::word(word),
        None => PredictionOutcome::no_prediction(),
    }
}

/// Classify a provider error message.
pub fn classify_error(message: &str) -> WarningCategory {
    let lowered = message.to_lowercase();
    ERROR_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| lowered.contains(n)))
        .map(|(_, category)| *category)
        .unwrap_or(WarningCategory::UnknownError)
}

/// Interpret a provider error.
///
/// For [`WarningCategory::UnknownError`] the caller must route `message`
/// to an operator channel; the outcome only carries the generic text.
pub fn interpret_error(message: &str) -> PredictionOutcome {
    PredictionOutcome::warning(classify_error(message))
}

/// Interpret either side of a model call.
pub fn interpret<E: std::fmt::Display>(result: &Result<RawModelResponse, E>) -> PredictionOutcome {
    match result {
        Ok(response) => interpret_response(response),
        Err(e) => interpret_error(&e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(outcome: &PredictionOutcome) -> Option<&str> {
        outcome.as_word()
    }

    #[test]
    fn test_first_token_of_response() {
        let outcome = interpret_response(&RawModelResponse::from_text("lazy dog"));
        assert_eq!(word(&outcome), Some("lazy"));
    }

    #[test]
    fn test_trailing_punctuation_stripped() {
        let outcome = interpret_response(&RawModelResponse::from_text("run. "));
        assert_eq!(outcome, PredictionOutcome::word("run"));
    }

    #[test]
    fn test_leading_punctuation_skipped() {
        let outcome = interpret_response(&RawModelResponse::from_text("  \"Hello,\" she said"));
        assert_eq!(word(&outcome), Some("Hello"));
    }

    #[test]
    fn test_apostrophe_splits_token() {
        let outcome = interpret_response(&RawModelResponse::from_text("don't"));
        assert_eq!(word(&outcome), Some("don"));
    }

    #[test]
    fn test_no_word_characters() {
        let outcome = interpret_response(&RawModelResponse::from_text("—"));
        assert_eq!(outcome.category(), Some(WarningCategory::NoPrediction));
        assert_eq!(outcome.display_text(), "No prediction available");
    }

    #[test]
    fn test_empty_text() {
        let outcome = interpret_response(&RawModelResponse::from_text(""));
        assert_eq!(outcome, PredictionOutcome::no_prediction());
    }

    #[test]
    fn test_missing_text() {
        let outcome = interpret_response(&RawModelResponse::empty());
        assert_eq!(outcome, PredictionOutcome::no_prediction());
    }

    #[test]
    fn test_classify_each_rule() {
        let cases = [
            ("Response was blocked", WarningCategory::ContentBlocked),
            ("SAFETY filter triggered", WarningCategory::ContentBlocked),
            ("Generation stopped: RECITATION", WarningCategory::GenerationStopped),
            ("404 Not Found", WarningCategory::ModelUnavailable),
            ("unknown model name", WarningCategory::ModelUnavailable),
            ("API key not valid", WarningCategory::AuthError),
            ("Authentication failed", WarningCategory::AuthError),
            ("Quota exhausted", WarningCategory::QuotaExceeded),
            ("rate LIMIT reached", WarningCategory::QuotaExceeded),
            ("connection reset by peer", WarningCategory::UnknownError),
        ];
        for (message, expected) in cases {
            assert_eq!(classify_error(message), expected, "message: {}", message);
        }
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            classify_error("blocked: quota exceeded"),
            WarningCategory::ContentBlocked
        );
        // "model" (rule 3) outranks "api key" (rule 4)
        assert_eq!(
            classify_error("API key not valid for model"),
            WarningCategory::ModelUnavailable
        );
        assert_eq!(
            classify_error("stopped after hitting limit"),
            WarningCategory::GenerationStopped
        );
    }

    #[test]
    fn test_interpret_error_hides_details() {
        let outcome = interpret_error("socket hang up at 10.0.0.1");
        assert_eq!(outcome.category(), Some(WarningCategory::UnknownError));
        assert_eq!(outcome.display_text(), "⚠️ Error in prediction");
        assert!(!outcome.display_text().contains("10.0.0.1"));
    }

    #[test]
    fn test_interpret_result() {
        let ok: Result<RawModelResponse, String> = Ok(RawModelResponse::from_text("fox"));
        assert_eq!(interpret(&ok), PredictionOutcome::word("fox"));

        let err: Result<RawModelResponse, String> = Err("Quota exceeded".to_string());
        assert_eq!(
            interpret(&err).category(),
            Some(WarningCategory::QuotaExceeded)
        );
    }
}
