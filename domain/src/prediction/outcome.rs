//! Prediction outcome value objects

use serde::{Deserialize, Serialize};

/// Category of a prediction that produced no word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningCategory {
    ContentBlocked,
    GenerationStopped,
    ModelUnavailable,
    AuthError,
    QuotaExceeded,
    UnknownError,
    NoPrediction,
}

impl WarningCategory {
    /// Fixed message shown to the end user.
    ///
    /// Never includes provider error text.
    pub fn user_message(&self) -> &'static str {
        match self {
            WarningCategory::ContentBlocked => "⚠️ Content blocked due to safety concerns",
            WarningCategory::GenerationStopped => "⚠️ Generation stopped unexpectedly",
            WarningCategory::ModelUnavailable => "⚠️ Model not available",
            WarningCategory::AuthError => "⚠️ API key error",
            WarningCategory::QuotaExceeded => "⚠️ API quota exceeded",
            WarningCategory::UnknownError => "⚠️ Error in prediction",
            WarningCategory::NoPrediction => "No prediction available",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCategory::ContentBlocked => "content_blocked",
            WarningCategory::GenerationStopped => "generation_stopped",
            WarningCategory::ModelUnavailable => "model_unavailable",
            WarningCategory::AuthError => "auth_error",
            WarningCategory::QuotaExceeded => "quota_exceeded",
            WarningCategory::UnknownError => "unknown_error",
            WarningCategory::NoPrediction => "no_prediction",
        }
    }
}

impl std::fmt::Display for WarningCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final result of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PredictionOutcome {
    Word { word: String },
    Warning {
        category: WarningCategory,
        message: String,
    },
}

impl PredictionOutcome {
    pub fn word(word: impl Into<String>) -> Self {
        PredictionOutcome::Word { word: word.into() }
    }

    /// A warning carrying the category's fixed user message
    pub fn warning(category: WarningCategory) -> Self {
        PredictionOutcome::Warning {
            category,
            message: category.user_message().to_string(),
        }
    }

    pub fn no_prediction() -> Self {
        Self::warning(WarningCategory::NoPrediction)
    }

    pub fn model_unavailable() -> Self {
        Self::warning(WarningCategory::ModelUnavailable)
    }

    pub fn is_word(&self) -> bool {
        matches!(self, PredictionOutcome::Word { .. })
    }

    pub fn as_word(&self) -> Option<&str> {
        match self {
            PredictionOutcome::Word { word } => Some(word),
            PredictionOutcome::Warning { .. } => None,
        }
    }

    pub fn category(&self) -> Option<WarningCategory> {
        match self {
            PredictionOutcome::Word { .. } => None,
            PredictionOutcome::Warning { category, .. } => Some(*category),
        }
    }

    /// Text to display in place of the predicted word
    pub fn display_text(&self) -> &str {
        match self {
            PredictionOutcome::Word { word } => word,
            PredictionOutcome::Warning { message, .. } => message,
        }
    }

    /// `"{input} {word}..."` for successful predictions only
    pub fn completed_phrase(&self, input: &str) -> Option<String> {
        self.as_word().map(|word| format!("{} {}...", input, word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_uses_fixed_message() {
        let outcome = PredictionOutcome::warning(WarningCategory::QuotaExceeded);
        assert_eq!(outcome.display_text(), "⚠️ API quota exceeded");
        assert_eq!(outcome.category(), Some(WarningCategory::QuotaExceeded));
        assert!(!outcome.is_word());
    }

    #[test]
    fn test_no_prediction_message() {
        assert_eq!(
            PredictionOutcome::no_prediction().display_text(),
            "No prediction available"
        );
    }

    #[test]
    fn test_completed_phrase_only_for_words() {
        let word = PredictionOutcome::word("lazy");
        assert_eq!(
            word.completed_phrase("jumps over the").as_deref(),
            Some("jumps over the lazy...")
        );
        assert_eq!(
            PredictionOutcome::model_unavailable().completed_phrase("jumps over the"),
            None
        );
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(PredictionOutcome::word("dog")).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "word", "word": "dog"}));

        let json = serde_json::to_value(PredictionOutcome::warning(WarningCategory::AuthError))
            .unwrap();
        assert_eq!(json["kind"], "warning");
        assert_eq!(json["category"], "auth_error");
        assert_eq!(json["message"], "⚠️ API key error");
    }
}
