//! Raw model response

use serde::{Deserialize, Serialize};

/// Reason the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinishReason {
    Stop,
    MaxTokens,
    Safety,
    Recitation,
    Blocklist,
    ProhibitedContent,
    Spii,
    Other,
    #[serde(other)]
    Unspecified,
}

impl FinishReason {
    /// Normal completion: the text (if any) is usable as-is
    pub fn is_normal(&self) -> bool {
        matches!(self, FinishReason::Stop | FinishReason::MaxTokens)
    }

    /// Stopped by a content filter
    pub fn is_safety_block(&self) -> bool {
        matches!(
            self,
            FinishReason::Safety
                | FinishReason::Blocklist
                | FinishReason::ProhibitedContent
                | FinishReason::Spii
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FinishReason::Stop => "STOP",
            FinishReason::MaxTokens => "MAX_TOKENS",
            FinishReason::Safety => "SAFETY",
            FinishReason::Recitation => "RECITATION",
            FinishReason::Blocklist => "BLOCKLIST",
            FinishReason::ProhibitedContent => "PROHIBITED_CONTENT",
            FinishReason::Spii => "SPII",
            FinishReason::Other => "OTHER",
            FinishReason::Unspecified => "FINISH_REASON_UNSPECIFIED",
        }
    }
}

impl std::fmt::Display for FinishReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successful response from the model client.
///
/// The text may still be absent when the provider returned a candidate
/// without any text parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawModelResponse {
    text: Option<String>,
    finish_reason: Option<FinishReason>,
}

impl RawModelResponse {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            finish_reason: Some(FinishReason::Stop),
        }
    }

    /// A response object carrying no usable text
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(text: Option<String>, finish_reason: Option<FinishReason>) -> Self {
        Self {
            text,
            finish_reason,
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.finish_reason
    }
}
