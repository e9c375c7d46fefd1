//! Gemini REST wire types
//!
//! Request and response shapes for `models/{model}:generateContent`,
//! using the API's camelCase field names.

use super::error::{GeminiError, Result};
use serde::{Deserialize, Serialize};
use textnext_domain::{FinishReason, GenerationConfig, RawModelResponse, SafetySettings};

// ==================== Request ====================

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest<'a> {
    pub contents: Vec<Content<'a>>,
    pub generation_config: &'a GenerationConfig,
    pub safety_settings: &'a SafetySettings,
}

#[derive(Serialize, Debug)]
pub struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'a str>,
    pub parts: Vec<Part<'a>>,
}

#[derive(Serialize, Debug)]
pub struct Part<'a> {
    pub text: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    /// Single-turn user request
    pub fn user_prompt(
        prompt: &'a str,
        generation_config: &'a GenerationConfig,
        safety_settings: &'a SafetySettings,
    ) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
            generation_config,
            safety_settings,
        }
    }
}

// ==================== Response ====================

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<FinishReason>,
}

#[derive(Deserialize, Debug)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Deserialize, Debug)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

/// `{"error": {...}}` body returned with non-success statuses
#[derive(Deserialize, Debug)]
pub struct ErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Deserialize, Debug)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: String,
    pub status: Option<String>,
}

impl ErrorEnvelope {
    /// Best-effort message from an error body; falls back to the raw text
    pub fn message_from_body(body: &str) -> String {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
            Ok(envelope) => envelope.error.status.unwrap_or_default(),
            Err(_) => body.trim().to_string(),
        }
    }
}

impl GenerateContentResponse {
    /// Text of the first candidate, all parts joined
    pub fn first_candidate_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        Some(text)
    }

    /// Convert to the domain response, surfacing provider refusals as errors
    pub fn into_raw_response(self) -> Result<RawModelResponse> {
        if let Some(reason) = self
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
        {
            return Err(GeminiError::PromptBlocked(reason));
        }

        let Some(candidate) = self.candidates.first() else {
            return Ok(RawModelResponse::empty());
        };

        let finish_reason = candidate.finish_reason;
        let text = self.first_candidate_text().filter(|t| !t.is_empty());

        if text.is_none() {
            match finish_reason {
                Some(reason) if reason.is_safety_block() => {
                    return Err(GeminiError::ResponseBlocked(reason));
                }
                Some(reason) if !reason.is_normal() => {
                    return Err(GeminiError::GenerationStopped(reason));
                }
                _ => {}
            }
        }

        Ok(RawModelResponse::new(text, finish_reason))
    }
}
