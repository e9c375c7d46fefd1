//! Predict Next Word use case
//!
//! Runs one submission through the pipeline:
//!
//! ```text
//! raw text ─► sanitize ─► validate ──Invalid──► Rejected
//!                            │
//!                          Valid ─► prompt ─► model call ─► interpret ─► Predicted
//! ```
//!
//! The use case never fails. Input errors come back as `Rejected`, and
//! provider errors come back as a classified warning inside `Predicted`.

use crate::ports::model_client::{ModelClient, ModelHandle};
use crate::ports::progress::{NoProgress, PredictionProgress};
use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use textnext_domain::{
    CleanInput, GenerationConfig, InputError, PredictionOutcome, PromptTemplate, RawInput,
    SafetySettings, ValidationResult, WarningCategory, interpret_error, interpret_response,
    sanitize, validate,
};
use tracing::{debug, error, info, warn};

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PredictNextWordOutput {
    /// Input failed validation; the model was not called
    Rejected {
        input: CleanInput,
        #[serde(serialize_with = "serialize_input_error")]
        error: InputError,
    },
    /// Input was valid and an outcome was produced
    Predicted {
        input: CleanInput,
        #[serde(skip)]
        prompt: Option<String>,
        outcome: PredictionOutcome,
    },
}

impl PredictNextWordOutput {
    pub fn input(&self) -> &CleanInput {
        match self {
            PredictNextWordOutput::Rejected { input, .. } => input,
            PredictNextWordOutput::Predicted { input, .. } => input,
        }
    }

    pub fn outcome(&self) -> Option<&PredictionOutcome> {
        match self {
            PredictNextWordOutput::Rejected { .. } => None,
            PredictNextWordOutput::Predicted { outcome, .. } => Some(outcome),
        }
    }

    /// The prompt sent to the model, if one was built
    pub fn prompt(&self) -> Option<&str> {
        match self {
            PredictNextWordOutput::Rejected { .. } => None,
            PredictNextWordOutput::Predicted { prompt, .. } => prompt.as_deref(),
        }
    }

    pub fn predicted_word(&self) -> Option<&str> {
        self.outcome().and_then(|o| o.as_word())
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, PredictNextWordOutput::Rejected { .. })
    }
}

/// `{"code": "too_short", "reason": "<user message>"}`
fn serialize_input_error<S: Serializer>(
    error: &InputError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("InputError", 2)?;
    state.serialize_field("code", error)?;
    state.serialize_field("reason", &error.to_string())?;
    state.end()
}

/// Use case for predicting the next word of a sentence
pub struct PredictNextWordUseCase<C: ModelClient + ?Sized + 'static> {
    handle: ModelHandle<C>,
    generation: GenerationConfig,
    safety: SafetySettings,
}

impl<C: ModelClient + ?Sized + 'static> PredictNextWordUseCase<C> {
    pub fn new(handle: ModelHandle<C>) -> Self {
        if let Some(reason) = handle.unavailable_reason() {
            warn!("Model unavailable, predictions are disabled: {}", reason);
        }
        Self {
            handle,
            generation: GenerationConfig::NEXT_WORD,
            safety: SafetySettings::next_word(),
        }
    }

    pub fn handle(&self) -> &ModelHandle<C> {
        &self.handle
    }

    pub fn is_model_available(&self) -> bool {
        self.handle.is_ready()
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, text: &str) -> PredictNextWordOutput {
        self.execute_with_progress(text, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        text: &str,
        progress: &dyn PredictionProgress,
    ) -> PredictNextWordOutput {
        if RawInput::exceeds_limit(text) {
            debug!("Input longer than the limit, truncating");
        }
        let raw = RawInput::new(text);
        let clean = sanitize(raw.as_str());
        debug!(chars = clean.char_count(), "Sanitized input");

        let input = match validate(clean.clone()) {
            ValidationResult::Valid(input) => input,
            ValidationResult::Invalid(error) => {
                debug!("Input rejected: {}", error.as_str());
                return PredictNextWordOutput::Rejected { input: clean, error };
            }
        };

        let client = match &self.handle {
            ModelHandle::Ready(client) => client,
            ModelHandle::Unavailable { reason } => {
                debug!("Skipping model call: {}", reason);
                return PredictNextWordOutput::Predicted {
                    input,
                    prompt: None,
                    outcome: PredictionOutcome::model_unavailable(),
                };
            }
        };

        let prompt = PromptTemplate::next_word(input.as_str());
        let model = client.model();
        debug!(model = %model, "Sending prediction request");

        progress.on_request_start(model);
        let result = client.generate(&prompt, &self.generation, &self.safety).await;
        progress.on_request_complete(model, result.is_ok());

        let outcome = match &result {
            Ok(response) => interpret_response(response),
            Err(e) => {
                let outcome = interpret_error(e.message());
                if outcome.category() == Some(WarningCategory::UnknownError) {
                    error!(model = %model, "Unclassified provider error: {}", e);
                    progress.on_operator_alert(e.message());
                } else {
                    warn!(model = %model, "Provider error: {}", e);
                }
                outcome
            }
        };

        match &outcome {
            PredictionOutcome::Word { word } => info!("Predicted next word: {}", word),
            PredictionOutcome::Warning { category, .. } => {
                info!("Prediction ended with warning: {}", category)
            }
        }

        PredictNextWordOutput::Predicted {
            input,
            prompt: Some(prompt),
            outcome,
        }
    }
}
