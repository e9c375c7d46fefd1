//! Error types for the Gemini adapter

use textnext_application::ProviderError;
use textnext_domain::FinishReason;
use thiserror::Error;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when talking to the Gemini REST API
///
/// The display strings keep the provider's wording, because downstream
/// classification matches on it.
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("API key not set: environment variable {env} is empty")]
    MissingApiKey { env: String },

    #[error("No model configured")]
    NoModels,

    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Prompt blocked: {0}")]
    PromptBlocked(String),

    #[error("Response blocked by safety filters ({0})")]
    ResponseBlocked(FinishReason),

    #[error("Generation stopped: {0}")]
    GenerationStopped(FinishReason),

    #[error("No candidate model could be initialized (tried: {tried}): {last_error}")]
    NoModelAvailable { tried: String, last_error: String },
}

impl GeminiError {
    /// The API does not know the requested model
    pub fn is_model_not_found(&self) -> bool {
        matches!(self, GeminiError::Api { status: 404, .. })
    }
}

impl From<reqwest::Error> for GeminiError {
    fn from(e: reqwest::Error) -> Self {
        // The URL carries the model path, which would read as a model error
        GeminiError::Http(e.without_url())
    }
}

impl From<GeminiError> for ProviderError {
    fn from(e: GeminiError) -> Self {
        ProviderError::new(e.to_string())
    }
}
