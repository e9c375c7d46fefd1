//! Gemini model client implementation

use super::error::{GeminiError, Result};
use super::protocol::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse};
use crate::config::FileGeminiConfig;
use async_trait::async_trait;
use textnext_application::{ModelClient, ProviderError};
use textnext_domain::{GenerationConfig, Model, RawModelResponse, SafetySettings};
use tracing::{debug, info, warn};

const API_VERSION: &str = "v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Connection settings resolved from configuration and environment
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: String,
    pub base_url: String,
    /// Candidates in the order they are tried
    pub models: Vec<Model>,
    pub verify_model: bool,
}

impl GeminiSettings {
    /// Resolve settings, reading the API key from the environment.
    pub fn from_config(config: &FileGeminiConfig) -> Result<Self> {
        let api_key = config
            .resolve_api_key()
            .ok_or_else(|| GeminiError::MissingApiKey {
                env: config.api_key_env.clone(),
            })?;

        Ok(Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            models: config.parse_models(),
            verify_model: config.verify_model,
        })
    }
}

/// Model client for the Gemini `generateContent` REST endpoint
pub struct GeminiModelClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: Model,
}

impl GeminiModelClient {
    /// Create a client for a single model without touching the network
    pub fn new(settings: &GeminiSettings, model: Model) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("textnext/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            model,
        })
    }

    /// Initialize the model handle.
    ///
    /// Tries each candidate in order and moves on only when the API reports
    /// the model as not found. Any other probe failure (bad key, quota,
    /// transport) keeps the candidate, so the error surfaces on each request
    /// instead. With `verify_model` off, the first candidate is used without
    /// a probe.
    pub async fn connect(settings: &GeminiSettings) -> Result<Self> {
        let Some(first) = settings.models.first() else {
            return Err(GeminiError::NoModels);
        };

        if !settings.verify_model {
            info!(model = %first, "Gemini client initialized (unverified)");
            return Self::new(settings, first.clone());
        }

        let mut last_error = None;
        for model in &settings.models {
            let client = Self::new(settings, model.clone())?;
            match client.probe().await {
                Ok(()) => {
                    info!(model = %model, "Gemini client initialized");
                    return Ok(client);
                }
                Err(e) if e.is_model_not_found() => {
                    warn!(model = %model, "Model not found, trying next candidate: {}", e);
                    last_error = Some(e);
                }
                Err(e) => {
                    warn!(model = %model, "Could not verify model, using it anyway: {}", e);
                    return Ok(client);
                }
            }
        }

        Err(GeminiError::NoModelAvailable {
            tried: settings
                .models
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            last_error: last_error.map(|e| e.to_string()).unwrap_or_default(),
        })
    }

    fn endpoint(&self, suffix: &str) -> String {
        format!(
            "{}/{}/{}{}",
            self.base_url,
            API_VERSION,
            self.model.resource_name(),
            suffix
        )
    }

    /// Check that the model exists and the key is accepted
    async fn probe(&self) -> Result<()> {
        let response = self
            .http
            .get(self.endpoint(""))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await?;
        Err(GeminiError::Api {
            status: status.as_u16(),
            message: ErrorEnvelope::message_from_body(&body),
        })
    }

    async fn generate_content(
        &self,
        prompt: &str,
        config: &GenerationConfig,
        safety: &SafetySettings,
    ) -> Result<RawModelResponse> {
        let request = GenerateContentRequest::user_prompt(prompt, config, safety);

        let response = self
            .http
            .post(self.endpoint(":generateContent"))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "generateContent returned");

        if !status.is_success() {
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: ErrorEnvelope::message_from_body(&body),
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        parsed.into_raw_response()
    }
}

#[async_trait]
impl ModelClient for GeminiModelClient {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn generate(
        &self,
        prompt: &str,
        config: &GenerationConfig,
        safety: &SafetySettings,
    ) -> std::result::Result<RawModelResponse, ProviderError> {
        self.generate_content(prompt, config, safety)
            .await
            .map_err(ProviderError::from)
    }
}
