//! Gemini provider configuration from TOML (`[gemini]` section)

use serde::{Deserialize, Serialize};
use textnext_domain::Model;

pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Raw Gemini configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Base URL of the Generative Language API
    pub base_url: String,
    /// Candidate model names, tried in order at startup
    pub models: Vec<String>,
    /// Probe each candidate before use
    pub verify_model: bool,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            models: Model::default_candidates()
                .iter()
                .map(|m| m.to_string())
                .collect(),
            verify_model: true,
        }
    }
}

impl FileGeminiConfig {
    /// Parse candidate models, skipping blank names
    pub fn parse_models(&self) -> Vec<Model> {
        self.models
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                let Ok(model) = s.parse::<Model>();
                model
            })
            .collect()
    }

    /// Read the API key from the configured environment variable.
    ///
    /// Empty values count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
