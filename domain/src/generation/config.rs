//! Decoding parameters

use serde::{Deserialize, Serialize};

/// Decoding parameters for a generation request.
///
/// Field names serialize to the provider's camelCase wire names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    /// Low temperature with a handful of output tokens: enough for one word.
    pub const NEXT_WORD: GenerationConfig = GenerationConfig {
        temperature: 0.2,
        top_p: 0.8,
        top_k: 40,
        max_output_tokens: 5,
    };
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::NEXT_WORD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_word_values() {
        let config = GenerationConfig::NEXT_WORD;
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.top_p, 0.8);
        assert_eq!(config.top_k, 40);
        assert_eq!(config.max_output_tokens, 5);
        assert_eq!(GenerationConfig::default(), config);
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(GenerationConfig::NEXT_WORD).unwrap();
        assert_eq!(json["topK"], 40);
        assert_eq!(json["maxOutputTokens"], 5);
        assert!(json.get("topP").is_some());
        assert!(json.get("top_p").is_none());
    }
}
