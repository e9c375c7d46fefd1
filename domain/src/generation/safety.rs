//! Content-safety thresholds

use serde::{Deserialize, Serialize};

/// Harm categories the provider can filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

impl HarmCategory {
    pub const ALL: [HarmCategory; 4] = [
        HarmCategory::Harassment,
        HarmCategory::HateSpeech,
        HarmCategory::SexuallyExplicit,
        HarmCategory::DangerousContent,
    ];
}

/// Sensitivity level at which the provider refuses to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockLowAndAbove,
    BlockMediumAndAbove,
    BlockOnlyHigh,
    BlockNone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

/// The full set of safety thresholds sent with a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SafetySettings(Vec<SafetySetting>);

impl SafetySettings {
    /// Every category blocked at medium probability and above
    pub fn next_word() -> Self {
        Self(
            HarmCategory::ALL
                .into_iter()
                .map(|category| SafetySetting {
                    category,
                    threshold: HarmBlockThreshold::BlockMediumAndAbove,
                })
                .collect(),
        )
    }

    pub fn as_slice(&self) -> &[SafetySetting] {
        &self.0
    }

    pub fn threshold_for(&self, category: HarmCategory) -> Option<HarmBlockThreshold> {
        self.0
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.threshold)
    }
}

impl Default for SafetySettings {
    fn default() -> Self {
        Self::next_word()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_categories_medium_and_above() {
        let settings = SafetySettings::next_word();
        assert_eq!(settings.as_slice().len(), 4);
        for category in HarmCategory::ALL {
            assert_eq!(
                settings.threshold_for(category),
                Some(HarmBlockThreshold::BlockMediumAndAbove)
            );
        }
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(SafetySettings::next_word()).unwrap();
        assert_eq!(
            json[0],
            serde_json::json!({
                "category": "HARM_CATEGORY_HARASSMENT",
                "threshold": "BLOCK_MEDIUM_AND_ABOVE"
            })
        );
        assert_eq!(json[3]["category"], "HARM_CATEGORY_DANGEROUS_CONTENT");
    }
}
