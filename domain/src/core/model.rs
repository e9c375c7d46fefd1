//! Model value object representing a Gemini model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Gemini model identifiers (Value Object)
///
/// The model handle is initialized once per process. Candidates are tried
/// in order, so the fallback name comes second in [`Model::default_candidates`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    GeminiPro,
    Gemini10Pro,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::GeminiPro => "gemini-pro",
            Model::Gemini10Pro => "models/gemini-1.0-pro",
            Model::Custom(s) => s,
        }
    }

    /// Resource path used by the REST API (`models/<name>`)
    pub fn resource_name(&self) -> String {
        let name = self.as_str();
        if name.starts_with("models/") || name.starts_with("tunedModels/") {
            name.to_string()
        } else {
            format!("models/{}", name)
        }
    }

    /// Candidates tried at startup, in order
    pub fn default_candidates() -> Vec<Model> {
        vec![Model::GeminiPro, Model::Gemini10Pro]
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::GeminiPro
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim() {
            "gemini-pro" | "models/gemini-pro" => Model::GeminiPro,
            "gemini-1.0-pro" | "models/gemini-1.0-pro" => Model::Gemini10Pro,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}
