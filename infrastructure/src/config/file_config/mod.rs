//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod gemini;
mod output;
mod repl;

pub use gemini::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, FileGeminiConfig};
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a default is used instead.
    Warning,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub message: String,
}

impl ConfigIssue {
    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini provider settings
    pub gemini: FileGeminiConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Interactive mode settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.gemini.models.iter().any(|m| m.trim().is_empty()) {
            issues.push(ConfigIssue::warning(
                "gemini.models: empty model name is ignored",
            ));
        }

        if self.gemini.parse_models().is_empty() {
            issues.push(ConfigIssue::error(
                "gemini.models: no model configured, predictions are disabled",
            ));
        }

        if self.gemini.api_key_env.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "gemini.api_key_env: environment variable name is empty",
            ));
        }

        if !self.gemini.base_url.starts_with("http://")
            && !self.gemini.base_url.starts_with("https://")
        {
            issues.push(ConfigIssue::error(format!(
                "gemini.base_url: '{}' is not an http(s) URL",
                self.gemini.base_url
            )));
        }

        if let Err(value) = self.output.parse_format() {
            issues.push(ConfigIssue::warning(format!(
                "output.format: unknown value '{}', falling back to 'text'",
                value
            )));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textnext_domain::{Model, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gemini]
api_key_env = "MY_GEMINI_KEY"
base_url = "http://localhost:8080"
models = ["gemini-1.5-flash", "gemini-pro"]
verify_model = false

[output]
format = "json"
color = false

[repl]
show_progress = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.api_key_env, "MY_GEMINI_KEY");
        assert_eq!(config.gemini.base_url, "http://localhost:8080");
        assert_eq!(
            config.gemini.parse_models(),
            vec![
                Model::Custom("gemini-1.5-flash".to_string()),
                Model::GeminiPro
            ]
        );
        assert!(!config.gemini.verify_model);
        assert_eq!(config.output.parse_format(), Ok(Some(OutputFormat::Json)));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[gemini]
verify_model = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.gemini.verify_model);
        // Defaults should apply
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.gemini.parse_models().len(), 2);
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_issues() {
        let mut config = FileConfig::default();
        config.gemini.models = vec!["".to_string()];
        config.gemini.base_url = "ftp://example.com".to_string();
        config.output.format = Some("yaml".to_string());

        let issues = config.validate();
        assert_eq!(issues.len(), 4);
        assert_eq!(
            issues
                .iter()
                .filter(|i| i.severity == Severity::Error)
                .count(),
            2
        );
        assert!(issues.iter().any(|i| i.message.contains("yaml")));
    }
}
