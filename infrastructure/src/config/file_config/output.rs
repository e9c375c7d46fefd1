//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use textnext_domain::OutputFormat;

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format: "text" or "json"
    pub format: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Parse the configured format. Unknown values yield `Err` with the raw value.
    pub fn parse_format(&self) -> Result<Option<OutputFormat>, String> {
        match &self.format {
            None => Ok(None),
            Some(s) => s.parse().map(Some).map_err(|_| s.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_deserialize() {
        let toml_str = r#"
[output]
format = "json"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.parse_format(), Ok(Some(OutputFormat::Json)));
    }

    #[test]
    fn test_unknown_format() {
        let config = FileOutputConfig {
            format: Some("yaml".to_string()),
            color: true,
        };
        assert_eq!(config.parse_format(), Err("yaml".to_string()));
    }
}
