//! Interactive mode configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Raw interactive-mode configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the spinner while a request is in flight
    pub show_progress: bool,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
        }
    }
}
