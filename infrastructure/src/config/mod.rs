//! Configuration file loading for textnext
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TEXTNEXT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./textnext.toml` or `./.textnext.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/textnext/config.toml`
//! 5. Default values
//!
//! The Gemini API key itself is never read from a file. It comes from the
//! environment variable named by `gemini.api_key_env`, optionally populated
//! from a `.env` file.

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, FileConfig, FileGeminiConfig,
    FileOutputConfig, FileReplConfig, Severity,
};
pub use loader::ConfigLoader;
