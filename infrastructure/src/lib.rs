//! Infrastructure layer for textnext
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileGeminiConfig, FileOutputConfig, FileReplConfig,
    Severity,
};
pub use gemini::{
    client::{GeminiModelClient, GeminiSettings},
    error::{GeminiError, Result},
};
