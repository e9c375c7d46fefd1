//! Presentation layer for textnext
//!
//! This crate contains the CLI definition, output formatting,
//! the request spinner, and the interactive prompt.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::PredictRepl;
pub use cli::commands::{Cli, OutputFormatArg};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::SpinnerProgress;
