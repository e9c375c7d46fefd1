//! Domain layer for textnext
//!
//! This crate contains the core prediction logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Pipeline
//!
//! One submission flows through these stages, each owned by a module here:
//!
//! ```text
//! RawInput ─► sanitize ─► validate ─► PromptTemplate ─► (model) ─► interpret
//!                            │                                       │
//!                            └─► Invalid(InputError)                 └─► PredictionOutcome
//! ```
//!
//! The model call itself is not part of the domain; see the application
//! layer's `ModelClient` port.

pub mod config;
pub mod core;
pub mod generation;
pub mod input;
pub mod prediction;
pub mod prompt;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::InputError, model::Model};
pub use generation::{
    config::GenerationConfig,
    safety::{HarmBlockThreshold, HarmCategory, SafetySetting, SafetySettings},
};
pub use input::{
    CleanInput, MAX_INPUT_CHARS, MIN_INPUT_CHARS, RawInput, ValidationResult, sanitize, validate,
    validate_str,
};
pub use prediction::{
    interpreter::{classify_error, interpret, interpret_error, interpret_response},
    outcome::{PredictionOutcome, WarningCategory},
    response::{FinishReason, RawModelResponse},
};
pub use prompt::PromptTemplate;
