//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: Gemini model identifiers
//! - [`error::InputError`]: locally detected input errors
//! - [`string`]: char-safe string helpers

pub mod error;
pub mod model;
pub mod string;
