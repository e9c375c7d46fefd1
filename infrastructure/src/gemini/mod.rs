//! Gemini adapter
//!
//! Implements the `ModelClient` port against the Gemini REST API.

pub mod client;
pub mod error;
pub mod protocol;
