//! Prompt domain
//!
//! The fixed instruction template wrapped around the user's text.

mod template;

pub use template::PromptTemplate;
