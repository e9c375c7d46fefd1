//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod predict_next_word;
