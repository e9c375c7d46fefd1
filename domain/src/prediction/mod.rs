//! Prediction domain
//!
//! What comes back from the model, and how it becomes a [`outcome::PredictionOutcome`].

pub mod interpreter;
pub mod outcome;
pub mod response;
