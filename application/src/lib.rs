//! Application layer for textnext
//!
//! This crate contains the prediction use case and the port definitions
//! that infrastructure adapters implement. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    model_client::{ModelClient, ModelHandle, ProviderError},
    progress::{NoProgress, PredictionProgress},
};
pub use use_cases::predict_next_word::{PredictNextWordOutput, PredictNextWordUseCase};
