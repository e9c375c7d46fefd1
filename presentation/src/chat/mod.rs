//! Interactive prompt module
//!
//! Provides a readline-based loop that predicts the next word for each line.

mod repl;

pub use repl::{PredictRepl, ReplCommand};
