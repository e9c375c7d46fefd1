//! Fixed generation parameters sent with every request
//!
//! Both the decoding parameters and the content-safety thresholds are
//! process-wide constants. Nothing mutates them per request.

pub mod config;
pub mod safety;
