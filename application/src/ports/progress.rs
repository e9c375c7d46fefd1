//! Progress notification port
//!
//! Defines the interface for reporting progress during a prediction.

use textnext_domain::Model;

/// Callbacks around the blocking model call.
///
/// Implementations live in the presentation layer (e.g. a spinner).
pub trait PredictionProgress: Send + Sync {
    /// Called right before the request is sent
    fn on_request_start(&self, model: &Model);

    /// Called once the request has returned, successfully or not
    fn on_request_complete(&self, model: &Model, success: bool);

    /// Operator-facing alert carrying raw provider error text.
    ///
    /// Used for errors that map to no known category. The text must not be
    /// shown in place of the prediction.
    fn on_operator_alert(&self, _detail: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl PredictionProgress for NoProgress {
    fn on_request_start(&self, _model: &Model) {}
    fn on_request_complete(&self, _model: &Model, _success: bool) {}
}
