//! Progress notification port
//!
//! Lets the presentation layer show that the model is thinking while a
//! request is in flight.

/// Callback for progress updates during a turn
pub trait GameProgressNotifier: Send + Sync {
    /// Called right before the model is asked. `question_number` is the
    /// number the next question would have.
    fn on_model_call_start(&self, question_number: u32);

    /// Called when the model call returned, successfully or not.
    fn on_model_call_end(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl GameProgressNotifier for NoProgress {
    fn on_model_call_start(&self, _question_number: u32) {}
    fn on_model_call_end(&self, _success: bool) {}
}
