//! Spinner shown while the model works on its next question

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use twentyq_application::GameProgressNotifier;

/// Shows a spinner for the duration of each model call
pub struct ThinkingSpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl ThinkingSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ThinkingSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl GameProgressNotifier for ThinkingSpinner {
    fn on_model_call_start(&self, question_number: u32) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(format!("Question {}", question_number));
        pb.set_message("Thinking...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut guard) = self.bar.lock()
            && let Some(previous) = guard.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_model_call_end(&self, success: bool) {
        let Ok(mut guard) = self.bar.lock() else {
            return;
        };
        if let Some(pb) = guard.take() {
            if success {
                pb.finish_and_clear();
            } else {
                pb.abandon_with_message(format!("{}", "model call failed".red()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let spinner = ThinkingSpinner::new();
        spinner.on_model_call_start(1);
        assert!(spinner.bar.lock().unwrap().is_some());
        spinner.on_model_call_end(true);
        assert!(spinner.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_end_without_start_is_harmless() {
        let spinner = ThinkingSpinner::new();
        spinner.on_model_call_end(false);
        assert!(spinner.bar.lock().unwrap().is_none());
    }
}
