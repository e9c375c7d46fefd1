//! Progress reporting while a prediction request is in flight

use crate::output::console::ConsoleFormatter;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use textnext_application::PredictionProgress;
use textnext_domain::Model;

const SPINNER_MESSAGE: &str = "Predicting next word...";

/// Shows a spinner around the model call and prints operator alerts to stderr
pub struct SpinnerProgress {
    show_spinner: bool,
    spinner: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            show_spinner: true,
            spinner: Mutex::new(None),
        }
    }

    /// Alerts only, no spinner (for `--quiet` and JSON output)
    pub fn quiet() -> Self {
        Self {
            show_spinner: false,
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    #[cfg(test)]
    fn is_spinning(&self) -> bool {
        self.spinner.lock().unwrap().is_some()
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionProgress for SpinnerProgress {
    fn on_request_start(&self, _model: &Model) {
        if !self.show_spinner {
            return;
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_message(SPINNER_MESSAGE);
        spinner.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.lock().unwrap() = Some(spinner);
    }

    fn on_request_complete(&self, _model: &Model, _success: bool) {
        if let Some(spinner) = self.spinner.lock().unwrap().take() {
            spinner.finish_and_clear();
        }
    }

    fn on_operator_alert(&self, detail: &str) {
        if let Some(spinner) = self.spinner.lock().unwrap().as_ref() {
            spinner.suspend(|| eprintln!("{}", ConsoleFormatter::operator_alert(detail)));
            return;
        }
        eprintln!("{}", ConsoleFormatter::operator_alert(detail));
    }
}
