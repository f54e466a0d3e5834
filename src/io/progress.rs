//! Spinner feedback while a grid is loaded and searched

use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {prefix} {msg} [{elapsed_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Single-line spinner reporting the current stage of a solve
///
/// Hidden spinners accept every call and draw nothing, so callers need no branching
/// on `--quiet`.
pub struct SolveSpinner {
    bar: ProgressBar,
}

impl SolveSpinner {
    /// Create a spinner, drawn only when `visible`
    pub fn new(visible: bool) -> Self {
        let bar = if visible {
            let bar = ProgressBar::new_spinner();
            bar.set_style(SPINNER_STYLE.clone());
            bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
            bar
        } else {
            ProgressBar::hidden()
        };
        Self { bar }
    }

    /// Label the spinner with the grid being processed
    pub fn set_grid(&self, label: &str) {
        self.bar.set_prefix(label.to_string());
    }

    /// Describe the current stage
    pub fn stage(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    /// Current stage text
    pub fn message(&self) -> String {
        self.bar.message()
    }

    /// Stop the spinner and remove it from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// Whether the spinner has been stopped
    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}
