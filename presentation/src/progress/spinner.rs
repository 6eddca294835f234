//! Spinner shown while waiting for the completion backend

use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

/// A single-line spinner; hidden entirely when progress is disabled
pub struct WaitSpinner {
    bar: Option<ProgressBar>,
}

impl WaitSpinner {
    /// Start spinning with `message`, or do nothing when `enabled` is false
    pub fn start(message: &str, enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Remove the spinner line
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    /// Await `future` with a spinner running until it resolves
    pub async fn run<F: Future>(message: &str, enabled: bool, future: F) -> F::Output {
        let spinner = Self::start(message, enabled);
        let output = future.await;
        spinner.finish();
        output
    }
}
