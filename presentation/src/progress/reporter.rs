//! Progress reporting while a run is in flight

use chat_application::TurnProgressNotifier;
use chat_domain::{Run, RunStatus};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner on stderr from run start until the run settles
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn status_message(status: &RunStatus, attempt: u32) -> String {
        match status {
            RunStatus::Queued => "Waiting for the assistant...".to_string(),
            RunStatus::InProgress => format!("Assistant is thinking... (check {})", attempt),
            other => format!("Run {} (check {})", other, attempt),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnProgressNotifier for ProgressReporter {
    fn on_run_started(&self, _run: &Run) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Waiting for the assistant...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_run_status(&self, status: &RunStatus, attempt: u32) {
        if let Ok(slot) = self.spinner.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(Self::status_message(status, attempt));
        }
    }

    fn on_run_finished(&self, status: &RunStatus) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        if let Some(pb) = slot.take() {
            if status.is_completed() {
                pb.finish_and_clear();
            } else {
                pb.abandon_with_message(format!("{} run {}", "x".red(), status));
            }
        }
    }
}
