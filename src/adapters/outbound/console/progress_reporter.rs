use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

/// Spinner template showing the running record count of a section
const SPINNER_TEMPLATE: &str = "   {spinner:.green} {pos} {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with a report on stdout.
/// Uses an indicatif spinner per streamed section; indicatif hides it when
/// stderr is not a terminal.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<(String, ProgressBar)>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    /// Returns the spinner for `label`, finishing the spinner of a previous section
    fn spinner_for(&self, label: &str) -> ProgressBar {
        let mut current = self.spinner.borrow_mut();
        if let Some((current_label, spinner)) = current.as_ref() {
            if current_label == label {
                return spinner.clone();
            }
            spinner.finish_and_clear();
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template(SPINNER_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("{} streamed", label));
        *current = Some((label.to_string(), spinner.clone()));
        spinner
    }

    fn clear_spinner(&self) {
        if let Some((_, spinner)) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }

    fn report_count(&self, count: usize, label: &str) {
        let spinner = self.spinner_for(label);
        spinner.set_position(count as u64);
        spinner.tick();
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        eprintln!();
        eprintln!("{}", message);
    }
}
