use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

const COMPONENT_BAR_TEMPLATE: &str =
    "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} components - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Messages go to stderr; per-component progress is drawn with an
/// indicatif bar that is created on the first component and cleared
/// when the run finishes or fails.
pub struct StderrProgressReporter {
    component_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            component_bar: RefCell::new(None),
        }
    }

    fn component_bar(&self, total: usize) -> ProgressBar {
        let mut slot = self.component_bar.borrow_mut();
        slot.get_or_insert_with(|| {
            let bar = ProgressBar::new(total as u64);
            // Keeps the default style if the template is rejected
            if let Ok(style) = ProgressStyle::default_bar().template(COMPONENT_BAR_TEMPLATE) {
                bar.set_style(style.progress_chars("=>-"));
            }
            bar
        })
        .clone()
    }

    fn clear_bar(&self) {
        if let Some(bar) = self.component_bar.borrow_mut().take() {
            bar.finish_and_clear();
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
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let bar = self.component_bar(total);
        bar.set_position(current as u64);
        if let Some(msg) = message {
            bar.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_bar();
        eprintln!("{}", message);
    }
}

/// SilentProgressReporter adapter that drops every report
///
/// Used by the library entry point, which must not write to the console.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn report(&self, _message: &str) {}

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, _message: &str) {}

    fn report_completion(&self, _message: &str) {}
}
