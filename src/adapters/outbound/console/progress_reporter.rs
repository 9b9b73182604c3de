use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;

const BAR_TEMPLATE: &str =
    "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} lookups ({elapsed}) - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so a report printed to stdout stays clean. The lookup
/// progress bar is created on the first progress update.
pub struct StderrProgressReporter {
    progress_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: RefCell::new(None),
        }
    }

    fn get_or_create_progress_bar(&self, total: usize) -> ProgressBar {
        let mut pb_option = self.progress_bar.borrow_mut();
        if let Some(pb) = pb_option.as_ref() {
            return pb.clone();
        }

        let style = ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        let pb = ProgressBar::new(total as u64);
        pb.set_style(style);
        *pb_option = Some(pb.clone());
        pb
    }

    fn finish_progress_bar(&self) {
        if let Some(pb) = self.progress_bar.borrow_mut().take() {
            pb.finish_and_clear();
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
        let pb = self.get_or_create_progress_bar(total);
        pb.set_position(current as u64);
        if let Some(msg) = message {
            pb.set_message(msg.to_string());
        }
        if current >= total {
            drop(pb);
            self.finish_progress_bar();
        }
    }

    fn report_error(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.finish_progress_bar();
        eprintln!();
        eprintln!("{}", message);
    }
}
