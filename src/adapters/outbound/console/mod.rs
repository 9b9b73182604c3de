/// Console adapters for user-facing output on stderr
mod notifier;
mod progress_reporter;

pub use notifier::ConsoleNotifier;
pub use progress_reporter::StderrProgressReporter;
