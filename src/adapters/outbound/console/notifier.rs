use crate::ports::outbound::NotificationSink;
use owo_colors::OwoColorize;

/// ConsoleNotifier adapter printing notifications to stderr
///
/// Titles are coloured by severity; the message follows on the next lines.
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for ConsoleNotifier {
    fn info(&self, title: &str, message: &str) {
        eprintln!("ℹ️  {}", title.cyan().bold());
        eprintln!("{}", message);
    }

    fn warn(&self, title: &str, message: &str) {
        eprintln!("⚠️  {}", title.yellow().bold());
        eprintln!("{}", message.trim_end());
    }

    fn error(&self, title: &str, message: &str) {
        eprintln!("❌ {}", title.red().bold());
        eprintln!("{}", message.trim_end());
    }
}
