/// NotificationSink port for user-facing notifications
///
/// Each call is one self-contained notification with a title and a plain
/// text message. A console sink prints them, a GUI host would show dialogs.
pub trait NotificationSink {
    /// Informational notification, e.g. "No BOM issues found"
    fn info(&self, title: &str, message: &str);

    /// Something the user should act on, such as parts nobody stocks
    fn warn(&self, title: &str, message: &str);

    /// A condition that stopped the run
    ///
    /// # Arguments
    /// * `title` - Short heading, e.g. "No MPN specified"
    /// * `message` - Full description shown below the title
    fn error(&self, title: &str, message: &str);
}
