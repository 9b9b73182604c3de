use bom_stockcheck::prelude::*;
use std::sync::{Arc, Mutex};

/// A notification captured by `MockNotifier`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: &'static str,
    pub title: String,
    pub message: String,
}

/// Mock NotificationSink recording every notification
#[derive(Default, Clone)]
pub struct MockNotifier {
    pub notifications: Arc<Mutex<Vec<Notification>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn titles(&self, level: &str) -> Vec<String> {
        self.get_notifications()
            .into_iter()
            .filter(|n| n.level == level)
            .map(|n| n.title)
            .collect()
    }

    fn push(&self, level: &'static str, title: &str, message: &str) {
        self.notifications.lock().unwrap().push(Notification {
            level,
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

impl NotificationSink for MockNotifier {
    fn info(&self, title: &str, message: &str) {
        self.push("info", title, message);
    }

    fn warn(&self, title: &str, message: &str) {
        self.push("warn", title, message);
    }

    fn error(&self, title: &str, message: &str) {
        self.push("error", title, message);
    }
}
