// src/infrastructure/terminal.rs
use crate::application::{Notification, NotificationLevel, Notifier};
use tracing::{debug, info};

/// Prints notifications as one-line banners on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub fn new() -> Self {
        Self
    }

    pub fn banner(notification: &Notification) -> String {
        let marker = match notification.level {
            NotificationLevel::Success => "✔",
            NotificationLevel::Error => "✘",
        };
        format!("{marker} {notification}")
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        info!(level = ?notification.level, message = %notification.message, "Notification");
        eprintln!("{}", Self::banner(&notification));
    }

    fn loading(&self, active: bool) {
        debug!(active, "Loading indicator");
    }
}
