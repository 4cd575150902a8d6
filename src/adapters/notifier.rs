//! Notifier adapters for the command-line front-end.

use crate::traits::{Notification, NotificationKind, Notifier};

/// Sends notifications to the log only.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => {
                tracing::info!("{}: {}", notification.title, notification.description)
            }
            NotificationKind::Error => {
                tracing::warn!("{}: {}", notification.title, notification.description)
            }
        }
    }
}

/// Prints notifications to stderr, keeping stdout free for answer text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let marker = match notification.kind {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✗",
        };
        eprintln!("{} {}", marker, notification.description);
        TracingNotifier.notify(notification);
    }
}
