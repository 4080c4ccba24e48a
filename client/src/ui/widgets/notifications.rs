//! # Notifications Widget
//!
//! Toast notifications using egui-notify. Handlers queue
//! [`Notification`]s in the state; the UI drains and shows them every frame.

use egui_notify::Toasts;
use std::time::Duration;

use crate::app::{Notification, NotificationKind};

const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Notification manager for the application
pub struct NotificationManager {
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default().with_anchor(egui_notify::Anchor::BottomRight),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a queued notification with its severity.
    pub fn push(&mut self, notification: &Notification) {
        let message = notification.message.clone();
        let toast = match notification.kind {
            NotificationKind::Success => self.toasts.success(message),
            NotificationKind::Error => self.toasts.error(message),
            NotificationKind::Warning => self.toasts.warning(message),
        };
        toast.duration(Some(TOAST_DURATION));
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
