use eframe::egui;
use std::sync::Mutex;

use crate::catalog::{Notification, Notifier};
use crate::wasm_utils;

#[derive(Debug, Clone)]
struct Toast {
    notification: Notification,
    expires_at_ms: u64,
}

/// Snackbar-style notifier: each message stays on screen for its duration.
#[derive(Default)]
pub struct ToastNotifier {
    toasts: Mutex<Vec<Toast>>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications still on screen at `now_ms`, dropping the expired ones.
    fn active(&self, now_ms: u64) -> Vec<Notification> {
        let mut toasts = self
            .toasts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        toasts.retain(|toast| toast.expires_at_ms > now_ms);
        toasts.iter().map(|toast| toast.notification.clone()).collect()
    }

    pub fn render(&self, ctx: &egui::Context) {
        let active = self.active(wasm_utils::now_timestamp());
        if active.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("catalog_toasts"))
            .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -24.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                for notification in &active {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(notification.message.as_str());
                            if !notification.action.is_empty() {
                                ui.separator();
                                ui.strong(notification.action.as_str());
                            }
                        });
                    });
                    ui.add_space(4.0);
                }
            });
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        log::debug!("Toast: {}", notification.message);
        let expires_at_ms =
            wasm_utils::now_timestamp() + notification.duration.as_millis() as u64;
        let mut toasts = self
            .toasts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        toasts.push(Toast {
            notification,
            expires_at_ms,
        });
    }
}
