use std::time::Duration;

pub const NOTIFY_DURATION: Duration = Duration::from_millis(3000);

pub const LOAD_FAILED: &str = "Something went wrong!...";
pub const ADDED: &str = "Added Successfully!...";
pub const UPDATED: &str = "Updated Successfully!...";
pub const SAVE_FAILED: &str = "Something went wrong!...";
pub const DELETED: &str = "Deletado com sucesso!...";
pub const DELETE_FAILED: &str = "Algo deu errado!...";

/// A transient message for the snackbar surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub action: String,
    pub duration: Duration,
}

impl Notification {
    /// Message with no action label, shown for `NOTIFY_DURATION`.
    pub fn transient(message: &str) -> Self {
        Self {
            message: message.to_string(),
            action: String::new(),
            duration: NOTIFY_DURATION,
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
