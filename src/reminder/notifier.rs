use std::fmt;

/// Host authorization state for delivering notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPermission {
    Granted,
    Denied,
    Undetermined,
}

/// Error from a notification delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// The host has not granted notification permission.
    Unauthorized,
    /// The delivery mechanism itself failed.
    Delivery(String),
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyError::Unauthorized => write!(f, "notification permission not granted"),
            NotifyError::Delivery(message) => {
                write!(f, "notification delivery failed: {}", message)
            }
        }
    }
}

impl std::error::Error for NotifyError {}

/// Capability for querying notification authorization and delivering
/// notifications.
///
/// The crate depends on this boundary, not on any delivery mechanism.
/// A desktop shell, a web push bridge, or [`super::InMemoryNotifier`]
/// all fit behind it.
pub trait Notifier: Send + Sync {
    /// Current authorization state.
    fn permission(&self) -> NotificationPermission;

    /// Ask the host for authorization and return the resulting state.
    fn request_permission(&self) -> NotificationPermission;

    /// Deliver a notification with the given title and body.
    fn deliver(&self, title: &str, body: &str) -> Result<(), NotifyError>;
}
