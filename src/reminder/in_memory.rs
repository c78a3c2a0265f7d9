//! In-memory notifier for tests and headless use.

use std::sync::{Arc, RwLock};

use super::notifier::{NotificationPermission, Notifier, NotifyError};

/// Notifier that records deliveries instead of showing anything.
///
/// Permission behavior is scriptable: construct with a fixed state, or
/// start undetermined and choose what a permission request resolves to.
/// Clone-friendly via `Arc`, so a test can keep a handle while the
/// scheduler owns another.
#[derive(Clone)]
pub struct InMemoryNotifier {
    permission: Arc<RwLock<NotificationPermission>>,
    resolves_to: NotificationPermission,
    failing: Arc<RwLock<bool>>,
    delivered: Arc<RwLock<Vec<(String, String)>>>,
}

impl InMemoryNotifier {
    /// Notifier with permission already granted.
    pub fn granted() -> Self {
        Self::with_permission(NotificationPermission::Granted)
    }

    /// Notifier with permission denied.
    pub fn denied() -> Self {
        Self::with_permission(NotificationPermission::Denied)
    }

    /// Undetermined notifier whose permission request resolves to the
    /// given state.
    pub fn undetermined(resolves_to: NotificationPermission) -> Self {
        InMemoryNotifier {
            permission: Arc::new(RwLock::new(NotificationPermission::Undetermined)),
            resolves_to,
            failing: Arc::new(RwLock::new(false)),
            delivered: Arc::new(RwLock::new(Vec::new())),
        }
    }

    fn with_permission(permission: NotificationPermission) -> Self {
        InMemoryNotifier {
            permission: Arc::new(RwLock::new(permission)),
            resolves_to: permission,
            failing: Arc::new(RwLock::new(false)),
            delivered: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Change the permission state, as the host's settings UI would.
    pub fn set_permission(&self, permission: NotificationPermission) {
        *self.permission.write().unwrap() = permission;
    }

    /// Make subsequent deliveries fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        *self.failing.write().unwrap() = failing;
    }

    /// Titles and bodies delivered so far, in delivery order.
    pub fn delivered(&self) -> Vec<(String, String)> {
        self.delivered.read().unwrap().clone()
    }
}

impl Notifier for InMemoryNotifier {
    fn permission(&self) -> NotificationPermission {
        *self.permission.read().unwrap()
    }

    fn request_permission(&self) -> NotificationPermission {
        let mut permission = self.permission.write().unwrap();
        if *permission == NotificationPermission::Undetermined {
            *permission = self.resolves_to;
        }
        *permission
    }

    fn deliver(&self, title: &str, body: &str) -> Result<(), NotifyError> {
        if self.permission() != NotificationPermission::Granted {
            return Err(NotifyError::Unauthorized);
        }
        if *self.failing.read().unwrap() {
            return Err(NotifyError::Delivery("notifier set to fail".to_string()));
        }
        self.delivered
            .write()
            .unwrap()
            .push((title.to_string(), body.to_string()));
        Ok(())
    }
}
