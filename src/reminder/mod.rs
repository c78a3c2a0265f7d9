//! Task reminders - a polling scheduler over the store's task list.
//!
//! Each pending task with a reminder time gets exactly one
//! notification, delivered on the first tick at or after the
//! configured time. Delivery goes through the [`Notifier`] capability;
//! while the host has not granted notification permission the
//! scheduler skips firing without marking anything, so reminders can
//! still go out after a later grant.

mod in_memory;
mod notifier;
mod scheduler;
mod thread;

pub use in_memory::InMemoryNotifier;
pub use notifier::{NotificationPermission, Notifier, NotifyError};
pub use scheduler::{ReminderScheduler, TickResult, REMINDER_TITLE};
pub use thread::{ReminderStats, ReminderThread, DEFAULT_POLL_INTERVAL};
