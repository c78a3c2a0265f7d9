//! The scan-and-fire pass over the task list.

use chrono::{Local, NaiveDateTime};

use super::notifier::{NotificationPermission, Notifier};
use crate::domain::ReminderState;
use crate::store::{ShopStore, StoreError};

/// Title used for every task reminder notification.
pub const REMINDER_TITLE: &str = "Task Reminder";

/// Result of a single scheduler tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickResult {
    /// The pass was skipped because notifications are not authorized.
    pub skipped: bool,
    /// Tasks still waiting for their reminder time.
    pub armed: usize,
    /// Notifications delivered (and marked sent) this tick.
    pub fired: usize,
    /// Deliveries that errored; those tasks stay armed.
    pub failed: usize,
}

/// Periodic scanner that fires each task's one-shot reminder.
///
/// Construction requests notification permission once if the host has
/// not decided yet. Ticks are level-triggered: a reminder whose time
/// passed while the process was suspended fires on the next tick, once.
/// Duplicate suppression rests solely on the task's `reminder_sent`
/// flag, not on timer precision.
pub struct ReminderScheduler<N> {
    store: ShopStore,
    notifier: N,
}

impl<N: Notifier> ReminderScheduler<N> {
    /// Wrap a store handle and a notifier capability.
    pub fn new(store: ShopStore, notifier: N) -> Self {
        if notifier.permission() == NotificationPermission::Undetermined {
            notifier.request_permission();
        }
        ReminderScheduler { store, notifier }
    }

    /// Access the notifier capability.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Run one pass at the current local wall-clock time.
    pub fn tick(&self) -> Result<TickResult, StoreError> {
        self.tick_at(Local::now().naive_local())
    }

    /// Run one pass as of the given instant.
    ///
    /// While authorization is denied or undetermined the whole pass is
    /// skipped and nothing is marked sent, so reminders can still fire
    /// after a later grant.
    pub fn tick_at(&self, now: NaiveDateTime) -> Result<TickResult, StoreError> {
        let mut result = TickResult::default();

        if self.notifier.permission() != NotificationPermission::Granted {
            result.skipped = true;
            return Ok(result);
        }

        for task in self.store.tasks()? {
            if task.reminder_state() != ReminderState::Armed {
                continue;
            }
            let due_at = match task.reminder_due_at() {
                Some(due_at) => due_at,
                None => continue,
            };
            if now < due_at {
                result.armed += 1;
                continue;
            }

            let body = format!("Don't forget: {}", task.title);
            match self.notifier.deliver(REMINDER_TITLE, &body) {
                Ok(()) => {
                    // Marked only after a successful delivery; a failed
                    // attempt stays armed and retries on a later tick.
                    self.store.mark_reminder_sent(task.id)?;
                    result.fired += 1;
                }
                Err(_) => result.failed += 1,
            }
        }

        Ok(result)
    }
}
