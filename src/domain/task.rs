use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::RecordId;

/// Progress state of a task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "Pending"),
            TaskStatus::InProgress => write!(f, "In Progress"),
            TaskStatus::Completed => write!(f, "Completed"),
        }
    }
}

/// Where a task sits in the reminder lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReminderState {
    /// No reminder time configured; never checked.
    NoReminder,
    /// Waiting for the reminder time to pass.
    Armed,
    /// The one-shot notification has been delivered.
    Fired,
    /// Completed before the reminder fired; never notifies.
    Suppressed,
}

/// A to-do item with an optional one-shot reminder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    /// Time of day on `due_date` the reminder should fire, if any.
    pub reminder_time: Option<NaiveTime>,
    /// Set exactly once, by the scheduler. Never reverts.
    pub reminder_sent: bool,
}

impl Task {
    /// The instant the reminder should fire, if one is configured.
    pub fn reminder_due_at(&self) -> Option<NaiveDateTime> {
        self.reminder_time.map(|time| self.due_date.and_time(time))
    }

    /// Reminder lifecycle state over (`status`, `reminder_time`,
    /// `reminder_sent`).
    pub fn reminder_state(&self) -> ReminderState {
        if self.reminder_time.is_none() {
            ReminderState::NoReminder
        } else if self.reminder_sent {
            ReminderState::Fired
        } else if self.status == TaskStatus::Completed {
            ReminderState::Suppressed
        } else {
            ReminderState::Armed
        }
    }
}

/// Input for creating a task. New tasks start pending with the
/// reminder unsent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub due_date: NaiveDate,
    pub reminder_time: Option<NaiveTime>,
}
