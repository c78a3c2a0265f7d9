//! Background thread that runs the reminder scheduler on a fixed
//! period.

use std::sync::mpsc::{channel, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use super::notifier::Notifier;
use super::scheduler::ReminderScheduler;
use crate::store::ShopStore;

/// Default polling period for the reminder scan.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Statistics from the reminder thread.
#[derive(Debug, Default, Clone)]
pub struct ReminderStats {
    /// Notifications delivered.
    pub fired: usize,
    /// Poll cycles completed.
    pub polls: usize,
    /// Poll cycles skipped for lack of notification permission.
    pub skipped: usize,
    /// Store errors encountered while scanning.
    pub errors: usize,
}

/// A background thread that periodically scans tasks and fires due
/// reminders.
///
/// Follows the spawn / do work / stop-and-collect-stats shape. The
/// thread is also stopped when the handle is dropped, so an owning
/// context tearing down cannot leak the timer.
///
/// ## Example
///
/// ```ignore
/// use duka_core::{InMemoryNotifier, ReminderThread, ShopStore, DEFAULT_POLL_INTERVAL};
///
/// let store = ShopStore::new();
/// let reminders = ReminderThread::spawn(
///     store.clone(),
///     InMemoryNotifier::granted(),
///     DEFAULT_POLL_INTERVAL,
/// );
///
/// // ... add tasks, run the app ...
///
/// let stats = reminders.stop();
/// println!("fired {} reminders", stats.fired);
/// ```
pub struct ReminderThread {
    stop_tx: Sender<()>,
    handle: Option<JoinHandle<ReminderStats>>,
}

impl ReminderThread {
    /// Spawn the reminder thread.
    ///
    /// Requests notification permission once if the host has not
    /// decided yet, then ticks every `poll_interval` until stopped.
    pub fn spawn<N>(store: ShopStore, notifier: N, poll_interval: Duration) -> Self
    where
        N: Notifier + 'static,
    {
        let scheduler = ReminderScheduler::new(store, notifier);
        let (stop_tx, stop_rx) = channel();

        let handle = thread::spawn(move || {
            let mut stats = ReminderStats::default();

            loop {
                // Check for stop signal
                match stop_rx.try_recv() {
                    Ok(()) | Err(TryRecvError::Disconnected) => break,
                    Err(TryRecvError::Empty) => {}
                }

                stats.polls += 1;

                match scheduler.tick() {
                    Ok(result) => {
                        if result.skipped {
                            stats.skipped += 1;
                        }
                        if result.fired > 0 {
                            debug!("delivered {} task reminder(s)", result.fired);
                        }
                        stats.fired += result.fired;
                    }
                    Err(err) => {
                        warn!("reminder scan failed: {}", err);
                        stats.errors += 1;
                    }
                }

                thread::sleep(poll_interval);
            }

            stats
        });

        Self {
            stop_tx,
            handle: Some(handle),
        }
    }

    /// Signal the thread to stop and wait for it to finish.
    /// Returns the accumulated statistics.
    pub fn stop(mut self) -> ReminderStats {
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap_or_default()
        } else {
            ReminderStats::default()
        }
    }
}

impl Drop for ReminderThread {
    fn drop(&mut self) {
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
