use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use duka_core::{
    InMemoryNotifier, NewTask, NotificationPermission, Notifier, ReminderScheduler, ReminderThread,
    ShopStore, TaskStatus, REMINDER_TITLE,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn time(hour: u32, minute: u32, second: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, second).unwrap()
}

fn at(day: NaiveDate, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    day.and_time(time(hour, minute, second))
}

fn reminder_task(title: &str, due: NaiveDate) -> NewTask {
    NewTask {
        title: title.to_string(),
        due_date: due,
        reminder_time: Some(time(9, 0, 0)),
    }
}

#[test]
fn due_reminder_fires_exactly_once() {
    let store = ShopStore::new();
    let today = date(2024, 7, 25);
    store
        .add_task(reminder_task("Call wholesaler for sugar restock", today))
        .unwrap();

    let notifier = InMemoryNotifier::granted();
    let scheduler = ReminderScheduler::new(store.clone(), notifier.clone());

    // One second before nine: armed, nothing fires.
    let before = scheduler.tick_at(at(today, 8, 59, 59)).unwrap();
    assert_eq!(before.fired, 0);
    assert_eq!(before.armed, 1);
    assert!(notifier.delivered().is_empty());

    // One second past nine: exactly one notification.
    let due = scheduler.tick_at(at(today, 9, 0, 1)).unwrap();
    assert_eq!(due.fired, 1);
    let delivered = notifier.delivered();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].0, REMINDER_TITLE);
    assert!(delivered[0].1.contains("Call wholesaler for sugar restock"));
    assert!(store.tasks().unwrap()[0].reminder_sent);

    // Later ticks stay quiet.
    let again = scheduler.tick_at(at(today, 9, 0, 31)).unwrap();
    assert_eq!(again.fired, 0);
    assert_eq!(notifier.delivered().len(), 1);
}

#[test]
fn completing_a_task_suppresses_its_reminder() {
    let store = ShopStore::new();
    let today = date(2024, 7, 25);
    let mut task = store
        .add_task(reminder_task("Monthly profit report", today))
        .unwrap();

    task.status = TaskStatus::Completed;
    store.update_task(task).unwrap();

    let notifier = InMemoryNotifier::granted();
    let scheduler = ReminderScheduler::new(store.clone(), notifier.clone());
    let result = scheduler.tick_at(at(today, 9, 0, 1)).unwrap();

    assert_eq!(result.fired, 0);
    assert!(notifier.delivered().is_empty());
    assert!(!store.tasks().unwrap()[0].reminder_sent);
}

#[test]
fn tasks_without_a_reminder_time_are_never_checked() {
    let store = ShopStore::new();
    let today = date(2024, 7, 25);
    store
        .add_task(NewTask {
            title: "No reminder".to_string(),
            due_date: today,
            reminder_time: None,
        })
        .unwrap();

    let notifier = InMemoryNotifier::granted();
    let scheduler = ReminderScheduler::new(store, notifier.clone());
    let result = scheduler.tick_at(at(today, 23, 59, 59)).unwrap();

    assert_eq!(result.armed, 0);
    assert_eq!(result.fired, 0);
    assert!(notifier.delivered().is_empty());
}

#[test]
fn overdue_reminder_fires_on_the_next_tick_after_a_suspension() {
    let store = ShopStore::new();
    let due_day = date(2024, 7, 25);
    store
        .add_task(reminder_task("Missed while suspended", due_day))
        .unwrap();

    let notifier = InMemoryNotifier::granted();
    let scheduler = ReminderScheduler::new(store, notifier.clone());

    // First tick happens two days late; the reminder still fires, once.
    let late = scheduler.tick_at(at(date(2024, 7, 27), 14, 30, 0)).unwrap();
    assert_eq!(late.fired, 1);
    let later = scheduler.tick_at(at(date(2024, 7, 27), 14, 30, 30)).unwrap();
    assert_eq!(later.fired, 0);
    assert_eq!(notifier.delivered().len(), 1);
}

#[test]
fn denied_permission_skips_without_marking() {
    let store = ShopStore::new();
    let today = date(2024, 7, 25);
    store.add_task(reminder_task("Gated", today)).unwrap();

    let notifier = InMemoryNotifier::denied();
    let scheduler = ReminderScheduler::new(store.clone(), notifier.clone());

    let skipped = scheduler.tick_at(at(today, 9, 0, 1)).unwrap();
    assert!(skipped.skipped);
    assert_eq!(skipped.fired, 0);
    assert!(notifier.delivered().is_empty());
    assert!(!store.tasks().unwrap()[0].reminder_sent);

    // A later grant still delivers the reminder.
    notifier.set_permission(NotificationPermission::Granted);
    let granted = scheduler.tick_at(at(today, 9, 10, 0)).unwrap();
    assert_eq!(granted.fired, 1);
    assert!(store.tasks().unwrap()[0].reminder_sent);
}

#[test]
fn construction_requests_permission_once_when_undetermined() {
    let store = ShopStore::new();
    let notifier = InMemoryNotifier::undetermined(NotificationPermission::Granted);
    assert_eq!(notifier.permission(), NotificationPermission::Undetermined);

    let _scheduler = ReminderScheduler::new(store, notifier.clone());
    assert_eq!(notifier.permission(), NotificationPermission::Granted);
}

#[test]
fn failed_delivery_stays_armed_and_retries() {
    let store = ShopStore::new();
    let today = date(2024, 7, 25);
    store.add_task(reminder_task("Flaky channel", today)).unwrap();

    let notifier = InMemoryNotifier::granted();
    notifier.set_failing(true);
    let scheduler = ReminderScheduler::new(store.clone(), notifier.clone());

    let failed = scheduler.tick_at(at(today, 9, 0, 1)).unwrap();
    assert_eq!(failed.failed, 1);
    assert_eq!(failed.fired, 0);
    assert!(!store.tasks().unwrap()[0].reminder_sent);

    notifier.set_failing(false);
    let retried = scheduler.tick_at(at(today, 9, 0, 31)).unwrap();
    assert_eq!(retried.fired, 1);
    assert_eq!(notifier.delivered().len(), 1);
    assert!(store.tasks().unwrap()[0].reminder_sent);
}

#[test]
fn reminder_thread_fires_overdue_reminders_until_stopped() {
    let store = ShopStore::new();
    // Long overdue relative to the wall clock the thread ticks against.
    store
        .add_task(reminder_task("Overdue", date(2000, 1, 1)))
        .unwrap();

    let notifier = InMemoryNotifier::granted();
    let reminders = ReminderThread::spawn(
        store.clone(),
        notifier.clone(),
        Duration::from_millis(10),
    );
    std::thread::sleep(Duration::from_millis(100));
    let stats = reminders.stop();

    assert!(stats.polls >= 1);
    assert_eq!(stats.fired, 1);
    assert_eq!(notifier.delivered().len(), 1);
    assert!(store.tasks().unwrap()[0].reminder_sent);
}
