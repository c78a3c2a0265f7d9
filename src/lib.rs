mod domain;
mod metrics;
mod reminder;
mod sample;
mod settings;
mod store;

pub use domain::{
    BodaDriver, BorrowRecord, BorrowStatus, Customer, Money, NewBodaDriver, NewBorrowRecord,
    NewCustomer, NewStockItem, NewTask, NewTransaction, NewWholesaler, RecordId, ReminderState,
    StockItem, Task, TaskStatus, Transaction, TransactionType, Wholesaler,
};
pub use metrics::{
    net_profit, total_credit_extended, total_debt, total_expenses, total_revenue,
    total_stock_value, ShopMetrics,
};
pub use reminder::{
    InMemoryNotifier, NotificationPermission, Notifier, NotifyError, ReminderScheduler,
    ReminderStats, ReminderThread, TickResult, DEFAULT_POLL_INTERVAL, REMINDER_TITLE,
};
pub use sample::sample_store;
pub use settings::{InMemorySettings, JsonFileSettings, SettingsError, SettingsStore, ShopSettings};
pub use store::{ChangeEvent, ShopStore, StoreCollection, StoreError};
