//! Record types held by the store.

mod borrow;
mod customer;
mod driver;
mod stock;
mod task;
mod transaction;
mod wholesaler;

pub use borrow::{BorrowRecord, BorrowStatus, NewBorrowRecord};
pub use customer::{Customer, NewCustomer};
pub use driver::{BodaDriver, NewBodaDriver};
pub use stock::{NewStockItem, StockItem};
pub use task::{NewTask, ReminderState, Task, TaskStatus};
pub use transaction::{NewTransaction, Transaction, TransactionType};
pub use wholesaler::{NewWholesaler, Wholesaler};

/// Record identifier assigned by the store. Monotonic, never reused.
pub type RecordId = u64;

/// Monetary amount in whole shillings.
pub type Money = i64;
