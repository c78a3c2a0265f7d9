//! The authoritative in-memory store for all shop records.
//!
//! `ShopStore` exclusively owns the seven collections. Consumers hold
//! clone-cheap handles to the same shared state, read through cloned
//! snapshots, and mutate through the operations here; derived fields
//! (borrow status, the task reminder flag) are recomputed at the
//! mutation boundary so no caller can store an inconsistent record.
//!
//! With the default `emitter` feature, every successful mutation also
//! emits a [`ChangeEvent`] to listeners registered via
//! [`ShopStore::on_change`].
//!
//! ## Example
//!
//! ```ignore
//! use duka_core::{NewStockItem, ShopStore};
//!
//! let store = ShopStore::new();
//! let sugar = store.add_stock_item(NewStockItem {
//!     name: "Sugar".into(),
//!     category: "Groceries".into(),
//!     quantity: 50,
//!     price: 5000,
//!     low_stock_threshold: 20,
//! })?;
//!
//! assert!(!sugar.is_low_stock());
//! assert_eq!(store.metrics()?.total_stock_value, 250_000);
//! ```

mod error;
mod event;

pub use error::StoreError;
pub use event::{ChangeEvent, StoreCollection};

#[cfg(feature = "emitter")]
use std::sync::Mutex;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[cfg(feature = "emitter")]
use event_emitter_rs::EventEmitter;

use crate::domain::{
    BodaDriver, BorrowRecord, BorrowStatus, Customer, NewBodaDriver, NewBorrowRecord, NewCustomer,
    NewStockItem, NewTask, NewTransaction, NewWholesaler, RecordId, StockItem, Task, TaskStatus,
    Transaction, Wholesaler,
};
use crate::metrics::ShopMetrics;

#[cfg(feature = "emitter")]
const CHANGE_EVENT: &str = "store.changed";

#[derive(Debug, Default)]
struct ShopState {
    next_id: RecordId,
    revision: u64,
    customers: Vec<Customer>,
    stock: Vec<StockItem>,
    transactions: Vec<Transaction>,
    borrows: Vec<BorrowRecord>,
    wholesalers: Vec<Wholesaler>,
    drivers: Vec<BodaDriver>,
    tasks: Vec<Task>,
}

impl ShopState {
    fn fresh_id(&mut self) -> RecordId {
        self.next_id += 1;
        self.next_id
    }

    fn bump(&mut self) -> u64 {
        self.revision += 1;
        self.revision
    }
}

struct MetricsCache {
    revision: u64,
    metrics: ShopMetrics,
}

/// Handle to the shared shop state.
///
/// Cloning creates another handle to the same storage (thread-safe via
/// `Arc<RwLock<...>>`), so a view layer, the reminder thread, and
/// tests can all hold the one store.
#[derive(Clone)]
pub struct ShopStore {
    state: Arc<RwLock<ShopState>>,
    metrics: Arc<RwLock<Option<MetricsCache>>>,
    #[cfg(feature = "emitter")]
    emitter: Arc<Mutex<EventEmitter>>,
}

impl Default for ShopStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShopStore {
    /// Create an empty store.
    pub fn new() -> Self {
        ShopStore {
            state: Arc::new(RwLock::new(ShopState::default())),
            metrics: Arc::new(RwLock::new(None)),
            #[cfg(feature = "emitter")]
            emitter: Arc::new(Mutex::new(EventEmitter::new())),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, ShopState>, StoreError> {
        self.state.read().map_err(|_| StoreError::LockPoisoned("read"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, ShopState>, StoreError> {
        self.state
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))
    }

    /// Add a customer. Returns the stored record with its assigned id.
    pub fn add_customer(&self, new: NewCustomer) -> Result<Customer, StoreError> {
        let (record, revision) = {
            let mut state = self.write()?;
            let record = Customer {
                id: state.fresh_id(),
                name: new.name,
                phone: new.phone,
                credit_limit: new.credit_limit,
                credit_used: 0,
            };
            state.customers.push(record.clone());
            let revision = state.bump();
            (record, revision)
        };
        self.emit_change(StoreCollection::Customers, revision)?;
        Ok(record)
    }

    /// Replace the customer with the same id. No-op if it is missing.
    pub fn update_customer(&self, record: Customer) -> Result<(), StoreError> {
        let revision = {
            let mut state = self.write()?;
            match state.customers.iter_mut().find(|c| c.id == record.id) {
                Some(slot) => *slot = record,
                None => return Ok(()),
            }
            state.bump()
        };
        self.emit_change(StoreCollection::Customers, revision)
    }

    /// Add a stock item. Returns the stored record with its assigned id.
    pub fn add_stock_item(&self, new: NewStockItem) -> Result<StockItem, StoreError> {
        let (record, revision) = {
            let mut state = self.write()?;
            let record = StockItem {
                id: state.fresh_id(),
                name: new.name,
                category: new.category,
                quantity: new.quantity,
                price: new.price,
                low_stock_threshold: new.low_stock_threshold,
            };
            state.stock.push(record.clone());
            let revision = state.bump();
            (record, revision)
        };
        self.emit_change(StoreCollection::Stock, revision)?;
        Ok(record)
    }

    /// Replace the stock item with the same id. No-op if it is missing.
    pub fn update_stock_item(&self, record: StockItem) -> Result<(), StoreError> {
        let revision = {
            let mut state = self.write()?;
            match state.stock.iter_mut().find(|s| s.id == record.id) {
                Some(slot) => *slot = record,
                None => return Ok(()),
            }
            state.bump()
        };
        self.emit_change(StoreCollection::Stock, revision)
    }

    /// Remove a stock item by id. No-op if it is missing. Its id is
    /// never handed out again.
    pub fn delete_stock_item(&self, id: RecordId) -> Result<(), StoreError> {
        let revision = {
            let mut state = self.write()?;
            let before = state.stock.len();
            state.stock.retain(|item| item.id != id);
            if state.stock.len() == before {
                return Ok(());
            }
            state.bump()
        };
        self.emit_change(StoreCollection::Stock, revision)
    }

    /// Record a ledger entry. Transactions are append-only; there is no
    /// update operation.
    pub fn add_transaction(&self, new: NewTransaction) -> Result<Transaction, StoreError> {
        let (record, revision) = {
            let mut state = self.write()?;
            let record = Transaction {
                id: state.fresh_id(),
                description: new.description,
                amount: new.amount,
                kind: new.kind,
                date: new.date,
            };
            state.transactions.push(record.clone());
            let revision = state.bump();
            (record, revision)
        };
        self.emit_change(StoreCollection::Transactions, revision)?;
        Ok(record)
    }

    /// Add a borrow record. Starts unpaid with nothing repaid.
    pub fn add_borrow(&self, new: NewBorrowRecord) -> Result<BorrowRecord, StoreError> {
        let (record, revision) = {
            let mut state = self.write()?;
            let record = BorrowRecord {
                id: state.fresh_id(),
                lender: new.lender,
                amount: new.amount,
                amount_paid: 0,
                date: new.date,
                due_date: new.due_date,
                status: BorrowStatus::Unpaid,
            };
            state.borrows.push(record.clone());
            let revision = state.bump();
            (record, revision)
        };
        self.emit_change(StoreCollection::Borrows, revision)?;
        Ok(record)
    }

    /// Replace the borrow record with the same id, recomputing its
    /// status from the amounts. Whatever status the caller supplied is
    /// ignored. No-op if the record is missing.
    pub fn update_borrow(&self, mut record: BorrowRecord) -> Result<(), StoreError> {
        record.status = BorrowStatus::for_amounts(record.amount, record.amount_paid);
        let revision = {
            let mut state = self.write()?;
            match state.borrows.iter_mut().find(|b| b.id == record.id) {
                Some(slot) => *slot = record,
                None => return Ok(()),
            }
            state.bump()
        };
        self.emit_change(StoreCollection::Borrows, revision)
    }

    /// Add a wholesaler. Returns the stored record with its assigned id.
    pub fn add_wholesaler(&self, new: NewWholesaler) -> Result<Wholesaler, StoreError> {
        let (record, revision) = {
            let mut state = self.write()?;
            let record = Wholesaler {
                id: state.fresh_id(),
                name: new.name,
                contact: new.contact,
                product_category: new.product_category,
            };
            state.wholesalers.push(record.clone());
            let revision = state.bump();
            (record, revision)
        };
        self.emit_change(StoreCollection::Wholesalers, revision)?;
        Ok(record)
    }

    /// Replace the wholesaler with the same id. No-op if it is missing.
    pub fn update_wholesaler(&self, record: Wholesaler) -> Result<(), StoreError> {
        let revision = {
            let mut state = self.write()?;
            match state.wholesalers.iter_mut().find(|w| w.id == record.id) {
                Some(slot) => *slot = record,
                None => return Ok(()),
            }
            state.bump()
        };
        self.emit_change(StoreCollection::Wholesalers, revision)
    }

    /// Add a driver. New drivers start available.
    pub fn add_boda_driver(&self, new: NewBodaDriver) -> Result<BodaDriver, StoreError> {
        let (record, revision) = {
            let mut state = self.write()?;
            let record = BodaDriver {
                id: state.fresh_id(),
                name: new.name,
                phone: new.phone,
                available: true,
            };
            state.drivers.push(record.clone());
            let revision = state.bump();
            (record, revision)
        };
        self.emit_change(StoreCollection::Drivers, revision)?;
        Ok(record)
    }

    /// Replace the driver with the same id. No-op if it is missing.
    pub fn update_boda_driver(&self, record: BodaDriver) -> Result<(), StoreError> {
        let revision = {
            let mut state = self.write()?;
            match state.drivers.iter_mut().find(|d| d.id == record.id) {
                Some(slot) => *slot = record,
                None => return Ok(()),
            }
            state.bump()
        };
        self.emit_change(StoreCollection::Drivers, revision)
    }

    /// Add a task. New tasks start pending with the reminder unsent.
    pub fn add_task(&self, new: NewTask) -> Result<Task, StoreError> {
        let (record, revision) = {
            let mut state = self.write()?;
            let record = Task {
                id: state.fresh_id(),
                title: new.title,
                due_date: new.due_date,
                status: TaskStatus::Pending,
                reminder_time: new.reminder_time,
                reminder_sent: false,
            };
            state.tasks.push(record.clone());
            let revision = state.bump();
            (record, revision)
        };
        self.emit_change(StoreCollection::Tasks, revision)?;
        Ok(record)
    }

    /// Replace the task with the same id. No-op if it is missing.
    ///
    /// The stored `reminder_sent` flag is carried over: it belongs to
    /// the scheduler, so callers can neither set it nor revert it.
    pub fn update_task(&self, mut record: Task) -> Result<(), StoreError> {
        let revision = {
            let mut state = self.write()?;
            match state.tasks.iter_mut().find(|t| t.id == record.id) {
                Some(slot) => {
                    record.reminder_sent = slot.reminder_sent;
                    *slot = record;
                }
                None => return Ok(()),
            }
            state.bump()
        };
        self.emit_change(StoreCollection::Tasks, revision)
    }

    /// Mark a task's one-shot reminder as delivered. No-op if the task
    /// is missing or already marked.
    pub fn mark_reminder_sent(&self, id: RecordId) -> Result<(), StoreError> {
        let revision = {
            let mut state = self.write()?;
            match state.tasks.iter_mut().find(|t| t.id == id) {
                Some(task) if !task.reminder_sent => task.reminder_sent = true,
                _ => return Ok(()),
            }
            state.bump()
        };
        self.emit_change(StoreCollection::Tasks, revision)
    }

    /// Snapshot of the customers, in insertion order.
    pub fn customers(&self) -> Result<Vec<Customer>, StoreError> {
        Ok(self.read()?.customers.clone())
    }

    /// Snapshot of the stock items, in insertion order.
    pub fn stock(&self) -> Result<Vec<StockItem>, StoreError> {
        Ok(self.read()?.stock.clone())
    }

    /// Snapshot of the ledger, in insertion order.
    pub fn transactions(&self) -> Result<Vec<Transaction>, StoreError> {
        Ok(self.read()?.transactions.clone())
    }

    /// Snapshot of the borrow records, in insertion order.
    pub fn borrows(&self) -> Result<Vec<BorrowRecord>, StoreError> {
        Ok(self.read()?.borrows.clone())
    }

    /// Snapshot of the wholesalers, in insertion order.
    pub fn wholesalers(&self) -> Result<Vec<Wholesaler>, StoreError> {
        Ok(self.read()?.wholesalers.clone())
    }

    /// Snapshot of the driver roster, in insertion order.
    pub fn boda_drivers(&self) -> Result<Vec<BodaDriver>, StoreError> {
        Ok(self.read()?.drivers.clone())
    }

    /// Snapshot of the tasks, in insertion order.
    pub fn tasks(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.read()?.tasks.clone())
    }

    /// Current store revision. Bumped by every successful mutation.
    pub fn revision(&self) -> Result<u64, StoreError> {
        Ok(self.read()?.revision)
    }

    /// Current dashboard metrics.
    ///
    /// Recomputed from scratch whenever the store has changed since the
    /// last call; otherwise served from the memoized value. Edits can
    /// change any record in place, so there is deliberately no
    /// incremental tracking.
    pub fn metrics(&self) -> Result<ShopMetrics, StoreError> {
        let state = self.read()?;
        {
            let cache = self
                .metrics
                .read()
                .map_err(|_| StoreError::LockPoisoned("metrics read"))?;
            if let Some(cached) = cache.as_ref() {
                if cached.revision == state.revision {
                    return Ok(cached.metrics);
                }
            }
        }

        let computed = ShopMetrics::compute(
            &state.customers,
            &state.stock,
            &state.transactions,
            &state.borrows,
        );
        let mut cache = self
            .metrics
            .write()
            .map_err(|_| StoreError::LockPoisoned("metrics write"))?;
        *cache = Some(MetricsCache {
            revision: state.revision,
            metrics: computed,
        });
        Ok(computed)
    }
}

#[cfg(feature = "emitter")]
impl ShopStore {
    /// Register a listener invoked after every successful mutation.
    /// Returns the listener id.
    ///
    /// Listeners run synchronously on the mutating call and must not
    /// mutate the store from inside the callback.
    pub fn on_change<F>(&self, listener: F) -> Result<String, StoreError>
    where
        F: Fn(ChangeEvent) + Send + Sync + 'static,
    {
        let mut emitter = self
            .emitter
            .lock()
            .map_err(|_| StoreError::LockPoisoned("emitter"))?;
        Ok(emitter.on(CHANGE_EVENT, listener))
    }

    /// Remove a listener registered with [`ShopStore::on_change`].
    pub fn remove_listener(&self, listener_id: &str) -> Result<(), StoreError> {
        let mut emitter = self
            .emitter
            .lock()
            .map_err(|_| StoreError::LockPoisoned("emitter"))?;
        let _ = emitter.remove_listener(listener_id);
        Ok(())
    }

    fn emit_change(&self, collection: StoreCollection, revision: u64) -> Result<(), StoreError> {
        let mut emitter = self
            .emitter
            .lock()
            .map_err(|_| StoreError::LockPoisoned("emitter"))?;
        emitter.emit(
            CHANGE_EVENT,
            ChangeEvent {
                collection,
                revision,
            },
        );
        Ok(())
    }
}

#[cfg(not(feature = "emitter"))]
impl ShopStore {
    fn emit_change(&self, _collection: StoreCollection, _revision: u64) -> Result<(), StoreError> {
        Ok(())
    }
}
