use serde::{Deserialize, Serialize};

/// The collection a change event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreCollection {
    Customers,
    Stock,
    Transactions,
    Borrows,
    Wholesalers,
    Drivers,
    Tasks,
}

/// Emitted after every successful mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub collection: StoreCollection,
    /// Store revision after the mutation. Strictly increasing.
    pub revision: u64,
}
