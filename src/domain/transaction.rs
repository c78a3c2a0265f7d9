use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Money, RecordId};

/// Direction of a ledger entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => write!(f, "Income"),
            TransactionType::Expense => write!(f, "Expense"),
        }
    }
}

/// A single ledger entry.
///
/// Transactions are append-only: once recorded there is no update
/// operation for them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: RecordId,
    pub description: String,
    pub amount: Money,
    pub kind: TransactionType,
    pub date: NaiveDate,
}

/// Input for recording a transaction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewTransaction {
    pub description: String,
    pub amount: Money,
    pub kind: TransactionType,
    pub date: NaiveDate,
}
