use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Money, RecordId};

/// Repayment state of a borrow record, derived from its amounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorrowStatus {
    Unpaid,
    #[serde(rename = "Partially Paid")]
    PartiallyPaid,
    Paid,
}

impl BorrowStatus {
    /// Status for a given principal and the amount repaid so far.
    pub fn for_amounts(amount: Money, amount_paid: Money) -> Self {
        if amount_paid >= amount {
            BorrowStatus::Paid
        } else if amount_paid > 0 {
            BorrowStatus::PartiallyPaid
        } else {
            BorrowStatus::Unpaid
        }
    }
}

impl fmt::Display for BorrowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BorrowStatus::Unpaid => write!(f, "Unpaid"),
            BorrowStatus::PartiallyPaid => write!(f, "Partially Paid"),
            BorrowStatus::Paid => write!(f, "Paid"),
        }
    }
}

/// Money borrowed from a lender and its repayment progress.
///
/// `status` is never set by callers; the store recomputes it from
/// `amount` and `amount_paid` on every update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowRecord {
    pub id: RecordId,
    pub lender: String,
    pub amount: Money,
    pub amount_paid: Money,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: BorrowStatus,
}

impl BorrowRecord {
    /// Amount still owed, floored at zero.
    pub fn outstanding(&self) -> Money {
        (self.amount - self.amount_paid).max(0)
    }
}

/// Input for creating a borrow record. New records start unpaid.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewBorrowRecord {
    pub lender: String,
    pub amount: Money,
    pub date: NaiveDate,
    pub due_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_amounts() {
        assert_eq!(BorrowStatus::for_amounts(1000, 0), BorrowStatus::Unpaid);
        assert_eq!(
            BorrowStatus::for_amounts(1000, 1),
            BorrowStatus::PartiallyPaid
        );
        assert_eq!(
            BorrowStatus::for_amounts(1000, 999),
            BorrowStatus::PartiallyPaid
        );
        assert_eq!(BorrowStatus::for_amounts(1000, 1000), BorrowStatus::Paid);
        assert_eq!(BorrowStatus::for_amounts(1000, 1500), BorrowStatus::Paid);
    }

    #[test]
    fn outstanding_floors_at_zero() {
        let record = BorrowRecord {
            id: 1,
            lender: "lender".to_string(),
            amount: 1000,
            amount_paid: 1500,
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
            status: BorrowStatus::Paid,
        };
        assert_eq!(record.outstanding(), 0);
    }

    #[test]
    fn partially_paid_serializes_with_space() {
        let json = serde_json::to_string(&BorrowStatus::PartiallyPaid).unwrap();
        assert_eq!(json, "\"Partially Paid\"");
    }
}
