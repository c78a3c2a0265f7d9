//! Dashboard metrics - pure folds over the store's collections.
//!
//! Every metric is recomputed from scratch over the current records;
//! edits can change any record in place, so there is no incremental
//! tracking to drift out of sync. The folds are order-independent.

use serde::{Deserialize, Serialize};

use crate::domain::{BorrowRecord, Customer, Money, StockItem, Transaction, TransactionType};

/// Sum of all income transactions.
pub fn total_revenue(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == TransactionType::Income)
        .map(|t| t.amount)
        .sum()
}

/// Sum of all expense transactions.
pub fn total_expenses(transactions: &[Transaction]) -> Money {
    transactions
        .iter()
        .filter(|t| t.kind == TransactionType::Expense)
        .map(|t| t.amount)
        .sum()
}

/// Revenue minus expenses. Negative when the shop is running at a loss.
pub fn net_profit(transactions: &[Transaction]) -> Money {
    total_revenue(transactions) - total_expenses(transactions)
}

/// Value of all stock on hand at current prices.
pub fn total_stock_value(stock: &[StockItem]) -> Money {
    stock.iter().map(StockItem::stock_value).sum()
}

/// Outstanding balance across all borrow records, floored at zero per
/// record.
pub fn total_debt(borrows: &[BorrowRecord]) -> Money {
    borrows.iter().map(BorrowRecord::outstanding).sum()
}

/// Credit currently extended to customers.
pub fn total_credit_extended(customers: &[Customer]) -> Money {
    customers.iter().map(|c| c.credit_used).sum()
}

/// The six dashboard metrics, computed together from one snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopMetrics {
    pub total_revenue: Money,
    pub total_expenses: Money,
    pub net_profit: Money,
    pub total_stock_value: Money,
    pub total_debt: Money,
    pub total_credit_extended: Money,
}

impl ShopMetrics {
    /// Compute all six metrics from the given collections.
    pub fn compute(
        customers: &[Customer],
        stock: &[StockItem],
        transactions: &[Transaction],
        borrows: &[BorrowRecord],
    ) -> Self {
        let revenue = total_revenue(transactions);
        let expenses = total_expenses(transactions);
        ShopMetrics {
            total_revenue: revenue,
            total_expenses: expenses,
            net_profit: revenue - expenses,
            total_stock_value: total_stock_value(stock),
            total_debt: total_debt(borrows),
            total_credit_extended: total_credit_extended(customers),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(amount: Money, kind: TransactionType) -> Transaction {
        Transaction {
            id: 0,
            description: "entry".to_string(),
            amount,
            kind,
            date: NaiveDate::from_ymd_opt(2024, 7, 22).unwrap(),
        }
    }

    #[test]
    fn empty_collections_compute_to_zero() {
        assert_eq!(ShopMetrics::compute(&[], &[], &[], &[]), ShopMetrics::default());
    }

    #[test]
    fn revenue_and_expenses_split_by_kind() {
        let ledger = vec![
            entry(50_000, TransactionType::Income),
            entry(30_000, TransactionType::Expense),
            entry(450_000, TransactionType::Income),
        ];
        assert_eq!(total_revenue(&ledger), 500_000);
        assert_eq!(total_expenses(&ledger), 30_000);
        assert_eq!(net_profit(&ledger), 470_000);
    }

    #[test]
    fn net_profit_can_go_negative() {
        let ledger = vec![entry(10_000, TransactionType::Expense)];
        assert_eq!(net_profit(&ledger), -10_000);
    }
}
