//! Sample records for demos and tests.

use chrono::{NaiveDate, NaiveTime};

use crate::domain::{
    NewBodaDriver, NewBorrowRecord, NewCustomer, NewStockItem, NewTask, NewTransaction,
    NewWholesaler, TaskStatus, TransactionType,
};
use crate::store::{ShopStore, StoreError};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time of day")
}

/// Build a store seeded with a small set of demo records.
pub fn sample_store() -> Result<ShopStore, StoreError> {
    let store = ShopStore::new();

    let mut alice = store.add_customer(NewCustomer {
        name: "Alice".to_string(),
        phone: "075-555-0101".to_string(),
        credit_limit: 200_000,
    })?;
    alice.credit_used = 150_000;
    store.update_customer(alice)?;

    let mut bob = store.add_customer(NewCustomer {
        name: "Bob".to_string(),
        phone: "078-555-0102".to_string(),
        credit_limit: 1_000_000,
    })?;
    bob.credit_used = 800_000;
    store.update_customer(bob)?;

    store.add_stock_item(NewStockItem {
        name: "Sugar".to_string(),
        category: "Groceries".to_string(),
        quantity: 50,
        price: 5000,
        low_stock_threshold: 20,
    })?;
    store.add_stock_item(NewStockItem {
        name: "Soap".to_string(),
        category: "Household".to_string(),
        quantity: 15,
        price: 3000,
        low_stock_threshold: 10,
    })?;
    store.add_stock_item(NewStockItem {
        name: "Bread".to_string(),
        category: "Bakery".to_string(),
        quantity: 30,
        price: 6000,
        low_stock_threshold: 15,
    })?;
    store.add_stock_item(NewStockItem {
        name: "Cooking Oil".to_string(),
        category: "Groceries".to_string(),
        quantity: 5,
        price: 8000,
        low_stock_threshold: 10,
    })?;

    store.add_transaction(NewTransaction {
        description: "Sale of Sugar".to_string(),
        amount: 50_000,
        kind: TransactionType::Income,
        date: date(2024, 7, 22),
    })?;
    store.add_transaction(NewTransaction {
        description: "Restock Soap".to_string(),
        amount: 30_000,
        kind: TransactionType::Expense,
        date: date(2024, 7, 21),
    })?;
    store.add_transaction(NewTransaction {
        description: "Daily Sales".to_string(),
        amount: 450_000,
        kind: TransactionType::Income,
        date: date(2024, 7, 22),
    })?;
    store.add_transaction(NewTransaction {
        description: "Rent".to_string(),
        amount: 200_000,
        kind: TransactionType::Expense,
        date: date(2024, 7, 1),
    })?;
    store.add_transaction(NewTransaction {
        description: "Utility Bill".to_string(),
        amount: 75_000,
        kind: TransactionType::Expense,
        date: date(2024, 7, 15),
    })?;

    let mut loan = store.add_borrow(NewBorrowRecord {
        lender: "Kampala General Supplies".to_string(),
        amount: 1_000_000,
        date: date(2024, 7, 10),
        due_date: date(2024, 8, 10),
    })?;
    loan.amount_paid = 250_000;
    store.update_borrow(loan)?;

    store.add_wholesaler(NewWholesaler {
        name: "Kampala General Supplies".to_string(),
        contact: "077-123-4567".to_string(),
        product_category: "Groceries".to_string(),
    })?;
    store.add_wholesaler(NewWholesaler {
        name: "Bakers Choice Ltd".to_string(),
        contact: "078-765-4321".to_string(),
        product_category: "Bakery".to_string(),
    })?;

    store.add_boda_driver(NewBodaDriver {
        name: "James".to_string(),
        phone: "075-111-2222".to_string(),
    })?;
    let mut peter = store.add_boda_driver(NewBodaDriver {
        name: "Peter".to_string(),
        phone: "079-333-4444".to_string(),
    })?;
    peter.available = false;
    store.update_boda_driver(peter)?;

    store.add_task(NewTask {
        title: "Call wholesaler for sugar restock".to_string(),
        due_date: date(2024, 7, 25),
        reminder_time: Some(time(9, 0)),
    })?;
    store.add_task(NewTask {
        title: "Follow up with Bob on credit".to_string(),
        due_date: date(2024, 7, 24),
        reminder_time: None,
    })?;
    let mut report = store.add_task(NewTask {
        title: "Monthly profit report".to_string(),
        due_date: date(2024, 7, 5),
        reminder_time: None,
    })?;
    report.status = TaskStatus::Completed;
    store.update_task(report)?;

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_store_metrics_add_up() {
        let store = sample_store().unwrap();
        let metrics = store.metrics().unwrap();

        assert_eq!(metrics.total_revenue, 500_000);
        assert_eq!(metrics.total_expenses, 305_000);
        assert_eq!(metrics.net_profit, 195_000);
        assert_eq!(metrics.total_debt, 750_000);
        assert_eq!(metrics.total_credit_extended, 950_000);
    }

    #[test]
    fn sample_store_has_a_low_stock_item() {
        let store = sample_store().unwrap();
        let low: Vec<_> = store
            .stock()
            .unwrap()
            .into_iter()
            .filter(|item| item.is_low_stock())
            .collect();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "Cooking Oil");
    }
}
