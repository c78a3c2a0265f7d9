use serde::{Deserialize, Serialize};

use super::{Money, RecordId};

/// An item tracked in the shop's inventory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: Money,
    pub low_stock_threshold: u32,
}

impl StockItem {
    /// Whether the quantity has fallen to or below the configured
    /// threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.low_stock_threshold
    }

    /// Value of the remaining quantity at the current price.
    pub fn stock_value(&self) -> Money {
        Money::from(self.quantity) * self.price
    }
}

/// Input for creating a stock item.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewStockItem {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: Money,
    pub low_stock_threshold: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: u32, threshold: u32) -> StockItem {
        StockItem {
            id: 1,
            name: "Sugar".to_string(),
            category: "Groceries".to_string(),
            quantity,
            price: 5000,
            low_stock_threshold: threshold,
        }
    }

    #[test]
    fn low_stock_at_or_below_threshold() {
        assert!(!item(21, 20).is_low_stock());
        assert!(item(20, 20).is_low_stock());
        assert!(item(0, 20).is_low_stock());
    }

    #[test]
    fn stock_value_is_quantity_times_price() {
        assert_eq!(item(50, 20).stock_value(), 250_000);
    }
}
