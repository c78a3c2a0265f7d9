use serde::{Deserialize, Serialize};

use super::RecordId;

/// A supplier the shop restocks from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wholesaler {
    pub id: RecordId,
    pub name: String,
    pub contact: String,
    pub product_category: String,
}

/// Input for creating a wholesaler.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewWholesaler {
    pub name: String,
    pub contact: String,
    pub product_category: String,
}
