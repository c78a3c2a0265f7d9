use serde::{Deserialize, Serialize};

use super::RecordId;

/// A boda-boda delivery driver on the shop's roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodaDriver {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    pub available: bool,
}

/// Input for adding a driver. New drivers start available.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewBodaDriver {
    pub name: String,
    pub phone: String,
}
