use serde::{Deserialize, Serialize};

use super::{Money, RecordId};

/// A shop customer and their credit standing.
///
/// `credit_used` is an explicitly edited figure. It is not derived from
/// transactions or borrow records, and nothing caps it at
/// `credit_limit`; flagging over-extended customers is a display
/// concern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: RecordId,
    pub name: String,
    pub phone: String,
    pub credit_limit: Money,
    pub credit_used: Money,
}

/// Input for creating a customer. New customers start with no credit
/// used.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub credit_limit: Money,
}
