use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer order as it moves through the processing workflow.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Order {
    pub id: u32,
    pub customer_email: String,
    pub total_amount: Decimal,
    /// Set by the processor once an order has been fully handled. Input
    /// records may omit the column.
    #[serde(default)]
    pub is_processed: bool,
}

impl Order {
    pub fn new(id: u32, customer_email: impl Into<String>, total_amount: Decimal) -> Self {
        Self {
            id,
            customer_email: customer_email.into(),
            total_amount,
            is_processed: false,
        }
    }
}
