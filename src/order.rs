use rust_decimal::Decimal;
use serde::Deserialize;

/// One row of a batch input file.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PaymentOrder {
    pub invoice_id: u32,
    pub amount: Decimal,
    pub description: String,
    pub recurring: Option<bool>,
}
