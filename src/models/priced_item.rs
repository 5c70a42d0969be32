use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::participant::Participant;

/// One line of a shared shopping list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PricedItem {
    pub name: String,
    pub price: Decimal,
    /// Who paid for the item, if anyone has yet.
    pub payer: Option<Participant>,
    /// Participants sharing the cost. Empty means the payer consumes the
    /// item themselves.
    pub cost_bearers: Vec<Participant>,
    pub is_purchased: bool,
}

impl PricedItem {
    /// Fresh item with no payer, no bearers (used for entries appended from
    /// a receipt merge).
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        PricedItem {
            name: name.into(),
            price,
            payer: None,
            cost_bearers: Vec::new(),
            is_purchased: false,
        }
    }
}
