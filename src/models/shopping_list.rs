use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ShoppingList {
    pub id: i64,
    pub name: String,
    /// True iff the list has no unsettled settlement rows (vacuously true
    /// when it has none at all).
    pub is_fully_settled: bool,
    pub created_at: DateTime<Utc>,
}

impl ShoppingList {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        ShoppingList {
            id,
            name: name.into(),
            is_fully_settled: true,
            created_at: Utc::now(),
        }
    }
}
