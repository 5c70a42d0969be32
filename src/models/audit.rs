use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: Uuid,
    pub action: String,
    pub details: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(action: &str, details: serde_json::Value) -> Self {
        AuditEntry {
            id: Uuid::new_v4(),
            action: action.to_string(),
            details,
            timestamp: Utc::now(),
        }
    }
}
