use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::participant::Participant;

/// A proposed payment from a debtor to a creditor. Created in batches when
/// a list's settlements are regenerated; the only mutation ever applied is
/// the one-way flip to settled.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settlement {
    pub id: Uuid,
    pub list_id: i64,
    pub debtor: Participant,
    pub creditor: Participant,
    pub amount: Decimal,
    pub is_settled: bool,
    pub created_at: DateTime<Utc>,
    pub settled_at: Option<DateTime<Utc>>,
}

/// Generator output before the caller attaches id, list and timestamps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementDraft {
    pub debtor: Participant,
    pub creditor: Participant,
    pub amount: Decimal,
}
