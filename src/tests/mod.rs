mod merge_tests;

use rust_decimal::Decimal;

use crate::logger::in_memory::InMemoryAuditLogger;
use crate::models::{Participant, PricedItem};
use crate::service::TallyService;
use crate::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> TallyService<InMemoryStorage, InMemoryAuditLogger> {
    let storage = InMemoryStorage::new();
    let audit = InMemoryAuditLogger::new();
    TallyService::new(storage, audit)
}

pub fn priced(
    name: &str,
    price: Decimal,
    payer: Option<Participant>,
    bearers: &[Participant],
) -> PricedItem {
    PricedItem {
        name: name.to_string(),
        price,
        payer,
        cost_bearers: bearers.to_vec(),
        is_purchased: false,
    }
}
