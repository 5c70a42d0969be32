use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::TallyError;
use crate::models::{PricedItem, Settlement, ShoppingList};
use crate::storage::Storage;

pub struct InMemoryStorage {
    lists: Mutex<HashMap<i64, ShoppingList>>,
    items: Mutex<HashMap<i64, Vec<PricedItem>>>,
    // list_id -> settlements in insertion order; one lock guards the whole
    // delete+insert of a regeneration, which serializes concurrent runs.
    settlements: Mutex<HashMap<i64, Vec<Settlement>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            lists: Mutex::new(HashMap::new()),
            items: Mutex::new(HashMap::new()),
            settlements: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_list(&self, list: ShoppingList) -> Result<(), TallyError> {
        self.lists.lock().await.insert(list.id, list);
        Ok(())
    }

    async fn get_list(&self, list_id: i64) -> Result<Option<ShoppingList>, TallyError> {
        Ok(self.lists.lock().await.get(&list_id).cloned())
    }

    async fn set_list_fully_settled(
        &self,
        list_id: i64,
        fully_settled: bool,
    ) -> Result<(), TallyError> {
        let mut lists = self.lists.lock().await;
        let list = lists
            .get_mut(&list_id)
            .ok_or(TallyError::ListNotFound(list_id))?;
        list.is_fully_settled = fully_settled;
        Ok(())
    }

    async fn replace_items(
        &self,
        list_id: i64,
        items: Vec<PricedItem>,
    ) -> Result<(), TallyError> {
        self.items.lock().await.insert(list_id, items);
        Ok(())
    }

    async fn get_items(&self, list_id: i64) -> Result<Vec<PricedItem>, TallyError> {
        Ok(self
            .items
            .lock()
            .await
            .get(&list_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn replace_settlements(
        &self,
        list_id: i64,
        settlements: Vec<Settlement>,
    ) -> Result<(), TallyError> {
        // For production: run delete+insert inside a database transaction
        self.settlements.lock().await.insert(list_id, settlements);
        Ok(())
    }

    async fn get_settlements(&self, list_id: i64) -> Result<Vec<Settlement>, TallyError> {
        Ok(self
            .settlements
            .lock()
            .await
            .get(&list_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_settlement(&self, id: Uuid) -> Result<Option<Settlement>, TallyError> {
        Ok(self
            .settlements
            .lock()
            .await
            .values()
            .flatten()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn save_settlement(&self, settlement: Settlement) -> Result<(), TallyError> {
        let mut settlements = self.settlements.lock().await;
        let rows = settlements
            .get_mut(&settlement.list_id)
            .ok_or(TallyError::SettlementNotFound(settlement.id))?;
        let row = rows
            .iter_mut()
            .find(|s| s.id == settlement.id)
            .ok_or(TallyError::SettlementNotFound(settlement.id))?;
        *row = settlement;
        Ok(())
    }
}
