use async_trait::async_trait;
use uuid::Uuid;

use crate::error::TallyError;
use crate::models::{PricedItem, Settlement, ShoppingList};

/// Persistence seam for lists, their items and their settlements.
///
/// `replace_settlements` and `replace_items` are wholesale delete-then-insert
/// operations and must be all-or-nothing. Implementations must also serialize
/// concurrent `replace_settlements` calls for the same list so two
/// regenerations cannot interleave and leave a doubled or emptied set.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn save_list(&self, list: ShoppingList) -> Result<(), TallyError>;
    async fn get_list(&self, list_id: i64) -> Result<Option<ShoppingList>, TallyError>;
    async fn set_list_fully_settled(
        &self,
        list_id: i64,
        fully_settled: bool,
    ) -> Result<(), TallyError>;

    async fn replace_items(
        &self,
        list_id: i64,
        items: Vec<PricedItem>,
    ) -> Result<(), TallyError>;
    async fn get_items(&self, list_id: i64) -> Result<Vec<PricedItem>, TallyError>;

    async fn replace_settlements(
        &self,
        list_id: i64,
        settlements: Vec<Settlement>,
    ) -> Result<(), TallyError>;
    async fn get_settlements(&self, list_id: i64) -> Result<Vec<Settlement>, TallyError>;
    async fn get_settlement(&self, id: Uuid) -> Result<Option<Settlement>, TallyError>;
    async fn save_settlement(&self, settlement: Settlement) -> Result<(), TallyError>;
}

pub mod in_memory;
