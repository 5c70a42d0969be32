pub mod audit;
pub mod participant;
pub mod priced_item;
pub mod receipt;
pub mod settlement;
pub mod shopping_list;

pub use audit::AuditEntry;
pub use participant::Participant;
pub use priced_item::PricedItem;
pub use receipt::OcrLineItem;
pub use settlement::{Settlement, SettlementDraft};
pub use shopping_list::ShoppingList;
