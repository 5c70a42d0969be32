pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod fuzzy;
pub mod ledger;
pub mod logger;
pub mod merge;
pub mod models;
pub mod service;
pub mod settle;
pub mod storage;

pub use error::TallyError;
pub use logger::in_memory::InMemoryAuditLogger;
pub use service::TallyService;
pub use storage::in_memory::InMemoryStorage;

#[cfg(test)]
mod tests;
