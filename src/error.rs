use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Serialize)]
pub enum TallyError {
    /// Shopping list with given ID not found
    #[error("Shopping list {0} not found")]
    ListNotFound(i64),

    /// Settlement with given ID not found
    #[error("Settlement {0} not found")]
    SettlementNotFound(Uuid),

    /// Settlement has already been marked as settled; the transition is terminal
    #[error("Settlement {0} already settled")]
    SettlementAlreadySettled(Uuid),

    /// Persistence operation failed
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Audit logging failed
    #[error("Logging error: {0}")]
    LoggingError(String),

    /// CSV export could not be produced
    #[error("Export error: {0}")]
    ExportError(String),
}
