use async_trait::async_trait;

use crate::error::TallyError;
use crate::models::AuditEntry;

/// Application-level audit trail, separate from the `log` facade.
#[async_trait]
pub trait AuditLogger: Send + Sync {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
    ) -> Result<(), TallyError>;
    async fn get_logs(&self) -> Result<Vec<AuditEntry>, TallyError>;
}

pub mod in_memory;
