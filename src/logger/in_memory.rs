use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::TallyError;
use crate::logger::AuditLogger;
use crate::models::AuditEntry;

pub struct InMemoryAuditLogger {
    logs: Mutex<Vec<AuditEntry>>,
}

impl InMemoryAuditLogger {
    pub fn new() -> Self {
        InMemoryAuditLogger {
            logs: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryAuditLogger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuditLogger for InMemoryAuditLogger {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
    ) -> Result<(), TallyError> {
        // For production: use a logging queue or batch writes
        self.logs.lock().await.push(AuditEntry::new(action, details));
        Ok(())
    }

    async fn get_logs(&self) -> Result<Vec<AuditEntry>, TallyError> {
        Ok(self.logs.lock().await.clone())
    }
}
