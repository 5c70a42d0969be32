use chrono::Utc;
use log::{debug, info};
use serde_json::json;
use uuid::Uuid;

use crate::config::CONFIG;
use crate::constants::{
    LIST_ITEMS_REPLACED, RECEIPT_MERGED, SETTLEMENTS_REGENERATED, SETTLEMENT_MARKED_SETTLED,
};
use crate::error::TallyError;
use crate::export;
use crate::ledger::{self, LedgerWarning};
use crate::logger::AuditLogger;
use crate::merge::{self, MergeOutcome};
use crate::models::{OcrLineItem, PricedItem, Settlement, ShoppingList};
use crate::settle;
use crate::storage::Storage;

/// What a regeneration run produced: the persisted settlement rows and any
/// items the ledger had to skip.
#[derive(Clone, Debug)]
pub struct RegenerationReport {
    pub settlements: Vec<Settlement>,
    pub warnings: Vec<LedgerWarning>,
}

pub struct TallyService<S: Storage, L: AuditLogger> {
    storage: S,
    audit: L,
}

impl<S: Storage, L: AuditLogger> TallyService<S, L> {
    pub fn new(storage: S, audit: L) -> Self {
        info!("Initializing TallyService");
        Self { storage, audit }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn audit(&self) -> &L {
        &self.audit
    }

    async fn require_list(&self, list_id: i64) -> Result<ShoppingList, TallyError> {
        self.storage
            .get_list(list_id)
            .await?
            .ok_or(TallyError::ListNotFound(list_id))
    }

    /// Recompute balances for a list and replace its settlements wholesale.
    ///
    /// All prior settlement rows of the list are discarded and replaced by
    /// the newly computed batch in one storage operation, so rerunning on
    /// unchanged items is idempotent. A list with no items or no
    /// participants ends up with zero settlements and is marked fully
    /// settled.
    pub async fn recalculate_settlements(
        &self,
        list_id: i64,
    ) -> Result<RegenerationReport, TallyError> {
        info!("Recalculating settlements for list {}", list_id);
        self.require_list(list_id).await?;
        let items = self.storage.get_items(list_id).await?;

        let report = ledger::compute_balances(&items);
        let drafts = settle::generate(&report.balances);

        let now = Utc::now();
        let settlements: Vec<Settlement> = drafts
            .into_iter()
            .map(|draft| Settlement {
                id: Uuid::new_v4(),
                list_id,
                debtor: draft.debtor,
                creditor: draft.creditor,
                amount: draft.amount,
                is_settled: false,
                created_at: now,
                settled_at: None,
            })
            .collect();

        self.storage
            .replace_settlements(list_id, settlements.clone())
            .await?;
        self.refresh_list_status(list_id).await?;

        self.audit
            .log_action(
                SETTLEMENTS_REGENERATED,
                json!({ "list_id": list_id, "settlement_count": settlements.len() }),
            )
            .await?;

        Ok(RegenerationReport {
            settlements,
            warnings: report.warnings,
        })
    }

    /// Flip one settlement to settled. The transition is terminal.
    pub async fn mark_settled(&self, settlement_id: Uuid) -> Result<Settlement, TallyError> {
        let mut settlement = self
            .storage
            .get_settlement(settlement_id)
            .await?
            .ok_or(TallyError::SettlementNotFound(settlement_id))?;

        if settlement.is_settled {
            return Err(TallyError::SettlementAlreadySettled(settlement_id));
        }

        settlement.is_settled = true;
        settlement.settled_at = Some(Utc::now());
        self.storage.save_settlement(settlement.clone()).await?;
        self.refresh_list_status(settlement.list_id).await?;

        self.audit
            .log_action(
                SETTLEMENT_MARKED_SETTLED,
                json!({ "settlement_id": settlement.id, "list_id": settlement.list_id }),
            )
            .await?;

        Ok(settlement)
    }

    /// Merge OCR candidates into the list's items and persist the merged
    /// set as the list's new item set.
    pub async fn merge_receipt_into_list(
        &self,
        list_id: i64,
        ocr_items: &[OcrLineItem],
    ) -> Result<MergeOutcome, TallyError> {
        info!(
            "Merging {} OCR line items into list {}",
            ocr_items.len(),
            list_id
        );
        self.require_list(list_id).await?;
        let existing = self.storage.get_items(list_id).await?;

        let outcome = merge::merge_receipt(&existing, ocr_items, CONFIG.similarity_threshold);
        self.storage
            .replace_items(list_id, outcome.items.clone())
            .await?;

        self.audit
            .log_action(
                RECEIPT_MERGED,
                json!({
                    "list_id": list_id,
                    "item_count": outcome.items.len(),
                    "warning_count": outcome.warnings.len()
                }),
            )
            .await?;

        Ok(outcome)
    }

    /// Wholesale item replacement, used by the list editor.
    pub async fn replace_items(
        &self,
        list_id: i64,
        items: Vec<PricedItem>,
    ) -> Result<(), TallyError> {
        self.require_list(list_id).await?;
        let item_count = items.len();
        self.storage.replace_items(list_id, items).await?;

        self.audit
            .log_action(
                LIST_ITEMS_REPLACED,
                json!({ "list_id": list_id, "item_count": item_count }),
            )
            .await?;

        Ok(())
    }

    /// Export a list's settlement rows as semicolon-delimited CSV.
    pub async fn export_settlements_csv(&self, list_id: i64) -> Result<String, TallyError> {
        self.require_list(list_id).await?;
        let settlements = self.storage.get_settlements(list_id).await?;
        export::settlements_to_csv(&settlements)
    }

    /// A list is fully settled iff none of its settlement rows is pending;
    /// vacuously true when it has no rows at all.
    async fn refresh_list_status(&self, list_id: i64) -> Result<bool, TallyError> {
        let settlements = self.storage.get_settlements(list_id).await?;
        let fully_settled = settlements.iter().all(|s| s.is_settled);
        self.storage
            .set_list_fully_settled(list_id, fully_settled)
            .await?;
        debug!("List {} fully_settled = {}", list_id, fully_settled);
        Ok(fully_settled)
    }
}
