use std::collections::HashMap;

use log::{debug, warn};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::BALANCE_SCALE;
use crate::models::{Participant, PricedItem};

/// Outcome of a balance computation: signed balance per participant
/// (positive = owed money, negative = owes money) plus items that could not
/// be attributed to anyone.
#[derive(Clone, Debug, Default)]
pub struct BalanceReport {
    pub balances: HashMap<Participant, Decimal>,
    pub warnings: Vec<LedgerWarning>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerWarning {
    /// Item has neither a payer nor cost bearers; it was skipped and does
    /// not affect any balance.
    UnsettleableItem { name: String },
}

/// Compute signed balances for a set of priced items.
///
/// Each payer is credited the full item price; the price is then debited in
/// equal shares from the cost bearers, or from the payer itself when no
/// bearers are assigned (netting the item out). Shares use exact decimal
/// division with no remainder redistribution, so the final rounded balances
/// can drift by up to one cent against the item total.
pub fn compute_balances(items: &[PricedItem]) -> BalanceReport {
    let mut balances: HashMap<Participant, Decimal> = HashMap::new();
    let mut warnings = Vec::new();

    for item in items {
        if let Some(payer) = item.payer {
            *balances.entry(payer).or_insert(Decimal::ZERO) += item.price;
        }
    }

    for item in items {
        if !item.cost_bearers.is_empty() {
            let share = item.price / Decimal::from(item.cost_bearers.len() as u64);
            for bearer in &item.cost_bearers {
                *balances.entry(*bearer).or_insert(Decimal::ZERO) -= share;
            }
        } else if let Some(payer) = item.payer {
            *balances.entry(payer).or_insert(Decimal::ZERO) -= item.price;
        } else {
            warn!(
                "Item '{}' has no payer and no cost bearers, skipping",
                item.name
            );
            warnings.push(LedgerWarning::UnsettleableItem {
                name: item.name.clone(),
            });
        }
    }

    let balances: HashMap<Participant, Decimal> = balances
        .into_iter()
        .map(|(participant, balance)| {
            (
                participant,
                balance.round_dp_with_strategy(BALANCE_SCALE, RoundingStrategy::MidpointAwayFromZero),
            )
        })
        .filter(|(_, balance)| !balance.is_zero())
        .collect();

    debug!("Balances calculated: {:?}", balances);
    BalanceReport { balances, warnings }
}
