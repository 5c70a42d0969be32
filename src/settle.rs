use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use crate::models::{Participant, SettlementDraft};

/// Greedy minimal-transaction debt resolution.
///
/// Participants are split into debtors and creditors, both sorted by
/// descending magnitude with participant identity as the secondary key so
/// identical input always yields identical output. The front debtor and
/// front creditor are matched for `min` of their remainders until one side
/// runs dry; given balance conservation both sides empty together. Emits at
/// most `n - 1` drafts for `n` nonzero balances, which is not guaranteed to
/// be the true minimum over all pairings.
pub fn generate(balances: &HashMap<Participant, Decimal>) -> Vec<SettlementDraft> {
    let mut debtors: Vec<(Participant, Decimal)> = balances
        .iter()
        .filter(|(_, balance)| balance.is_sign_negative() && !balance.is_zero())
        .map(|(participant, balance)| (*participant, -*balance))
        .collect();
    let mut creditors: Vec<(Participant, Decimal)> = balances
        .iter()
        .filter(|(_, balance)| balance.is_sign_positive() && !balance.is_zero())
        .map(|(participant, balance)| (*participant, *balance))
        .collect();

    debtors.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    creditors.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let mut drafts = Vec::new();
    while !debtors.is_empty() && !creditors.is_empty() {
        let amount = debtors[0].1.min(creditors[0].1);

        drafts.push(SettlementDraft {
            debtor: debtors[0].0,
            creditor: creditors[0].0,
            amount,
        });

        debtors[0].1 -= amount;
        creditors[0].1 -= amount;

        if debtors[0].1.is_zero() {
            debtors.remove(0);
        }
        if creditors[0].1.is_zero() {
            creditors.remove(0);
        }
    }

    debug!("Generated {} settlement drafts", drafts.len());
    drafts
}
