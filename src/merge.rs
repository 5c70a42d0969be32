use log::{debug, warn};
use rust_decimal::Decimal;

use crate::fuzzy::similarity;
use crate::models::{OcrLineItem, PricedItem};

/// Result of merging OCR receipt lines into an existing item list.
#[derive(Clone, Debug)]
pub struct MergeOutcome {
    /// Existing items in their original order, then newly appended items.
    pub items: Vec<PricedItem>,
    pub warnings: Vec<MergeWarning>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MergeWarning {
    /// OCR price string could not be parsed; 0.00 was substituted.
    UnparsablePrice { name: String, raw: String },
    /// Unmatched OCR candidate judged to be noise and dropped.
    DroppedCandidate { name: String },
}

struct Candidate {
    name: String,
    price: Decimal,
    matched: bool,
}

/// Merge OCR line items into an existing priced-item list.
///
/// Existing items are visited in their original order; each takes the
/// not-yet-matched candidate with the strictly highest similarity (the
/// candidate seen first wins ties), accepted when the score reaches
/// `threshold`. A match updates only the item's price; payer, bearer and
/// purchase bookkeeping stay untouched. Candidates left unmatched are
/// appended as new items when they pass the acceptance heuristic and
/// dropped otherwise.
pub fn merge_receipt(
    existing: &[PricedItem],
    ocr: &[OcrLineItem],
    threshold: f64,
) -> MergeOutcome {
    let mut warnings = Vec::new();

    let mut candidates: Vec<Candidate> = ocr
        .iter()
        .map(|line| {
            let price = match line.total_price.trim().parse::<Decimal>() {
                Ok(price) => price,
                Err(_) => {
                    warn!(
                        "Could not parse OCR price '{}' for '{}', using 0.00",
                        line.total_price, line.name
                    );
                    warnings.push(MergeWarning::UnparsablePrice {
                        name: line.name.clone(),
                        raw: line.total_price.clone(),
                    });
                    Decimal::ZERO
                }
            };
            Candidate {
                name: line.name.clone(),
                price,
                matched: false,
            }
        })
        .collect();

    let mut merged = Vec::with_capacity(existing.len() + candidates.len());

    for item in existing {
        let mut best_idx = None;
        let mut best_score = -1.0_f64;
        for (idx, candidate) in candidates.iter().enumerate() {
            if candidate.matched {
                continue;
            }
            let score = similarity(&item.name, &candidate.name);
            if score > best_score {
                best_score = score;
                best_idx = Some(idx);
            }
        }

        let mut kept = item.clone();
        if let Some(idx) = best_idx {
            if best_score >= threshold {
                let candidate = &mut candidates[idx];
                candidate.matched = true;
                // Adopt the OCR price unless OCR failed to recover one and
                // the list already holds a real price.
                if !candidate.price.is_zero() || kept.price.is_zero() {
                    kept.price = candidate.price;
                }
                debug!(
                    "Matched list item '{}' to OCR line '{}' (score {:.2})",
                    item.name, candidate.name, best_score
                );
            }
        }
        merged.push(kept);
    }

    for candidate in candidates.into_iter().filter(|c| !c.matched) {
        if is_plausible_item(&candidate) {
            merged.push(PricedItem::new(candidate.name, candidate.price));
        } else {
            debug!("Dropping OCR candidate '{}' as noise", candidate.name);
            warnings.push(MergeWarning::DroppedCandidate {
                name: candidate.name,
            });
        }
    }

    MergeOutcome {
        items: merged,
        warnings,
    }
}

/// A candidate worth keeping has a non-empty name plus either a real price,
/// more than one word, or at least four characters.
fn is_plausible_item(candidate: &Candidate) -> bool {
    !candidate.name.is_empty()
        && (!candidate.price.is_zero()
            || candidate.name.split_whitespace().count() > 1
            || candidate.name.chars().count() >= 4)
}
