use rust_decimal_macros::dec;

use crate::constants::SIMILARITY_THRESHOLD;
use crate::merge::{merge_receipt, MergeWarning};
use crate::models::{OcrLineItem, Participant, PricedItem};
use crate::tests::priced;

fn ocr(name: &str, total_price: &str) -> OcrLineItem {
    OcrLineItem {
        name: name.to_string(),
        total_price: total_price.to_string(),
    }
}

#[test]
fn fuzzy_match_adopts_ocr_price() {
    // "Bread" is contained in "Wheat bread" after normalization.
    let existing = vec![PricedItem::new("Bread", dec!(0.00))];
    let receipt = vec![ocr("Wheat bread", "3.49")];

    let outcome = merge_receipt(&existing, &receipt, SIMILARITY_THRESHOLD);
    assert_eq!(outcome.items.len(), 1);
    assert_eq!(outcome.items[0].name, "Bread");
    assert_eq!(outcome.items[0].price, dec!(3.49));
    assert!(outcome.warnings.is_empty());
}

#[test]
fn unmatched_candidate_with_price_is_appended() {
    let outcome = merge_receipt(&[], &[ocr("Milk", "2.50")], SIMILARITY_THRESHOLD);

    assert_eq!(outcome.items.len(), 1);
    assert_eq!(outcome.items[0].name, "Milk");
    assert_eq!(outcome.items[0].price, dec!(2.50));
    assert!(outcome.items[0].payer.is_none());
    assert!(outcome.items[0].cost_bearers.is_empty());
}

#[test]
fn noise_candidate_is_dropped_and_reported() {
    let existing = vec![PricedItem::new("Eggs", dec!(4.00))];
    let receipt = vec![ocr("Xk", "0.00")];

    let outcome = merge_receipt(&existing, &receipt, SIMILARITY_THRESHOLD);
    assert_eq!(outcome.items.len(), 1);
    assert_eq!(outcome.items[0].price, dec!(4.00));
    assert_eq!(
        outcome.warnings,
        vec![MergeWarning::DroppedCandidate {
            name: "Xk".to_string()
        }]
    );
}

#[test]
fn unparsable_price_defaults_to_zero_with_warning() {
    let existing = vec![PricedItem::new("Milk", dec!(1.99))];
    let receipt = vec![ocr("Milk", "2,50")];

    let outcome = merge_receipt(&existing, &receipt, SIMILARITY_THRESHOLD);
    // OCR recovered no usable price, so the existing one is kept.
    assert_eq!(outcome.items[0].price, dec!(1.99));
    assert_eq!(
        outcome.warnings,
        vec![MergeWarning::UnparsablePrice {
            name: "Milk".to_string(),
            raw: "2,50".to_string()
        }]
    );
}

#[test]
fn zero_ocr_price_does_not_clobber_existing_price() {
    let existing = vec![PricedItem::new("Butter", dec!(5.49))];
    let receipt = vec![ocr("Butter", "0.00")];

    let outcome = merge_receipt(&existing, &receipt, SIMILARITY_THRESHOLD);
    assert_eq!(outcome.items[0].price, dec!(5.49));
}

#[test]
fn zero_ocr_price_is_adopted_when_existing_is_zero() {
    let existing = vec![PricedItem::new("Butter", dec!(0.00))];
    let receipt = vec![ocr("Butter", "0.00")];

    let outcome = merge_receipt(&existing, &receipt, SIMILARITY_THRESHOLD);
    assert_eq!(outcome.items[0].price, dec!(0.00));
    assert_eq!(outcome.items.len(), 1);
}

#[test]
fn fully_matched_receipt_adds_no_items() {
    let existing = vec![
        PricedItem::new("Milk", dec!(0.00)),
        PricedItem::new("Bread", dec!(0.00)),
    ];
    let receipt = vec![ocr("Bread", "3.49"), ocr("Milk", "2.50")];

    let outcome = merge_receipt(&existing, &receipt, SIMILARITY_THRESHOLD);
    assert_eq!(outcome.items.len(), existing.len());
    assert_eq!(outcome.items[0].price, dec!(2.50));
    assert_eq!(outcome.items[1].price, dec!(3.49));
}

#[test]
fn matched_item_keeps_its_bookkeeping() {
    let alice = Participant::User(1);
    let bob = Participant::Friend(2);
    let existing = vec![priced("Cheese", dec!(0.00), Some(alice), &[bob])];
    let receipt = vec![ocr("Cheese", "7.35")];

    let outcome = merge_receipt(&existing, &receipt, SIMILARITY_THRESHOLD);
    assert_eq!(outcome.items[0].price, dec!(7.35));
    assert_eq!(outcome.items[0].payer, Some(alice));
    assert_eq!(outcome.items[0].cost_bearers, vec![bob]);
}

#[test]
fn each_candidate_matches_at_most_once() {
    // Two list entries resembling the same OCR line: only the first existing
    // item may consume it, the second keeps its own price.
    let existing = vec![
        PricedItem::new("Apple juice", dec!(0.00)),
        PricedItem::new("Apple juice 1L", dec!(2.00)),
    ];
    let receipt = vec![ocr("Apple juice", "3.19")];

    let outcome = merge_receipt(&existing, &receipt, SIMILARITY_THRESHOLD);
    assert_eq!(outcome.items.len(), 2);
    assert_eq!(outcome.items[0].price, dec!(3.19));
    assert_eq!(outcome.items[1].price, dec!(2.00));
}

#[test]
fn existing_order_is_preserved_and_new_items_follow() {
    let existing = vec![
        PricedItem::new("Bread", dec!(1.00)),
        PricedItem::new("Eggs", dec!(2.00)),
    ];
    let receipt = vec![ocr("Orange juice", "4.29"), ocr("Bread", "1.09")];

    let outcome = merge_receipt(&existing, &receipt, SIMILARITY_THRESHOLD);
    let names: Vec<&str> = outcome.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Bread", "Eggs", "Orange juice"]);
    assert_eq!(outcome.items[0].price, dec!(1.09));
}
