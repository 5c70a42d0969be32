use serde::{Deserialize, Serialize};

/// One line item as extracted from a receipt image by the OCR worker.
///
/// The price arrives as a raw string and must be parsed defensively; OCR
/// regularly garbles it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OcrLineItem {
    pub name: String,
    pub total_price: String,
}
