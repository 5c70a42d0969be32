/// Minimum similarity score at which an OCR candidate is considered the
/// same product as an existing list item.
pub const SIMILARITY_THRESHOLD: f64 = 0.45;

/// Money is kept at two decimal places.
pub const BALANCE_SCALE: u32 = 2;

/// Placeholder written to the CSV export when a settlement has not been
/// paid out yet.
pub const CSV_UNSETTLED_SENTINEL: &str = "pending";

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Audit action names
pub const SETTLEMENTS_REGENERATED: &str = "settlements_regenerated";
pub const SETTLEMENT_MARKED_SETTLED: &str = "settlement_marked_settled";
pub const RECEIPT_MERGED: &str = "receipt_merged";
pub const LIST_ITEMS_REPLACED: &str = "list_items_replaced";
