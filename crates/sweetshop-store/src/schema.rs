//! Sweets table layout.

/// Table holding one row per sweet.
pub const SWEETS_TABLE: &str = "sweets";

/// Column list selected and returned by every sweet query, in `SweetRow`
/// field order.
pub const SWEET_COLUMNS: &str = "id, name, category, price, quantity";
