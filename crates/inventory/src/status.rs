//! Stock status classification.

use serde::{Deserialize, Serialize};

/// Derived stock status label.
///
/// Never persisted as an independently mutable field; always recomputed
/// from the current stock value and the item's minimum threshold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in-stock",
            StockStatus::LowStock => "low-stock",
            StockStatus::OutOfStock => "out-of-stock",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a stock quantity against a minimum threshold.
///
/// Pure and total. Quantities are unsigned, so the "negative inputs are a
/// programming error" clause holds at the type level.
pub fn classify(current_stock: u32, min_stock_threshold: u32) -> StockStatus {
    if current_stock == 0 {
        StockStatus::OutOfStock
    } else if current_stock < min_stock_threshold {
        StockStatus::LowStock
    } else {
        StockStatus::InStock
    }
}
