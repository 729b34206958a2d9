//! Ledger policy configuration.

use serde::{Deserialize, Serialize};

/// Policy defaults applied when the catalog supplies no per-item values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// `min_stock_threshold` for newly tracked items.
    pub default_min_stock_threshold: u32,
    /// `reorder_quantity` for newly tracked items (advisory).
    pub default_reorder_quantity: u32,
    /// Default cap on the low-stock alert list.
    pub low_stock_alert_limit: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            default_min_stock_threshold: 10,
            default_reorder_quantity: 20,
            low_stock_alert_limit: 5,
        }
    }
}
