//! Tracked inventory item.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use backstock_core::{ItemId, ProductId};

use crate::status::{StockStatus, classify};

/// One tracked product's authoritative stock state.
///
/// `current_stock` is owned by the ledger; the catalog's stock field is a
/// read-only mirror refreshed from ledger commits. Status is derived, never
/// stored: [`InventoryItem::status`] recomputes it on every observation, so
/// a stale label is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub product_id: ProductId,
    pub product_name: String,
    pub sku: String,
    /// Authoritative quantity. Unsigned: non-negativity is an invariant
    /// carried by the type.
    pub current_stock: u32,
    pub min_stock_threshold: u32,
    /// Suggested restock amount. Advisory only.
    pub reorder_quantity: u32,
    /// Timestamp of the most recent `restock`-typed transaction.
    pub last_restocked: Option<DateTime<Utc>>,
}

impl InventoryItem {
    pub fn status(&self) -> StockStatus {
        classify(self.current_stock, self.min_stock_threshold)
    }

    /// Apply a committed stock value, stamping `last_restocked` when the
    /// mutation was a restock.
    pub fn with_stock(mut self, new_stock: u32, restocked_at: Option<DateTime<Utc>>) -> Self {
        self.current_stock = new_stock;
        if let Some(at) = restocked_at {
            self.last_restocked = Some(at);
        }
        self
    }
}
