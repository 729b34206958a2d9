//! Low-stock alert ranking.

use serde::{Deserialize, Serialize};

use backstock_core::{ItemId, LedgerResult};
use backstock_inventory::StockStatus;
use backstock_ledger::StockSnapshot;

/// One alert row: exactly what the notification surface consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockAlert {
    pub item_id: ItemId,
    pub product_name: String,
    pub current_stock: u32,
}

/// Derives a bounded, ranked list of items running low, from the ledger's
/// current snapshot. Pure read; no mutation.
pub struct LowStockMonitor<S> {
    snapshot: S,
}

impl<S> LowStockMonitor<S>
where
    S: StockSnapshot,
{
    pub fn new(snapshot: S) -> Self {
        Self { snapshot }
    }

    /// At most `limit` items with `current_stock < threshold`, most urgent
    /// (lowest stock) first, ties broken by item id for determinism.
    pub fn rank(&self, threshold: u32, limit: usize) -> LedgerResult<Vec<LowStockAlert>> {
        let mut alerts: Vec<LowStockAlert> = self
            .snapshot
            .items()?
            .into_iter()
            .filter(|item| item.current_stock < threshold)
            .map(|item| LowStockAlert {
                item_id: item.id,
                product_name: item.product_name,
                current_stock: item.current_stock,
            })
            .collect();
        alerts.sort_by(|a, b| {
            a.current_stock
                .cmp(&b.current_stock)
                .then_with(|| a.item_id.cmp(&b.item_id))
        });
        alerts.truncate(limit);
        Ok(alerts)
    }

    /// The per-item variant the back-office alert screen uses: items whose
    /// derived status is low or out of stock against their own thresholds.
    pub fn below_own_threshold(&self, limit: usize) -> LedgerResult<Vec<LowStockAlert>> {
        let mut alerts: Vec<LowStockAlert> = self
            .snapshot
            .items()?
            .into_iter()
            .filter(|item| item.status() != StockStatus::InStock)
            .map(|item| LowStockAlert {
                item_id: item.id,
                product_name: item.product_name,
                current_stock: item.current_stock,
            })
            .collect();
        alerts.sort_by(|a, b| {
            a.current_stock
                .cmp(&b.current_stock)
                .then_with(|| a.item_id.cmp(&b.item_id))
        });
        alerts.truncate(limit);
        Ok(alerts)
    }
}
