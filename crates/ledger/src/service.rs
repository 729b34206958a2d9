//! Stock ledger application service.
//!
//! Orchestrates one adjustment end to end: load the versioned item, run the
//! pure adjustment engine, commit the new stock value together with its
//! transaction record as one atomic unit, then refresh the catalog mirror.
//! Validation failures never reach the commit boundary. A stale read
//! surfaces as `ConcurrencyConflict` and is the caller's cue to retry with
//! a fresh read; the ledger never retries internally, so lost-update bugs
//! stay visible.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use backstock_core::{ExpectedVersion, ItemId, LedgerError, LedgerResult, UserId};
use backstock_inventory::{
    AdjustmentType, InventoryItem, InventoryTransaction, PendingTransaction, TransactionType,
    compute_adjustment,
};

use crate::catalog::{CatalogMirror, ProductRecord};
use crate::config::LedgerConfig;
use crate::store::LedgerStore;

/// One requested stock mutation, fully explicit.
///
/// The transaction type comes from the caller's closed enum; free text goes
/// to `notes` and is never parsed for intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentRequest {
    pub item_id: ItemId,
    pub adjustment: AdjustmentType,
    pub amount: u32,
    pub kind: TransactionType,
    pub notes: Option<String>,
    pub actor: UserId,
    pub reference_id: Option<String>,
}

/// The authoritative owner of per-item stock.
pub struct StockLedger<S> {
    store: S,
    config: LedgerConfig,
    mirror: Option<Arc<dyn CatalogMirror>>,
}

impl<S> StockLedger<S>
where
    S: LedgerStore,
{
    pub fn new(store: S, config: LedgerConfig) -> Self {
        Self {
            store,
            config,
            mirror: None,
        }
    }

    /// Attach the catalog mirror refreshed after each successful commit.
    pub fn with_catalog_mirror(mut self, mirror: Arc<dyn CatalogMirror>) -> Self {
        self.mirror = Some(mirror);
        self
    }

    /// Begin tracking a catalog product, seeding stock from the catalog's
    /// base value and thresholds from policy defaults. Re-tracking an
    /// existing product refreshes descriptive fields only.
    pub fn track_product(&self, product: ProductRecord) -> LedgerResult<InventoryItem> {
        let item = InventoryItem {
            id: ItemId::from_product(product.product_id),
            product_id: product.product_id,
            product_name: product.product_name,
            sku: product.sku,
            current_stock: product.base_stock,
            min_stock_threshold: self.config.default_min_stock_threshold,
            reorder_quantity: self.config.default_reorder_quantity,
            last_restocked: None,
        };
        let versioned = self.store.track(item)?;
        info!(item_id = %versioned.item.id, "tracking inventory item");
        Ok(versioned.item)
    }

    /// Apply one adjustment atomically, returning the committed record.
    ///
    /// Exactly one transaction is appended per successful call; on any
    /// error, neither the item nor the log has changed.
    pub fn apply_adjustment(
        &self,
        request: AdjustmentRequest,
    ) -> LedgerResult<InventoryTransaction> {
        let versioned = self
            .store
            .load(request.item_id)?
            .ok_or(LedgerError::ItemNotFound(request.item_id))?;
        let item = versioned.item;

        let outcome = compute_adjustment(
            item.current_stock,
            request.adjustment,
            request.amount,
            request.kind,
        )?;

        let now = Utc::now();
        let restocked_at = (outcome.kind == TransactionType::Restock).then_some(now);
        let pending = PendingTransaction {
            item_id: item.id,
            product_id: item.product_id,
            kind: outcome.kind,
            quantity: outcome.delta,
            previous_stock: item.current_stock,
            new_stock: outcome.new_stock,
            date: now,
            notes: request.notes,
            created_by: request.actor,
            reference_id: request.reference_id,
        };
        let updated = item.with_stock(outcome.new_stock, restocked_at);

        let transaction = self.store.commit(
            ExpectedVersion::Exact(versioned.version),
            updated,
            pending,
        )?;

        info!(
            item_id = %transaction.item_id,
            kind = %transaction.kind,
            delta = transaction.quantity,
            new_stock = transaction.new_stock,
            sequence = transaction.sequence,
            "ledger commit"
        );

        // Mirror refresh is a derived projection, not part of the commit:
        // a failure here is logged, never rolled into the ledger result.
        if let Some(mirror) = &self.mirror {
            if let Err(e) = mirror.refresh_stock(transaction.product_id, transaction.new_stock) {
                warn!(product_id = %transaction.product_id, error = %e, "catalog mirror refresh failed");
            }
        }

        Ok(transaction)
    }

    /// Current state of one tracked item.
    pub fn item(&self, item_id: ItemId) -> LedgerResult<InventoryItem> {
        Ok(self
            .store
            .load(item_id)?
            .ok_or(LedgerError::ItemNotFound(item_id))?
            .item)
    }

    /// Snapshot of every tracked item.
    pub fn items(&self) -> LedgerResult<Vec<InventoryItem>> {
        self.store.items()
    }

    /// The full transaction log, in commit order.
    pub fn transactions(&self) -> LedgerResult<Vec<InventoryTransaction>> {
        self.store.transactions()
    }

    /// Audit trail for one item, in commit order.
    pub fn transactions_for_item(
        &self,
        item_id: ItemId,
    ) -> LedgerResult<Vec<InventoryTransaction>> {
        self.store.transactions_for_item(item_id)
    }
}
