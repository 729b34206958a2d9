//! In-memory ledger store.
//!
//! A single `RwLock` over items + log makes the commit trivially atomic:
//! the stock write and the log append happen under one write guard, so
//! either both are visible or neither is. Per-item serialization comes from
//! the `ExpectedVersion` check inside that guard.

use std::collections::HashMap;
use std::sync::RwLock;

use backstock_core::{ExpectedVersion, ItemId, LedgerError, LedgerResult, TransactionId};
use backstock_inventory::{InventoryItem, InventoryTransaction, PendingTransaction};

use crate::store::{LedgerStore, StockSnapshot, TransactionSource, VersionedItem};

#[derive(Debug, Default)]
struct State {
    items: HashMap<ItemId, VersionedItem>,
    log: Vec<InventoryTransaction>,
}

/// In-memory append-only ledger store.
///
/// Intended for the single-process deployment and for tests. Not optimized
/// for performance.
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    state: RwLock<State>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed transactions.
    pub fn transaction_count(&self) -> usize {
        self.state.read().map(|s| s.log.len()).unwrap_or(0)
    }
}

fn poisoned() -> LedgerError {
    LedgerError::persistence("ledger store lock poisoned")
}

impl TransactionSource for InMemoryLedgerStore {
    fn transactions(&self) -> LedgerResult<Vec<InventoryTransaction>> {
        let state = self.state.read().map_err(|_| poisoned())?;
        Ok(state.log.clone())
    }
}

impl StockSnapshot for InMemoryLedgerStore {
    fn items(&self) -> LedgerResult<Vec<InventoryItem>> {
        let state = self.state.read().map_err(|_| poisoned())?;
        Ok(state.items.values().map(|v| v.item.clone()).collect())
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn load(&self, item_id: ItemId) -> LedgerResult<Option<VersionedItem>> {
        let state = self.state.read().map_err(|_| poisoned())?;
        Ok(state.items.get(&item_id).cloned())
    }

    fn track(&self, item: InventoryItem) -> LedgerResult<VersionedItem> {
        let mut state = self.state.write().map_err(|_| poisoned())?;
        let versioned = match state.items.get_mut(&item.id) {
            // Already tracked: refresh descriptive fields only. Stock and
            // its audit trail stay with the ledger.
            Some(existing) => {
                existing.item.product_name = item.product_name;
                existing.item.sku = item.sku;
                existing.clone()
            }
            None => {
                let versioned = VersionedItem { item, version: 0 };
                state
                    .items
                    .insert(versioned.item.id, versioned.clone());
                versioned
            }
        };
        Ok(versioned)
    }

    fn commit(
        &self,
        expected: ExpectedVersion,
        item: InventoryItem,
        pending: PendingTransaction,
    ) -> LedgerResult<InventoryTransaction> {
        // Cross-checks before taking the write guard: a commit must be
        // internally consistent or the audit trail could not explain the
        // stock value it sits next to.
        if pending.item_id != item.id {
            return Err(LedgerError::invalid_adjustment(
                "transaction item_id does not match committed item",
            ));
        }
        if pending.new_stock != item.current_stock {
            return Err(LedgerError::invalid_adjustment(
                "transaction new_stock does not match committed stock value",
            ));
        }

        let mut state = self.state.write().map_err(|_| poisoned())?;

        let current = state
            .items
            .get(&item.id)
            .ok_or(LedgerError::ItemNotFound(item.id))?;
        expected.check(item.id, current.version)?;

        if current.item.current_stock != pending.previous_stock {
            // The expected-version check should make this unreachable, but
            // a broken caller must not be able to break the chain invariant.
            return Err(LedgerError::invalid_adjustment(
                "transaction previous_stock does not match stored stock value",
            ));
        }

        let sequence = state.log.len() as u64 + 1;
        let transaction = InventoryTransaction {
            id: TransactionId::new(),
            sequence,
            item_id: pending.item_id,
            product_id: pending.product_id,
            kind: pending.kind,
            quantity: pending.quantity,
            previous_stock: pending.previous_stock,
            new_stock: pending.new_stock,
            date: pending.date,
            notes: pending.notes,
            created_by: pending.created_by,
            reference_id: pending.reference_id,
        };

        let version = current.version + 1;
        state.items.insert(item.id, VersionedItem { item, version });
        state.log.push(transaction.clone());

        Ok(transaction)
    }
}
