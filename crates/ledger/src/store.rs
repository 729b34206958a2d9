//! Storage seams for the stock ledger.
//!
//! The ledger only requires durable, queryable key-value storage with an
//! atomic read-then-write primitive; everything behind these traits is
//! swappable. The shipped implementation is the in-memory store.

use std::sync::Arc;

use backstock_core::{ExpectedVersion, ItemId, LedgerResult};
use backstock_inventory::{InventoryItem, InventoryTransaction, PendingTransaction};

/// An item together with its store version.
///
/// The version increments by one per committed mutation and is what the
/// optimistic concurrency check keys on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedItem {
    pub item: InventoryItem,
    pub version: u64,
}

/// Read path over the append-only transaction log.
///
/// This is the only way transactions leave the store: in append order,
/// never mutated. No update or delete operation exists anywhere on the
/// store surface.
pub trait TransactionSource: Send + Sync {
    /// All committed transactions, in append (sequence) order.
    fn transactions(&self) -> LedgerResult<Vec<InventoryTransaction>>;

    /// Committed transactions for one item, in append order.
    fn transactions_for_item(&self, item_id: ItemId) -> LedgerResult<Vec<InventoryTransaction>> {
        let mut all = self.transactions()?;
        all.retain(|t| t.item_id == item_id);
        Ok(all)
    }
}

/// Read path over current item state, for monitors and screens.
pub trait StockSnapshot: Send + Sync {
    /// Snapshot of every tracked item's current state.
    fn items(&self) -> LedgerResult<Vec<InventoryItem>>;
}

/// The ledger's storage contract.
///
/// `commit` is the single mutation primitive: it persists the updated item
/// and appends its transaction record atomically, or fails with nothing
/// applied.
pub trait LedgerStore: TransactionSource + StockSnapshot {
    /// Load an item and its version, if tracked.
    fn load(&self, item_id: ItemId) -> LedgerResult<Option<VersionedItem>>;

    /// Start tracking an item, or refresh the descriptive fields
    /// (name/sku) of an already-tracked one. Never touches stock.
    fn track(&self, item: InventoryItem) -> LedgerResult<VersionedItem>;

    /// Atomically persist `item` and append `pending` as a new immutable
    /// transaction, assigning its id and sequence number.
    ///
    /// Fails with `ConcurrencyConflict` when `expected` does not match the
    /// stored version, with `ItemNotFound` when the item is untracked, and
    /// with `PersistenceFailure` when the store cannot commit; in every
    /// failure case neither the item nor the log has changed.
    fn commit(
        &self,
        expected: ExpectedVersion,
        item: InventoryItem,
        pending: PendingTransaction,
    ) -> LedgerResult<InventoryTransaction>;
}

impl<S> TransactionSource for Arc<S>
where
    S: TransactionSource + ?Sized,
{
    fn transactions(&self) -> LedgerResult<Vec<InventoryTransaction>> {
        (**self).transactions()
    }

    fn transactions_for_item(&self, item_id: ItemId) -> LedgerResult<Vec<InventoryTransaction>> {
        (**self).transactions_for_item(item_id)
    }
}

impl<S> StockSnapshot for Arc<S>
where
    S: StockSnapshot + ?Sized,
{
    fn items(&self) -> LedgerResult<Vec<InventoryItem>> {
        (**self).items()
    }
}

impl<S> LedgerStore for Arc<S>
where
    S: LedgerStore + ?Sized,
{
    fn load(&self, item_id: ItemId) -> LedgerResult<Option<VersionedItem>> {
        (**self).load(item_id)
    }

    fn track(&self, item: InventoryItem) -> LedgerResult<VersionedItem> {
        (**self).track(item)
    }

    fn commit(
        &self,
        expected: ExpectedVersion,
        item: InventoryItem,
        pending: PendingTransaction,
    ) -> LedgerResult<InventoryTransaction> {
        (**self).commit(expected, item, pending)
    }
}
