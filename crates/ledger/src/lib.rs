//! `backstock-ledger` — the stock ledger application service and its
//! storage seams.
//!
//! The ledger is the single authoritative owner of per-item stock. Every
//! successful mutation commits the new stock value and exactly one
//! immutable [`backstock_inventory::InventoryTransaction`] as an atomic
//! unit, guarded by per-item optimistic concurrency. Any other
//! representation of stock (notably the catalog's) is a derived, read-only
//! mirror refreshed from these commits.

pub mod catalog;
pub mod config;
pub mod in_memory;
pub mod service;
pub mod store;

pub use catalog::{CatalogMirror, InMemoryCatalogMirror, ProductRecord};
pub use config::LedgerConfig;
pub use in_memory::InMemoryLedgerStore;
pub use service::{AdjustmentRequest, StockLedger};
pub use store::{LedgerStore, StockSnapshot, TransactionSource, VersionedItem};
