//! Inventory domain module.
//!
//! This crate contains the business rules for the stock ledger, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage):
//! status classification, the adjustment engine, and the item/transaction
//! types the ledger commits.

pub mod engine;
pub mod item;
pub mod status;
pub mod transaction;

pub use engine::{AdjustmentOutcome, AdjustmentType, compute_adjustment};
pub use item::InventoryItem;
pub use status::{StockStatus, classify};
pub use transaction::{InventoryTransaction, PendingTransaction, TransactionType};
