//! `backstock-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! strongly-typed identifiers, the shared ledger error taxonomy, and the
//! optimistic concurrency primitive used at the store's commit boundary.

pub mod error;
pub mod id;
pub mod version;

pub use error::{LedgerError, LedgerResult};
pub use id::{ItemId, ProductId, TransactionId, UserId};
pub use version::ExpectedVersion;
