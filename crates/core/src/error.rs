//! Ledger error model.
//!
//! Keep this focused on deterministic failures of ledger operations
//! (validation, conflicts, persistence). Every variant renders a distinct,
//! non-generic message; a presentation layer can surface `Display` output
//! directly.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the ledger.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The requested inventory item does not exist.
    #[error("inventory item not found: {0}")]
    ItemNotFound(ItemId),

    /// The requested adjustment is malformed (e.g. an amount that would
    /// overflow stock).
    #[error("invalid adjustment: {0}")]
    InvalidAdjustment(String),

    /// The adjustment would not change stock; rejected so the audit trail
    /// never contains vacuous entries.
    #[error("adjustment has no effect on stock")]
    NoOpAdjustment,

    /// An identifier failed to parse at the boundary.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The stock value read for this adjustment was stale at commit time.
    /// Recoverable: retry with a fresh read.
    #[error(
        "concurrent update on item {item_id}: expected version {expected}, found {actual}; retry with a fresh read"
    )]
    ConcurrencyConflict {
        item_id: ItemId,
        expected: u64,
        actual: u64,
    },

    /// The underlying store could not durably commit. Nothing was applied.
    #[error("persistence failure: {0}")]
    PersistenceFailure(String),

    /// A CSV export matched no transactions. Advisory: the computation
    /// succeeded, there is just nothing to write.
    #[error("export matched no transactions")]
    ExportEmptyResult,
}

impl LedgerError {
    pub fn invalid_adjustment(msg: impl Into<String>) -> Self {
        Self::InvalidAdjustment(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::PersistenceFailure(msg.into())
    }

    /// Whether a well-behaved caller should retry the operation with a
    /// fresh read. True only for [`LedgerError::ConcurrencyConflict`];
    /// every other kind is terminal for the request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ConcurrencyConflict { .. })
    }
}
