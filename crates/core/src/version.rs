//! Optimistic concurrency expectation for a ledger commit.

use crate::error::{LedgerError, LedgerResult};
use crate::id::ItemId;

/// Version expectation checked at the store's commit boundary.
///
/// A caller that read an item at version `v` commits with `Exact(v)`; if
/// another adjustment landed in between, the check fails and the commit is
/// rejected as a [`LedgerError::ConcurrencyConflict`] instead of silently
/// overwriting the other writer's effect.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExpectedVersion {
    /// Skip version checking (seeding, rebuilds).
    Any,
    /// Require the item to be at an exact version.
    Exact(u64),
}

impl ExpectedVersion {
    pub fn matches(self, actual: u64) -> bool {
        match self {
            ExpectedVersion::Any => true,
            ExpectedVersion::Exact(v) => v == actual,
        }
    }

    pub fn check(self, item_id: ItemId, actual: u64) -> LedgerResult<()> {
        match self {
            ExpectedVersion::Any => Ok(()),
            ExpectedVersion::Exact(expected) if expected == actual => Ok(()),
            ExpectedVersion::Exact(expected) => Err(LedgerError::ConcurrencyConflict {
                item_id,
                expected,
                actual,
            }),
        }
    }
}
