//! Transaction query service.

use chrono::{DateTime, Utc};

use backstock_core::LedgerResult;
use backstock_inventory::InventoryTransaction;
use backstock_ledger::TransactionSource;

use crate::filter::{TransactionFilter, TransactionSort};

/// Read-only filtering and sorting over the committed transaction log.
///
/// Reads the recorder's stored records only; no snapshot isolation. Two
/// identical queries with no intervening commits return identical ordered
/// sequences.
pub struct TransactionQueryService<S> {
    source: S,
}

impl<S> TransactionQueryService<S>
where
    S: TransactionSource,
{
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Run a query against the current log, resolving date presets against
    /// the current time.
    pub fn query(
        &self,
        filter: &TransactionFilter,
        sort: &TransactionSort,
    ) -> LedgerResult<Vec<InventoryTransaction>> {
        self.query_at(filter, sort, Utc::now())
    }

    /// Like [`query`](Self::query) with an explicit `now` for preset
    /// resolution. Deterministic; what the tests use.
    pub fn query_at(
        &self,
        filter: &TransactionFilter,
        sort: &TransactionSort,
        now: DateTime<Utc>,
    ) -> LedgerResult<Vec<InventoryTransaction>> {
        let mut rows = self.source.transactions()?;
        rows.retain(|t| filter.matches(t, now));
        sort.apply(&mut rows);
        Ok(rows)
    }
}
