//! `backstock-query` — read-only surfaces over the stock ledger.
//!
//! Filtering, sorting, and CSV export over the committed transaction log,
//! plus the low-stock alert ranker. Everything here reads the ledger's
//! narrow read seams and never mutates.

pub mod export;
#[cfg(test)]
mod integration_tests;
pub mod filter;
pub mod monitor;
pub mod query;

pub use export::{CSV_HEADER, export_csv, export_filename};
pub use filter::{DateRange, SortDirection, SortField, TransactionFilter, TransactionSort};
pub use monitor::{LowStockAlert, LowStockMonitor};
pub use query::TransactionQueryService;
