//! CSV export of transaction query results.

use chrono::NaiveDate;

use backstock_core::{LedgerError, LedgerResult};
use backstock_inventory::InventoryTransaction;

/// Fixed header row of every export.
pub const CSV_HEADER: &str = "Date,Product ID,Type,Quantity,Previous Stock,New Stock,Notes";

/// Serialize a filtered/sorted transaction sequence to a UTF-8 CSV
/// document, one row per transaction.
///
/// Fields containing the delimiter, a quote, or a line break are wrapped in
/// quotes with embedded quotes doubled. An empty input is reported as
/// [`LedgerError::ExportEmptyResult`] rather than producing a header-only
/// file nobody asked for.
pub fn export_csv(transactions: &[InventoryTransaction]) -> LedgerResult<String> {
    if transactions.is_empty() {
        return Err(LedgerError::ExportEmptyResult);
    }

    let mut out = String::with_capacity(64 * (transactions.len() + 1));
    out.push_str(CSV_HEADER);
    out.push('\n');
    for t in transactions {
        let row = [
            t.date.to_rfc3339(),
            t.product_id.to_string(),
            t.kind.as_str().to_string(),
            t.quantity.to_string(),
            t.previous_stock.to_string(),
            t.new_stock.to_string(),
            t.notes.clone().unwrap_or_default(),
        ];
        let mut first = true;
        for field in row {
            if !first {
                out.push(',');
            }
            first = false;
            out.push_str(&escape_field(&field));
        }
        out.push('\n');
    }
    Ok(out)
}

/// Download filename convention: `inventory-transactions-<ISO date>.csv`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("inventory-transactions-{date}.csv")
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        let mut escaped = String::with_capacity(field.len() + 2);
        escaped.push('"');
        for c in field.chars() {
            if c == '"' {
                escaped.push('"');
            }
            escaped.push(c);
        }
        escaped.push('"');
        escaped
    } else {
        field.to_string()
    }
}
