//! Filter and sort criteria for transaction queries.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use backstock_inventory::{InventoryTransaction, TransactionType};

/// Date-range selection, evaluated against a transaction's commit date.
///
/// All ranges are half-open `[start, end)`. Presets are anchored to the
/// local day boundary of the `now` they are resolved against, so "today"
/// means the calendar day, not a rolling 24 hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateRange {
    Today,
    Yesterday,
    #[serde(rename = "last-7-days")]
    Last7Days,
    #[serde(rename = "last-30-days")]
    Last30Days,
    Custom {
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    },
}

impl DateRange {
    /// Resolve to concrete `[start, end)` bounds.
    pub fn bounds(&self, now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let day_start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        let day_end = day_start + Duration::days(1);
        match self {
            DateRange::Today => (day_start, day_end),
            DateRange::Yesterday => (day_start - Duration::days(1), day_start),
            DateRange::Last7Days => (day_start - Duration::days(6), day_end),
            DateRange::Last30Days => (day_start - Duration::days(29), day_end),
            DateRange::Custom { from, to } => (*from, *to),
        }
    }

    pub fn contains(&self, date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        let (start, end) = self.bounds(now);
        start <= date && date < end
    }
}

/// Filter criteria for transaction queries. All fields are optional and
/// combine conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionFilter {
    /// Filter by transaction type.
    pub kind: Option<TransactionType>,
    /// Filter by commit date.
    pub date_range: Option<DateRange>,
    /// Case-insensitive free text, matched against the product id (string
    /// form) and the notes.
    pub search: Option<String>,
}

impl TransactionFilter {
    pub fn matches(&self, transaction: &InventoryTransaction, now: DateTime<Utc>) -> bool {
        if let Some(kind) = self.kind
            && transaction.kind != kind
        {
            return false;
        }
        if let Some(range) = &self.date_range
            && !range.contains(transaction.date, now)
        {
            return false;
        }
        if let Some(needle) = &self.search {
            let needle = needle.to_lowercase();
            let product = transaction.product_id.to_string().to_lowercase();
            let notes_hit = transaction
                .notes
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&needle));
            if !product.contains(&needle) && !notes_hit {
                return false;
            }
        }
        true
    }
}

/// Sortable fields of a transaction row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Date,
    Quantity,
    Kind,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sort order for query results.
///
/// Applied as a stable sort over the log's append order, so ties keep
/// their insertion order and repeated identical queries return identical
/// sequences.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for TransactionSort {
    fn default() -> Self {
        // Back-office screens show newest first.
        Self {
            field: SortField::Date,
            direction: SortDirection::Descending,
        }
    }
}

impl TransactionSort {
    pub fn apply(&self, transactions: &mut [InventoryTransaction]) {
        transactions.sort_by(|a, b| {
            let ordering = match self.field {
                SortField::Date => a.date.cmp(&b.date),
                SortField::Quantity => a.quantity.cmp(&b.quantity),
                SortField::Kind => a.kind.as_str().cmp(b.kind.as_str()),
            };
            match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn today_covers_the_calendar_day() {
        let now = at(2026, 8, 31, 14);
        let range = DateRange::Today;
        assert!(range.contains(at(2026, 8, 31, 0), now));
        assert!(range.contains(at(2026, 8, 31, 23), now));
        assert!(!range.contains(at(2026, 8, 30, 23), now));
        assert!(!range.contains(at(2026, 9, 1, 0), now));
    }

    #[test]
    fn yesterday_excludes_today() {
        let now = at(2026, 8, 31, 14);
        let range = DateRange::Yesterday;
        assert!(range.contains(at(2026, 8, 30, 12), now));
        assert!(!range.contains(at(2026, 8, 31, 0), now));
    }

    #[test]
    fn last_seven_days_includes_today_and_six_before() {
        let now = at(2026, 8, 31, 14);
        let range = DateRange::Last7Days;
        assert!(range.contains(at(2026, 8, 25, 0), now));
        assert!(range.contains(at(2026, 8, 31, 23), now));
        assert!(!range.contains(at(2026, 8, 24, 23), now));
    }

    #[test]
    fn custom_range_is_half_open() {
        let range = DateRange::Custom {
            from: at(2026, 8, 1, 0),
            to: at(2026, 8, 15, 0),
        };
        let now = at(2026, 8, 31, 14);
        assert!(range.contains(at(2026, 8, 1, 0), now));
        assert!(range.contains(at(2026, 8, 14, 23), now));
        assert!(!range.contains(at(2026, 8, 15, 0), now));
    }
}
