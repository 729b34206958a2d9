//! Adjustment engine: pure computation of a requested stock mutation.

use serde::{Deserialize, Serialize};

use backstock_core::{LedgerError, LedgerResult};

use crate::transaction::TransactionType;

/// How the requested amount is applied to the current stock value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentType {
    /// Increase stock by `amount`.
    Add,
    /// Decrease stock by `amount`, clamped at zero from below.
    Subtract,
    /// Set stock to exactly `amount`.
    Set,
}

/// Result of a validated adjustment computation, ready for the ledger to
/// commit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AdjustmentOutcome {
    pub new_stock: u32,
    /// The *applied* delta. For a clamped `Subtract` this is smaller in
    /// magnitude than the requested amount.
    pub delta: i64,
    pub kind: TransactionType,
}

/// Compute the resulting stock value and applied delta for a requested
/// adjustment.
///
/// Pure: no side effects, consumed by the ledger's commit path. The
/// transaction type is taken from the caller as-is; this engine never
/// infers intent from free text.
///
/// Errors:
/// - [`LedgerError::InvalidAdjustment`] when an `Add` would overflow the
///   stock range (negative amounts are unrepresentable by type).
/// - [`LedgerError::NoOpAdjustment`] when the applied delta is zero, so
///   the audit trail never records vacuous entries.
pub fn compute_adjustment(
    current_stock: u32,
    adjustment: AdjustmentType,
    amount: u32,
    kind: TransactionType,
) -> LedgerResult<AdjustmentOutcome> {
    let new_stock = match adjustment {
        AdjustmentType::Add => current_stock.checked_add(amount).ok_or_else(|| {
            LedgerError::invalid_adjustment(format!(
                "adding {amount} to {current_stock} overflows the stock range"
            ))
        })?,
        AdjustmentType::Subtract => current_stock.saturating_sub(amount),
        AdjustmentType::Set => amount,
    };

    let delta = i64::from(new_stock) - i64::from(current_stock);
    if delta == 0 {
        return Err(LedgerError::NoOpAdjustment);
    }

    Ok(AdjustmentOutcome {
        new_stock,
        delta,
        kind,
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn add_increases_stock_by_amount() {
        let outcome =
            compute_adjustment(5, AdjustmentType::Add, 20, TransactionType::Restock).unwrap();
        assert_eq!(outcome.new_stock, 25);
        assert_eq!(outcome.delta, 20);
        assert_eq!(outcome.kind, TransactionType::Restock);
    }

    #[test]
    fn subtract_clamps_at_zero_and_records_applied_delta() {
        let outcome =
            compute_adjustment(3, AdjustmentType::Subtract, 10, TransactionType::Sale).unwrap();
        assert_eq!(outcome.new_stock, 0);
        // The applied delta, not the requested -10.
        assert_eq!(outcome.delta, -3);
    }

    #[test]
    fn set_uses_amount_as_target() {
        let outcome =
            compute_adjustment(12, AdjustmentType::Set, 4, TransactionType::Adjustment).unwrap();
        assert_eq!(outcome.new_stock, 4);
        assert_eq!(outcome.delta, -8);
    }

    #[test]
    fn zero_effective_delta_is_rejected() {
        let err = compute_adjustment(5, AdjustmentType::Add, 0, TransactionType::Adjustment)
            .unwrap_err();
        assert_eq!(err, LedgerError::NoOpAdjustment);

        // Subtracting from an empty item applies nothing.
        let err = compute_adjustment(0, AdjustmentType::Subtract, 10, TransactionType::Sale)
            .unwrap_err();
        assert_eq!(err, LedgerError::NoOpAdjustment);

        // Setting to the current value applies nothing.
        let err = compute_adjustment(7, AdjustmentType::Set, 7, TransactionType::Adjustment)
            .unwrap_err();
        assert_eq!(err, LedgerError::NoOpAdjustment);
    }

    #[test]
    fn add_overflow_is_invalid() {
        let err = compute_adjustment(u32::MAX, AdjustmentType::Add, 1, TransactionType::Restock)
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAdjustment(_)));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: for any valid input, a successful computation yields a
        /// new stock that equals the old stock plus the applied delta, and
        /// the delta is never zero.
        #[test]
        fn outcome_explains_new_stock(
            current in 0u32..1_000_000,
            amount in 0u32..1_000_000,
            which in 0u8..3,
        ) {
            let adjustment = match which {
                0 => AdjustmentType::Add,
                1 => AdjustmentType::Subtract,
                _ => AdjustmentType::Set,
            };
            if let Ok(outcome) =
                compute_adjustment(current, adjustment, amount, TransactionType::Adjustment)
            {
                prop_assert_ne!(outcome.delta, 0);
                prop_assert_eq!(
                    i64::from(outcome.new_stock),
                    i64::from(current) + outcome.delta
                );
            }
        }

        /// Property: `Subtract` never produces a negative stock value and
        /// never applies more than requested.
        #[test]
        fn subtract_never_goes_negative(current in 0u32..1_000_000, amount in 0u32..2_000_000) {
            match compute_adjustment(
                current,
                AdjustmentType::Subtract,
                amount,
                TransactionType::Sale,
            ) {
                Ok(outcome) => {
                    prop_assert!(outcome.delta < 0);
                    prop_assert!(outcome.delta.unsigned_abs() <= u64::from(amount));
                    prop_assert!(outcome.new_stock <= current);
                }
                Err(err) => prop_assert_eq!(err, LedgerError::NoOpAdjustment),
            }
        }
    }
}
