//! Inventory transaction records (the audit trail).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use backstock_core::{ItemId, ProductId, TransactionId, UserId};

/// Business classification of a ledger mutation.
///
/// Supplied explicitly by the caller; the ledger never infers the type from
/// free-text notes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Restock,
    Adjustment,
    Sale,
    Return,
    Damage,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Restock => "restock",
            TransactionType::Adjustment => "adjustment",
            TransactionType::Sale => "sale",
            TransactionType::Return => "return",
            TransactionType::Damage => "damage",
        }
    }
}

impl core::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A computed mutation ready to be committed (not yet assigned an id or
/// sequence number). The store assigns both during commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTransaction {
    pub item_id: ItemId,
    pub product_id: ProductId,
    pub kind: TransactionType,
    /// Signed delta actually applied to stock (positive = increase).
    pub quantity: i64,
    pub previous_stock: u32,
    pub new_stock: u32,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_by: UserId,
    /// Optional correlation id (e.g. the order that caused a `sale`).
    pub reference_id: Option<String>,
}

/// One committed ledger mutation. Immutable once created; the ledger
/// exposes no update or delete operation for these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryTransaction {
    pub id: TransactionId,
    /// Store-assigned, strictly increasing position in the log.
    pub sequence: u64,
    pub item_id: ItemId,
    pub product_id: ProductId,
    pub kind: TransactionType,
    pub quantity: i64,
    pub previous_stock: u32,
    pub new_stock: u32,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_by: UserId,
    pub reference_id: Option<String>,
}

impl InventoryTransaction {
    /// The core audit identity: `new_stock` must equal `previous_stock`
    /// plus the applied delta, clamped at zero from below.
    pub fn is_consistent(&self) -> bool {
        let expected = (i64::from(self.previous_stock) + self.quantity).max(0);
        i64::from(self.new_stock) == expected
    }
}
