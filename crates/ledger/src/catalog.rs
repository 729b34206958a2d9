//! Catalog collaborator seam.
//!
//! The catalog owns product creation and descriptive data; the ledger owns
//! stock. The catalog's stock field is a read-only mirror refreshed from
//! ledger commits, which closes the dual-write drift between the two.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use backstock_core::{LedgerError, LedgerResult, ProductId};

/// Product data the catalog supplies to seed or refresh a tracked item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_id: ProductId,
    pub product_name: String,
    pub sku: String,
    /// Stock value the catalog last knew. Only consulted when the product
    /// is first tracked; afterwards the ledger's value is authoritative.
    pub base_stock: u32,
}

/// Push-side of the catalog mirror: receives the committed stock value
/// after each successful ledger mutation.
pub trait CatalogMirror: Send + Sync {
    fn refresh_stock(&self, product_id: ProductId, stock: u32) -> LedgerResult<()>;
}

impl<M> CatalogMirror for Arc<M>
where
    M: CatalogMirror + ?Sized,
{
    fn refresh_stock(&self, product_id: ProductId, stock: u32) -> LedgerResult<()> {
        (**self).refresh_stock(product_id, stock)
    }
}

/// In-memory mirror for the single-process deployment and for tests.
#[derive(Debug, Default)]
pub struct InMemoryCatalogMirror {
    stocks: RwLock<HashMap<ProductId, u32>>,
}

impl InMemoryCatalogMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirrored stock value for a product, if any commit reached it yet.
    pub fn stock(&self, product_id: ProductId) -> Option<u32> {
        self.stocks
            .read()
            .ok()
            .and_then(|s| s.get(&product_id).copied())
    }
}

impl CatalogMirror for InMemoryCatalogMirror {
    fn refresh_stock(&self, product_id: ProductId, stock: u32) -> LedgerResult<()> {
        let mut stocks = self
            .stocks
            .write()
            .map_err(|_| LedgerError::persistence("catalog mirror lock poisoned"))?;
        stocks.insert(product_id, stock);
        Ok(())
    }
}
