//! Integration tests for the full back-office flow.
//!
//! Tests: AdjustmentRequest → StockLedger → TransactionQueryService →
//! CSV export, plus the LowStockMonitor over the same store.

use std::sync::Arc;

use backstock_core::{LedgerError, ProductId, UserId};
use backstock_inventory::{AdjustmentType, InventoryItem, TransactionType};
use backstock_ledger::{
    AdjustmentRequest, InMemoryCatalogMirror, InMemoryLedgerStore, LedgerConfig, ProductRecord,
    StockLedger,
};

use crate::export::export_csv;
use crate::filter::{DateRange, SortDirection, SortField, TransactionFilter, TransactionSort};
use crate::monitor::LowStockMonitor;
use crate::query::TransactionQueryService;

struct BackOffice {
    ledger: StockLedger<Arc<InMemoryLedgerStore>>,
    queries: TransactionQueryService<Arc<InMemoryLedgerStore>>,
    monitor: LowStockMonitor<Arc<InMemoryLedgerStore>>,
    mirror: Arc<InMemoryCatalogMirror>,
}

fn setup() -> BackOffice {
    backstock_observability::init();
    let store = Arc::new(InMemoryLedgerStore::new());
    let mirror = Arc::new(InMemoryCatalogMirror::new());
    BackOffice {
        ledger: StockLedger::new(store.clone(), LedgerConfig::default())
            .with_catalog_mirror(mirror.clone()),
        queries: TransactionQueryService::new(store.clone()),
        monitor: LowStockMonitor::new(store),
        mirror,
    }
}

fn track(office: &BackOffice, name: &str, base_stock: u32) -> InventoryItem {
    office
        .ledger
        .track_product(ProductRecord {
            product_id: ProductId::new(),
            product_name: name.to_string(),
            sku: format!("SKU-{}", name.to_uppercase()),
            base_stock,
        })
        .unwrap()
}

fn adjust(
    office: &BackOffice,
    item: &InventoryItem,
    adjustment: AdjustmentType,
    amount: u32,
    kind: TransactionType,
    notes: Option<&str>,
) {
    office
        .ledger
        .apply_adjustment(AdjustmentRequest {
            item_id: item.id,
            adjustment,
            amount,
            kind,
            notes: notes.map(str::to_string),
            actor: UserId::new(),
            reference_id: None,
        })
        .unwrap();
}

#[test]
fn restock_filter_sorted_by_quantity_descending() {
    let office = setup();
    let mugs = track(&office, "mugs", 20);
    let bowls = track(&office, "bowls", 20);

    adjust(&office, &mugs, AdjustmentType::Add, 15, TransactionType::Restock, None);
    adjust(&office, &mugs, AdjustmentType::Subtract, 4, TransactionType::Sale, None);
    adjust(&office, &bowls, AdjustmentType::Add, 40, TransactionType::Restock, None);
    adjust(&office, &bowls, AdjustmentType::Subtract, 1, TransactionType::Damage, Some("chipped"));

    let rows = office
        .queries
        .query(
            &TransactionFilter {
                kind: Some(TransactionType::Restock),
                date_range: Some(DateRange::Last7Days),
                search: None,
            },
            &TransactionSort {
                field: SortField::Quantity,
                direction: SortDirection::Descending,
            },
        )
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|t| t.kind == TransactionType::Restock));
    assert_eq!(rows[0].quantity, 40);
    assert_eq!(rows[1].quantity, 15);
}

#[test]
fn export_covers_committed_history_and_empty_filters_are_reported() {
    let office = setup();
    let mugs = track(&office, "mugs", 8);
    adjust(
        &office,
        &mugs,
        AdjustmentType::Add,
        12,
        TransactionType::Restock,
        Some("pallet from \"Northwind\", dock 2"),
    );
    adjust(&office, &mugs, AdjustmentType::Subtract, 3, TransactionType::Sale, None);

    let all = office
        .queries
        .query(&TransactionFilter::default(), &TransactionSort::default())
        .unwrap();
    let csv = export_csv(&all).unwrap();
    assert_eq!(csv.lines().count(), 3);
    assert!(csv.contains("\"pallet from \"\"Northwind\"\", dock 2\""));

    let none = office
        .queries
        .query(
            &TransactionFilter {
                kind: Some(TransactionType::Return),
                ..TransactionFilter::default()
            },
            &TransactionSort::default(),
        )
        .unwrap();
    assert_eq!(export_csv(&none).unwrap_err(), LedgerError::ExportEmptyResult);
}

#[test]
fn monitor_sees_ledger_commits_immediately() {
    let office = setup();
    let mugs = track(&office, "mugs", 30);
    let bowls = track(&office, "bowls", 30);

    adjust(&office, &mugs, AdjustmentType::Subtract, 28, TransactionType::Sale, None);
    adjust(&office, &bowls, AdjustmentType::Subtract, 30, TransactionType::Sale, None);

    let alerts = office.monitor.rank(10, 5).unwrap();
    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].product_name, "bowls");
    assert_eq!(alerts[0].current_stock, 0);
    assert_eq!(alerts[1].product_name, "mugs");
    assert_eq!(alerts[1].current_stock, 2);
}

#[test]
fn catalog_mirror_tracks_every_commit() {
    let office = setup();
    let mugs = track(&office, "mugs", 10);

    adjust(&office, &mugs, AdjustmentType::Add, 5, TransactionType::Return, None);
    adjust(&office, &mugs, AdjustmentType::Subtract, 2, TransactionType::Sale, None);

    assert_eq!(office.mirror.stock(mugs.product_id), Some(13));
    assert_eq!(
        office.ledger.item(mugs.id).unwrap().current_stock,
        13,
        "ledger and mirror must agree after commits"
    );
}
