//! This bench test simulates stocking a warehouse item by item and then
//! draining a queue of orders against it. Every change rewrites the inventory
//! file.

#![allow(missing_docs)]

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use tempfile::TempDir;
use warehouse::{ItemDraft, Warehouse};

const ITEMS: u32 = 200;

fn draft(i: u32) -> ItemDraft {
    ItemDraft {
        name: format!("Part {i}"),
        category: format!("Parts/Bin {}", i % 10),
        quantity: 100,
        price: 1.25,
        min_stock: 5,
    }
}

/// Stocks a fresh warehouse in a temporary directory.
fn preseed_warehouse() -> (TempDir, Warehouse) {
    let tmp_dir = TempDir::new().unwrap();
    let mut warehouse = Warehouse::open(tmp_dir.path().join("inventory.csv")).unwrap();
    for i in 0..ITEMS {
        warehouse.create_item(draft(i)).unwrap();
    }
    (tmp_dir, warehouse)
}

fn add_many(c: &mut Criterion) {
    c.bench_function("add items", |b| {
        b.iter_batched(
            || TempDir::new().unwrap(),
            |tmp_dir| {
                let mut warehouse =
                    Warehouse::open(tmp_dir.path().join("inventory.csv")).unwrap();
                for i in 0..ITEMS {
                    warehouse.create_item(draft(i)).unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });
}

fn process_orders(c: &mut Criterion) {
    c.bench_function("process orders", |b| {
        b.iter_batched(
            || {
                let (tmp_dir, mut warehouse) = preseed_warehouse();
                for id in 1..=ITEMS {
                    warehouse.create_order(id, 10).unwrap();
                }
                (tmp_dir, warehouse)
            },
            |(_tmp_dir, mut warehouse)| {
                while warehouse.order_queue().next().is_some() {
                    warehouse.process_next_order().unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, add_many, process_orders);
criterion_main!(benches);
