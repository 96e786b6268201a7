use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use acme_procurement::{ProductId, PurchaseOrder};
use acme_scm::SupplierId;
use chrono::Utc;
use rust_decimal::Decimal;

fn build_order(lines: usize) -> PurchaseOrder {
    let supplier_id = SupplierId::new("SUP001").unwrap();
    let mut order = PurchaseOrder::new("PO-BENCH", supplier_id, Utc::now(), "USD").unwrap();
    for i in 0..lines {
        let cents = 100 + (i as i64 % 5_000);
        order
            .add_item(ProductId::generate(), 1 + (i as i64 % 50), Decimal::new(cents, 2))
            .unwrap();
    }
    order
}

fn bench_order_total(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_total");

    for lines in [10usize, 100, 1_000, 10_000] {
        let order = build_order(lines);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &order, |b, order| {
            b.iter(|| black_box(order.order_total().unwrap()));
        });
    }

    group.finish();
}

fn bench_add_item(c: &mut Criterion) {
    let mut group = c.benchmark_group("add_item");

    for lines in [10usize, 1_000] {
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &lines, |b, &lines| {
            b.iter(|| black_box(build_order(lines)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_order_total, bench_add_item);
criterion_main!(benches);
