use criterion::{Criterion, black_box, criterion_group, criterion_main};
use gridflow::{GridItem, arrange};

fn unit_items(c: &mut Criterion) {
    let items: Vec<GridItem> = (0..256).map(|_| GridItem::new()).collect();
    c.bench_function("arrange_256_unit_items_16_cols", |b| {
        b.iter(|| arrange(black_box(&items), 16))
    });
}

fn mixed_spans(c: &mut Criterion) {
    let items: Vec<GridItem> = (0u32..256)
        .map(|i| GridItem::spanning(i % 4 + 1, (i * 3) % 8 + 1))
        .collect();
    c.bench_function("arrange_256_mixed_spans_16_cols", |b| {
        b.iter(|| arrange(black_box(&items), 16))
    });
}

fn wide_grid(c: &mut Criterion) {
    let items: Vec<GridItem> = (0u32..128)
        .map(|i| GridItem::spanning(i % 3 + 1, (i * 11) % 96 + 1))
        .collect();
    c.bench_function("arrange_128_items_256_cols", |b| {
        b.iter(|| arrange(black_box(&items), 256))
    });
}

criterion_group!(benches, unit_items, mixed_spans, wide_grid);
criterion_main!(benches);
