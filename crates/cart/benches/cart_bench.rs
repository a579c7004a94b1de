//! Benchmarks for the per-redraw work: rebuilding the view, rendering the
//! DOM markup and encoding the snapshot for a large cart.

use cart::markup::render_cart_items;
use cart::snapshot::{decode_snapshot, encode_snapshot};
use cart::{Cart, CartView};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn big_cart(lines: usize) -> Cart {
    let mut cart = Cart::default();
    for i in 0..lines {
        let id = format!("item-{i}");
        let price = format!("{}.{:02}", 50 + i % 300, i % 100);
        for _ in 0..(1 + i % 4) {
            let _ = cart.add(&id, "Позиция меню <особая>", &price);
        }
    }
    cart
}

fn bench_redraw(c: &mut Criterion) {
    let cart = big_cart(200);

    c.bench_function("view_build_200_lines", |b| {
        b.iter(|| CartView::build(black_box(&cart)))
    });

    let view = CartView::build(&cart);
    c.bench_function("markup_200_lines", |b| {
        b.iter(|| render_cart_items(black_box(&view)))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let cart = big_cart(200);
    let encoded = encode_snapshot(&cart).unwrap_or_default();

    c.bench_function("snapshot_encode_200_lines", |b| {
        b.iter(|| encode_snapshot(black_box(&cart)))
    });
    c.bench_function("snapshot_decode_200_lines", |b| {
        b.iter(|| decode_snapshot(black_box(&encoded)))
    });
}

criterion_group!(benches, bench_redraw, bench_snapshot);
criterion_main!(benches);
