//! Benchmarks for the tab strip pass driver.
//!
//! Run with: cargo bench -p workbench-layout

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use workbench_layout::{Insets, LayoutInputs, Orientation, SingleRowLayout, Size, Strategy};

fn tab_sizes(n: usize) -> Vec<Size> {
    (0..n)
        .map(|i| Size::new(60 + (i as i32 * 37) % 140, 24 + (i as i32 * 11) % 20))
        .collect()
}

fn bench_single_row_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/single_row_pass");
    let inputs = LayoutInputs::new(Size::new(1600, 900), Insets::all(4), Size::new(120, 28));

    for orientation in Orientation::ALL {
        let strategy = Strategy::from(orientation);
        for n in [4, 16, 64] {
            let tabs = tab_sizes(n);
            group.bench_with_input(
                BenchmarkId::new(orientation.as_str(), n),
                &tabs,
                |b, tabs| {
                    b.iter(|| black_box(SingleRowLayout::new().layout(&strategy, &inputs, tabs)))
                },
            );
        }
    }

    group.finish();
}

fn bench_overflow_rect(c: &mut Criterion) {
    let inputs = LayoutInputs::new(Size::new(1600, 900), Insets::all(4), Size::new(120, 28))
        .with_position(800);
    c.bench_function("layout/overflow_rect", |b| {
        b.iter(|| {
            for orientation in Orientation::ALL {
                black_box(Strategy::from(orientation).overflow_rect(black_box(&inputs)));
            }
        })
    });
}

criterion_group!(benches, bench_single_row_pass, bench_overflow_rect);
criterion_main!(benches);
