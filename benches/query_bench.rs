use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use stockchart::core::{DataPoint, Range, visible_index_range, visible_value_extent};
use stockchart::selector::{DragTarget, RangeSelectorController};

fn hourly_series(len: usize) -> Vec<DataPoint> {
    (0..len)
        .map(|i| {
            let t = i as f64 * 3_600.0;
            DataPoint::new(t, 100.0 + (i as f64 * 0.01).sin() * 25.0)
        })
        .collect()
}

fn bench_visible_index_range_100k(c: &mut Criterion) {
    let points = hourly_series(100_000);
    let window = Range::new(40_000.0 * 3_600.0, 60_000.0 * 3_600.0).expect("valid window");

    c.bench_function("visible_index_range_100k", |b| {
        b.iter(|| {
            let _ = visible_index_range(black_box(&points), black_box(window))
                .expect("sorted series");
        })
    });
}

fn bench_visible_value_extent_100k(c: &mut Criterion) {
    let points = hourly_series(100_000);
    let window = Range::new(10_000.0 * 3_600.0, 90_000.0 * 3_600.0).expect("valid window");

    c.bench_function("visible_value_extent_100k", |b| {
        b.iter(|| {
            let _ = visible_value_extent(black_box(&points), black_box(window))
                .expect("sorted series");
        })
    });
}

fn bench_selector_drag_cycle(c: &mut Criterion) {
    let bounds = Range::new(0.0, 1_000_000.0).expect("valid bounds");
    let mut controller = RangeSelectorController::with_minimum_span(3_600.0).expect("valid span");
    controller
        .move_range_selector_to_range(bounds)
        .expect("satisfiable range");

    c.bench_function("selector_drag_cycle", |b| {
        b.iter(|| {
            controller
                .begin_drag(DragTarget::Selection)
                .expect("synced controller");
            for _ in 0..32 {
                let _ = controller.drag_by(black_box(-250.0)).expect("finite delta");
            }
            controller.cancel_drag();
        })
    });
}

criterion_group!(
    benches,
    bench_visible_index_range_100k,
    bench_visible_value_extent_100k,
    bench_selector_drag_cycle
);
criterion_main!(benches);
