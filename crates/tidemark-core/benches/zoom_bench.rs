use chrono::{TimeDelta, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use tidemark_core::{build_scales, render_path, render_x_axis, Dataset, Point, TransformEvent, Viewport, ZoomController, ZoomTransform};

fn gen_series(n: usize) -> Dataset {
    let start = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
    let points = (0..n)
        .map(|i| Point::new(start + TimeDelta::minutes(i as i64), (i as f64 * 0.01).sin() * 50.0 + 50.0))
        .collect();
    Dataset::new(points).unwrap()
}

fn bench_zoom_rerender(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom_rerender");
    let vp = Viewport::default();
    for &n in &[216usize, 10_000usize, 100_000usize] {
        let data = gen_series(n);
        let (x, y) = build_scales(&data, &vp).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &n, |b, _| {
            let mut zc = ZoomController::new(vp.inner_width(), Default::default());
            let mut k = 1.0;
            b.iter(|| {
                k = if k >= 10.0 { 1.0 } else { k * 1.1 };
                let zx = zc.on_zoom(TransformEvent::new(k, -100.0 * k), &x);
                black_box(render_x_axis(&zx));
                black_box(render_path(&data, &zx, &y));
            });
        });
    }
    group.finish();
}

fn bench_axis_only(c: &mut Criterion) {
    let data = gen_series(216);
    let (x, _) = build_scales(&data, &Viewport::default()).unwrap();
    let zoomed = tidemark_core::rescale_x(&x, &ZoomTransform { scale_factor: 7.0, translate_x: -2000.0 });
    c.bench_function("x_axis_ticks", |b| b.iter(|| black_box(render_x_axis(&zoomed))));
}

criterion_group!(benches, bench_zoom_rerender, bench_axis_only);
criterion_main!(benches);
