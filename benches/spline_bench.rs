use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kexspline::utils::{make_helix, sample_uniform};
use kexspline::{Curve, EndMode, Float3, Spline};
use std::hint::black_box;

fn build_helix(curve: Curve, points_per_turn: usize) -> Spline {
    Spline::from_points(
        curve,
        make_helix(Float3::ZERO, 20.0, 50.0, 4.0, points_per_turn),
    )
}

fn curves() -> [(&'static str, Curve); 4] {
    [
        ("linear", Curve::Linear),
        ("bezier", Curve::Bezier),
        ("catmull_rom", Curve::default()),
        ("bspline", Curve::BSpline),
    ]
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for (name, curve) in curves() {
        let spline = build_helix(curve, 16);
        group.bench_with_input(BenchmarkId::new("frame_1024", name), &spline, |b, spline| {
            b.iter(|| {
                let mut acc = 0.0f32;
                for i in 0..1024 {
                    acc += spline.evaluate(black_box(i as f32 / 1024.0)).normal.y;
                }
                black_box(acc)
            })
        });
    }

    group.finish();
}

fn bench_arc_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("arc_length");

    for &points_per_turn in &[8usize, 64usize] {
        let spline = build_helix(Curve::default(), points_per_turn);

        group.bench_with_input(
            BenchmarkId::new("rebuild_table", points_per_turn),
            &spline,
            |b, spline| {
                b.iter_batched(
                    || spline.clone(),
                    |mut spline| {
                        spline.end_mode = EndMode::Loop;
                        black_box(spline.get_length())
                    },
                    criterion::BatchSize::SmallInput,
                )
            },
        );

        let total = spline.get_length();
        group.bench_with_input(
            BenchmarkId::new("t_at_distance_1024", points_per_turn),
            &spline,
            |b, spline| {
                b.iter(|| {
                    let mut acc = 0.0f32;
                    for i in 0..1024 {
                        acc += spline.get_t_at_distance(black_box(total * i as f32 / 1024.0));
                    }
                    black_box(acc)
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("sample_uniform_256", points_per_turn),
            &spline,
            |b, spline| b.iter(|| black_box(sample_uniform(spline, 256).len())),
        );
    }

    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let spline = build_helix(Curve::default(), 16);
    let queries: Vec<Float3> = (0..64)
        .map(|i| {
            let a = i as f32 * 0.37;
            Float3::new(a.cos() * 25.0, (i % 50) as f32, a.sin() * 25.0)
        })
        .collect();

    c.bench_function("nearest_point_batch_64", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for query in &queries {
                acc += spline.find_nearest_point(black_box(*query)).distance;
            }
            black_box(acc)
        })
    });
}

criterion_group!(spline_benches, bench_evaluate, bench_arc_length, bench_nearest);
criterion_main!(spline_benches);
