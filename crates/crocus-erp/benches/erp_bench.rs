//! Criterion benchmarks for crocus-erp: single distances, early abandoning,
//! and the pairwise matrix.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use crocus_erp::{Erp, Sequence};

fn make_sine_sequence(n: usize, offset: f64) -> Sequence {
    let values: Vec<f64> = (0..n).map(|i| (i as f64 * 0.1).sin() + offset).collect();
    Sequence::new(values).unwrap()
}

fn bench_erp_distance(c: &mut Criterion) {
    let lengths = [64usize, 256, 1024];
    let windows: &[(i64, &str)] = &[(-1, "unconstrained"), (2, "band_r2"), (10, "band_r10")];

    let mut group = c.benchmark_group("erp_distance");

    for &len in &lengths {
        for &(window, window_label) in windows {
            let id = BenchmarkId::new(format!("len{len}"), window_label);
            let a = make_sine_sequence(len, 0.0);
            let b = make_sine_sequence(len, 1.0);
            let erp = if window < 0 {
                Erp::unconstrained(0.5)
            } else {
                Erp::with_band(window as usize, 0.5)
            };

            group.bench_with_input(id, &(a, b, erp), |bencher, (a, b, erp)| {
                bencher.iter(|| erp.distance(a.as_view(), b.as_view()));
            });
        }
    }

    group.finish();
}

fn bench_erp_with_limit(c: &mut Criterion) {
    let a = make_sine_sequence(512, 0.0);
    let b = make_sine_sequence(512, 3.0);
    let erp = Erp::with_band(10, 0.5);
    let exact = erp.distance(a.as_view(), b.as_view()).value();

    let mut group = c.benchmark_group("erp_distance_with_limit");
    group.bench_function("limit_above_exact", |bencher| {
        bencher.iter(|| erp.distance_with_limit(a.as_view(), b.as_view(), exact * 2.0));
    });
    group.bench_function("limit_prunes_early", |bencher| {
        bencher.iter(|| erp.distance_with_limit(a.as_view(), b.as_view(), exact * 0.01));
    });
    group.finish();
}

fn bench_erp_pairwise(c: &mut Criterion) {
    let sequences: Vec<Sequence> = (0..50)
        .map(|i| make_sine_sequence(128, i as f64 * 0.2))
        .collect();
    let erp = Erp::with_band(2, 0.5);

    c.bench_function("erp_pairwise_50x128_r2", |b| {
        b.iter(|| erp.pairwise(&sequences));
    });
}

criterion_group!(
    benches,
    bench_erp_distance,
    bench_erp_with_limit,
    bench_erp_pairwise
);
criterion_main!(benches);
