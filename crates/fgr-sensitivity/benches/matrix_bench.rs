use criterion::{criterion_group, criterion_main, Criterion};
use fgr_sensitivity::{propagate_variance, Correlation, EvaluationPoint, SensitivityEngine};
use fgr_types::config::SensitivityConfig;
use fgr_types::specimen::roadrunner_matrix;
use std::hint::black_box;

fn bench_single_breakdown(c: &mut Criterion) {
    let config = SensitivityConfig::default();
    let point = EvaluationPoint::new(1173.0, 6.0, 93.0);

    c.bench_function("storms_breakdown_single", |b| {
        b.iter(|| propagate_variance(Correlation::Storms, black_box(&point), &config))
    });
}

fn bench_full_matrix(c: &mut Criterion) {
    let engine = SensitivityEngine::with_defaults();
    let specimens = roadrunner_matrix();

    let mut group = c.benchmark_group("matrix_36_specimens");
    group.bench_function("sequential", |b| {
        b.iter(|| black_box(engine.evaluate_matrix(&specimens)))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(engine.evaluate_matrix_par(&specimens)))
    });
    group.finish();
}

criterion_group!(benches, bench_single_breakdown, bench_full_matrix);
criterion_main!(benches);
