use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use tirepressure::calculator::{calculate_pair, calculate_tire_pressure};
use tirepressure::config::FormState;
use tirepressure::multipliers::WheelPosition;

fn bench_pressure(c: &mut Criterion) {
    let form = FormState::default();
    let input = form.input_for(WheelPosition::Rear);

    c.bench_function("calculate_tire_pressure", |b| {
        b.iter(|| calculate_tire_pressure(black_box(&input)))
    });

    c.bench_function("calculate_pair", |b| {
        b.iter(|| calculate_pair(black_box(&input)))
    });
}

criterion_group!(benches, bench_pressure);
criterion_main!(benches);
