use criterion::{black_box, criterion_group, criterion_main, Criterion};
use natal::aspects::AspectCalculator;
use natal::{BodyPosition, CelestialBody, House, ZodiacSign};

fn bench_calculate_aspect(c: &mut Criterion) {
    let calculator = AspectCalculator::new();

    c.bench_function("calculate_aspect", |b| {
        b.iter(|| calculator.calculate_aspect(black_box(100.0), black_box(218.5)))
    });
}

fn bench_compute_aspects(c: &mut Criterion) {
    let calculator = AspectCalculator::new();

    let positions: Vec<BodyPosition> = CelestialBody::ALL
        .iter()
        .enumerate()
        .map(|(i, &body)| BodyPosition {
            body,
            sign: ZodiacSign::from_index(i as i64 * 5),
            degree: (i as f64 * 7.3) % 30.0,
            minute: 0,
            house: House::from_sign_offset(i * 5 % 12, 0),
            retrograde: false,
        })
        .collect();

    c.bench_function("compute_aspects", |b| {
        b.iter(|| calculator.compute_aspects(black_box(&positions)))
    });
}

criterion_group!(benches, bench_calculate_aspect, bench_compute_aspects);
criterion_main!(benches);
