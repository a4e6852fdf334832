use agora_ecc::{Curve, FieldElement};
use criterion::{criterion_group, criterion_main, Criterion};

use rand::Rng;

// largest prime below 2^64
const PRIME: u64 = 18_446_744_073_709_551_557;

fn bench_field_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_ops");

    let mut rng = rand::thread_rng();
    let n = 50_usize;
    let random_elements = (0..n)
        .map(|_| FieldElement::new(i128::from(rng.gen_range(1..PRIME)), PRIME))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    group.bench_function("inverse", |b| {
        let i = rng.gen_range(0..n);
        b.iter(|| random_elements[i].inverse())
    });

    group.bench_function("pow", |b| {
        let i = rng.gen_range(0..n);
        let exponent = rng.gen::<i64>();
        b.iter(|| random_elements[i].pow(i128::from(exponent)))
    });

    group.finish();
}

fn bench_point_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_ops");

    let fe = |value| FieldElement::new(value, 223).unwrap();
    let curve = Curve::new(fe(0), fe(7));
    let generator = curve.point(fe(47), fe(71)).unwrap();

    group.bench_function("double", |b| b.iter(|| generator.double()));

    group.bench_function("scalar_mul", |b| {
        b.iter(|| generator.scalar_mul(0xdead_beef))
    });

    group.finish();
}

criterion_group!(benches, bench_field_ops, bench_point_ops);
criterion_main!(benches);
