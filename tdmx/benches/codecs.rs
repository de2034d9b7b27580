//! Encode and decode throughput over in-memory streams

use std::io::Cursor;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tdmx::{
    from_emx, from_fortran_square, from_mdf, to_emx, to_fortran, to_mdf, Array, LabeledMatrix,
    Shape,
};

const SIDE: usize = 500;

fn demand_matrix() -> LabeledMatrix {
    let mut rng = StdRng::seed_from_u64(42);
    let data = (0..SIDE * SIDE)
        .map(|_| rng.gen_range(0.0f32..500.0))
        .collect();
    let values = Array::from_vec(data, Shape::Matrix(SIDE, SIDE)).unwrap();
    let labels = (1..=SIDE as i32).collect();
    LabeledMatrix::square(values, labels).unwrap()
}

fn bench_mdf(c: &mut Criterion) {
    let matrix = demand_matrix();
    let mut encoded = Vec::new();
    to_mdf(matrix.clone(), &mut encoded).unwrap();

    c.bench_function("mdf_encode_500", |b| {
        b.iter(|| {
            let mut bytes = Vec::with_capacity(encoded.len());
            to_mdf(black_box(matrix.clone()), &mut bytes).unwrap();
            bytes
        })
    });
    c.bench_function("mdf_decode_500", |b| {
        b.iter(|| from_mdf(&mut Cursor::new(encoded.as_slice()), false, false).unwrap())
    });
}

fn bench_emx(c: &mut Criterion) {
    let matrix = demand_matrix();
    let mut encoded = Vec::new();
    to_emx(matrix.clone(), &mut encoded, SIDE).unwrap();

    c.bench_function("emx_decode_500", |b| {
        b.iter(|| from_emx(&mut Cursor::new(encoded.as_slice()), None, false).unwrap())
    });
}

fn bench_fortran(c: &mut Criterion) {
    let matrix = demand_matrix();
    let mut encoded = Vec::new();
    to_fortran(matrix.clone(), &mut encoded, true, 1).unwrap();

    c.bench_function("fortran_square_decode_500", |b| {
        b.iter(|| from_fortran_square(&mut Cursor::new(encoded.as_slice()), None, false).unwrap())
    });
}

criterion_group!(benches, bench_mdf, bench_emx, bench_fortran);
criterion_main!(benches);
