// -*- mode: rust; -*-
//
// This file is part of curve25519-ladder.
// See LICENSE for licensing information.

//! Benchmark the Montgomery ladder.

use criterion::{criterion_group, criterion_main, Criterion};

use curve25519_ladder::{Curve25519Point, Scalar};

fn bench_scalar_mul(c: &mut Criterion) {
    let base = Curve25519Point::basepoint();
    // 2^254 + 987654321: a full-width scalar, 255 ladder iterations.
    let k = Scalar::from_decimal(
        "28948022309329048855892746252171976963317496166410141009864396001979270064305",
    )
    .unwrap();

    c.bench_function("scalar_mul_255_bits", move |b| {
        b.iter(|| base.mul(&k).unwrap())
    });
}

fn bench_double(c: &mut Criterion) {
    let base = Curve25519Point::basepoint();

    c.bench_function("affine_double", move |b| b.iter(|| base.double().unwrap()));
}

criterion_group! {
    name = ladder_benches;
    config = Criterion::default();
    targets =
        bench_scalar_mul,
        bench_double,
}
criterion_main! {
    ladder_benches,
}
