// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polyterm_polynomial::{DensePolynomial, Polynomial, SparsePolynomial};

fn create_test_polynomials(degree: usize) -> (SparsePolynomial, SparsePolynomial) {
    let mut coeffs1 = Vec::new();
    let mut coeffs2 = Vec::new();

    for i in 0..=degree {
        coeffs1.push(i as f64 + 1.0);
        coeffs2.push((i + 1) as f64 * 2.0);
    }

    (
        SparsePolynomial::from(&DensePolynomial::new(coeffs1)),
        SparsePolynomial::from(&DensePolynomial::new(coeffs2)),
    )
}

fn benchmark_polynomial_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_addition");

    for degree in [10, 50, 100, 500] {
        let (poly1, poly2) = create_test_polynomials(degree);
        let (dense1, dense2) = (poly1.to_dense(), poly2.to_dense());

        group.bench_function(&format!("sparse_degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.add(&poly2)))
        });
        group.bench_function(&format!("dense_degree_{}", degree), |b| {
            b.iter(|| black_box(dense1.add(&dense2)))
        });
    }

    group.finish();
}

fn benchmark_polynomial_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_multiplication");

    for degree in [5, 10, 20, 50] {
        let (poly1, poly2) = create_test_polynomials(degree);

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.multiply(&poly2).unwrap()))
        });
    }

    group.finish();
}

fn benchmark_polynomial_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_evaluation");

    for degree in [10, 50, 100, 500] {
        let (poly1, _) = create_test_polynomials(degree);
        let x = 0.75;

        group.bench_function(&format!("degree_{}", degree), |b| {
            b.iter(|| black_box(poly1.evaluate(x)))
        });
    }

    group.finish();
}

fn benchmark_text_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_form");

    for degree in [10, 100, 1000] {
        let (poly, _) = create_test_polynomials(degree);
        let line = poly.to_string();

        group.bench_function(&format!("render_degree_{}", degree), |b| {
            b.iter(|| black_box(poly.to_string()))
        });
        group.bench_function(&format!("parse_degree_{}", degree), |b| {
            b.iter(|| black_box(SparsePolynomial::parse(&line).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_polynomial_addition,
    benchmark_polynomial_multiplication,
    benchmark_polynomial_evaluation,
    benchmark_text_form
);
criterion_main!(benches);
