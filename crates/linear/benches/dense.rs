use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linear::{Dense, LSolver};
use nalgebra::{DMatrix, DVector};

fn bench_dense(cols: usize) {
    // Diagonally dominant A with an anti-diagonal permutation, so the solver needs to do
    // row-swapping at every step
    let mat_a = DMatrix::from_fn(cols, cols, |i, j| {
        let i = cols - 1 - i;
        if i == j {
            cols as f64
        } else {
            ((i * cols + j) % 7) as f64 / (7.0 * cols as f64)
        }
    });
    let mat_a_original = mat_a.clone();

    let x_expect = DVector::from_fn(cols, |i, _| (i as f64).sin());
    let b = &mat_a * &x_expect;

    let dense = Dense::<f64>::new();
    let x = dense.solve(mat_a, b.clone()).unwrap();

    let b_comp = mat_a_original * &x;
    let norm = (b - b_comp).norm() / (cols as f64).sqrt();

    assert!(norm < 1e-9);
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("Dense solver 5", |b| b.iter(|| bench_dense(black_box(5))));
    c.bench_function("Dense solver 10", |b| b.iter(|| bench_dense(black_box(10))));
    c.bench_function("Dense solver 50", |b| b.iter(|| bench_dense(black_box(50))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
