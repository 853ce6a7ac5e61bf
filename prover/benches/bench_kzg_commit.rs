use std::{sync::Arc, time::Duration};

use ark_bls12_381::Fr;
use ark_ff::UniformRand;
use criterion::{criterion_group, criterion_main, Criterion};
use rust_kzg_bls12_381_primitives::{blob::Blob, setup::TrustedSetup};
use rust_kzg_bls12_381_prover::kzg::KZG;

fn random_blob(width: usize) -> Blob {
    let mut rng = rand::thread_rng();
    let elements: Vec<Fr> = (0..width).map(|_| Fr::rand(&mut rng)).collect();
    Blob::from_field_elements(&elements)
}

fn bench_kzg_commit(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let tau = Fr::rand(&mut rng);

    for width in [1024usize, 4096] {
        let setup = TrustedSetup::insecure_from_secret(&tau, width).unwrap();
        let kzg = KZG::new(Arc::new(setup));
        let blob = random_blob(width);
        let coeffs = blob
            .to_polynomial_eval_form()
            .unwrap()
            .to_coeff_form(kzg.setup().domain())
            .unwrap();

        c.bench_function(&format!("bench_kzg_commit_blob_{}", width), |b| {
            b.iter(|| kzg.commit_blob(&blob).unwrap())
        });

        c.bench_function(&format!("bench_kzg_commit_coeff_form_{}", width), |b| {
            b.iter(|| kzg.commit_coeff_form(&coeffs).unwrap())
        });
    }
}

fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_secs(5))  // Warm-up time
        .measurement_time(Duration::from_secs(10))  // Measurement time
        .sample_size(10) // Number of samples to take
}

criterion_group!(
    name = benches;
    config = criterion_config();
    targets = bench_kzg_commit
);
criterion_main!(benches);
