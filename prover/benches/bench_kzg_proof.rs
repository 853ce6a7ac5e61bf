use std::{sync::Arc, time::Duration};

use ark_bls12_381::Fr;
use ark_ff::UniformRand;
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use rust_kzg_bls12_381_primitives::{blob::Blob, consts::FIELD_ELEMENTS_PER_BLOB, setup::TrustedSetup};
use rust_kzg_bls12_381_prover::kzg::KZG;

fn bench_kzg_proof(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let tau = Fr::rand(&mut rng);
    let setup = TrustedSetup::insecure_from_secret(&tau, FIELD_ELEMENTS_PER_BLOB).unwrap();
    let kzg = KZG::new(Arc::new(setup));

    let elements: Vec<Fr> = (0..FIELD_ELEMENTS_PER_BLOB)
        .map(|_| Fr::rand(&mut rng))
        .collect();
    let blob = Blob::from_field_elements(&elements);
    let poly = blob.to_polynomial_eval_form().unwrap();
    let commitment = kzg.commit_blob(&blob).unwrap();

    c.bench_function("bench_kzg_proof_random_point", |b| {
        let z = Fr::rand(&mut rng);
        b.iter(|| kzg.compute_proof(&poly, &z).unwrap())
    });

    c.bench_function("bench_kzg_proof_root_of_unity", |b| {
        let index = rand::thread_rng().gen_range(0..FIELD_ELEMENTS_PER_BLOB);
        b.iter(|| kzg.compute_proof_with_known_z_fr_index(&poly, index).unwrap())
    });

    c.bench_function("bench_kzg_blob_proof", |b| {
        b.iter(|| kzg.compute_blob_proof(&blob, &commitment).unwrap())
    });
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
    targets = bench_kzg_proof
);
criterion_main!(benches);
