#![allow(dead_code)]

use ark_ff::fields::{Fp64, MontBackend, MontConfig};

/// The prime field of order 17. Its multiplicative group has order 16, so it
/// has roots of unity for every width up to 16.
#[derive(MontConfig)]
#[modulus = "17"]
#[generator = "3"]
pub struct F17Config;
pub type F17 = Fp64<MontBackend<F17Config, 1>>;

pub fn f17(values: &[u64]) -> Vec<F17> {
    values.iter().map(|&v| F17::from(v)).collect()
}
