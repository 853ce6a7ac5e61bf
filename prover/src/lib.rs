//! Commitment side of KZG over BLS12-381.
//!
//! [kzg::KZG] wraps a shared [rust_kzg_bls12_381_primitives::setup::TrustedSetup]
//! and commits to blobs and polynomials, and computes opening proofs for them.
//! Proofs are checked by the `rust-kzg-bls12-381-verifier` crate.

pub mod kzg;
