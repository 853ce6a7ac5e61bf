//! ## Library Design / Architecture
//!
//! Primitives shared by the prover and verifier crates: everything needed to
//! commit to a blob and to check an opening, except the group arithmetic,
//! which comes from arkworks.
//!
//! ### Data Types
//!
//! The main data pipeline goes:
//! > user data -> [blob::Blob] -> [polynomial::PolynomialEvalForm] -> KZG
//! > Commitment / Proof
//!
//! - Blob: `W` BLS12-381 scalar field elements, 32 big-endian bytes each.
//! - Polynomial: the blob read as evaluations over the `W`-th roots of unity
//!   ([domain::Domain]), or the coefficients obtained from them by IFFT
//!   ([fft]).
//! - Trusted setup ([setup::TrustedSetup]): the monomial G1/G2 points and the
//!   Lagrange G1 points, passed explicitly to every prover and verifier call.
//!
//! Field-level code ([arith], [fft], [domain], [polynomial]) is generic over
//! arkworks fields, so it can be exercised over small toy fields.

pub mod arith;
pub mod blob;
pub mod consts;
pub mod domain;
pub mod errors;
pub mod fft;
pub mod helpers;
pub mod polynomial;
pub mod setup;
pub mod traits;
