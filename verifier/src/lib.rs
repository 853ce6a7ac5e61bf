//! Verification side of KZG over BLS12-381.
//!
//! [verify] checks single openings, either from decoded points and scalars
//! or from their byte encodings, and blob proofs at the Fiat-Shamir
//! challenge. [batch] checks many openings with one pairing check, using a
//! random linear combination of the individual equations.
//!
//! A proof that does not verify is reported as `Ok(false)`. Errors are kept
//! for inputs that cannot be decoded or have inconsistent shapes.

pub mod batch;
pub mod verify;
