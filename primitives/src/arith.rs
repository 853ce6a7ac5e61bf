//! Modular arithmetic helpers over prime fields.
//!
//! Addition, subtraction and multiplication come from the arkworks field
//! types, which keep every value reduced into `[0, p)`. What lives here is
//! the part with conventions attached: inversion of zero, division, and the
//! canonical 32-byte big-endian encoding of BLS12-381 scalars.

use ark_bls12_381::Fr;
use ark_ff::{BigInteger, Field, PrimeField};

use crate::{consts::BYTES_PER_FIELD_ELEMENT, errors::KzgError};

/// Returns the multiplicative inverse of `x`.
///
/// Zero has no inverse. By convention `inverse(0) == 0`; this is a sentinel,
/// not an inverse, and callers that may see a zero denominator must use
/// [divide] (which rejects it) or check for zero themselves.
pub fn inverse<F: Field>(x: &F) -> F {
    x.inverse().unwrap_or_else(F::zero)
}

/// Returns `x / y`.
///
/// # Errors
/// [KzgError::InvalidDenominator] when `y` is zero. The zero sentinel of
/// [inverse] is never propagated as a quotient.
pub fn divide<F: Field>(x: &F, y: &F) -> Result<F, KzgError> {
    if y.is_zero() {
        return Err(KzgError::InvalidDenominator);
    }
    Ok(*x * inverse(y))
}

/// Inverts every element of `values` with a single field inversion
/// (Montgomery's trick). Zero entries stay zero, matching [inverse].
pub fn batch_inverse<F: Field>(values: &[F]) -> Vec<F> {
    let mut inverses = values.to_vec();
    ark_ff::batch_inversion(&mut inverses);
    inverses
}

/// Serializes a scalar as 32 big-endian bytes.
pub fn fr_to_bytes_be(fr: &Fr) -> [u8; BYTES_PER_FIELD_ELEMENT] {
    let mut bytes = [0u8; BYTES_PER_FIELD_ELEMENT];
    bytes.copy_from_slice(&fr.into_bigint().to_bytes_be());
    bytes
}

/// Parses 32 big-endian bytes as a scalar.
///
/// The encoding must be canonical: values greater than or equal to the BLS
/// modulus are rejected instead of being reduced.
pub fn fr_from_bytes_be(bytes: &[u8]) -> Result<Fr, KzgError> {
    if bytes.len() != BYTES_PER_FIELD_ELEMENT {
        return Err(KzgError::InvalidInputLength {
            expected: BYTES_PER_FIELD_ELEMENT,
            actual: bytes.len(),
        });
    }

    // Round trip through the reduced value: only canonical encodings survive.
    let fr = Fr::from_be_bytes_mod_order(bytes);
    if fr_to_bytes_be(&fr) != bytes {
        return Err(KzgError::InvalidFieldElement(
            "value is not smaller than the BLS modulus".to_string(),
        ));
    }
    Ok(fr)
}
