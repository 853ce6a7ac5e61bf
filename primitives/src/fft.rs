//! Radix-2 FFT over a caller supplied set of roots of unity.
//!
//! The direction of the transform is decided by the domain passed in: the
//! roots of unity map coefficients to evaluations, the inverse roots (with a
//! final `1 / n` scaling) map evaluations back. [crate::domain::Domain] wraps
//! both conventions.

use ark_ff::Field;

use crate::{consts::PARALLEL_FFT_THRESHOLD, errors::KzgError};

/// Transforms `values` over `domain`, where `domain[i]` is the `i`-th power
/// of an `n`-th root of unity and `n = values.len()`.
///
/// # Errors
/// [KzgError::InvalidInput] if `values` and `domain` differ in length, or if
/// the length is zero or not a power of two.
pub fn fft<F: Field>(values: &[F], domain: &[F]) -> Result<Vec<F>, KzgError> {
    if values.len() != domain.len() {
        return Err(KzgError::InvalidInput(format!(
            "FFT input has {} values but the domain has {} points",
            values.len(),
            domain.len()
        )));
    }
    if values.is_empty() || !values.len().is_power_of_two() {
        return Err(KzgError::InvalidInput(format!(
            "FFT length {} is not a power of two",
            values.len()
        )));
    }

    Ok(fft_unchecked(values, domain))
}

fn fft_unchecked<F: Field>(values: &[F], domain: &[F]) -> Vec<F> {
    let n = values.len();
    if n == 1 {
        return values.to_vec();
    }
    let half = n / 2;

    let evens: Vec<F> = values.iter().step_by(2).copied().collect();
    let odds: Vec<F> = values.iter().skip(1).step_by(2).copied().collect();
    let sub_domain: Vec<F> = domain.iter().step_by(2).copied().collect();

    let (left, right) = if n >= PARALLEL_FFT_THRESHOLD {
        rayon::join(
            || fft_unchecked(&evens, &sub_domain),
            || fft_unchecked(&odds, &sub_domain),
        )
    } else {
        (
            fft_unchecked(&evens, &sub_domain),
            fft_unchecked(&odds, &sub_domain),
        )
    };

    let mut out = vec![F::zero(); n];
    for (i, (l, r)) in left.iter().zip(right.iter()).enumerate() {
        let y_times_root = *r * domain[i];
        out[i] = *l + y_times_root;
        out[i + half] = *l - y_times_root;
    }
    out
}
