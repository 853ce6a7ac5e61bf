use ark_ff::FftField;
use tracing::debug;

use crate::{errors::KzgError, fft};

/// The multiplicative subgroup of `W`-th roots of unity that evaluation-form
/// polynomials are defined over.
///
/// `roots_of_unity()[i]` is `ω^i` for the primitive root `ω` returned by
/// [FftField::get_root_of_unity]. For the BLS12-381 scalar field this is
/// `7^((p - 1) / W)`. A domain is built once and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain<F> {
    roots_of_unity: Vec<F>,
    inverse_roots_of_unity: Vec<F>,
    width_inverse: F,
}

impl<F: FftField> Domain<F> {
    /// Builds the domain of the given width.
    ///
    /// # Errors
    /// `width` must be a non-zero power of two and the field must contain a
    /// root of unity of that order.
    pub fn new(width: usize) -> Result<Self, KzgError> {
        if width == 0 || !width.is_power_of_two() {
            return Err(KzgError::InvalidInput(format!(
                "domain width {} is not a power of two",
                width
            )));
        }

        let root_of_unity = F::get_root_of_unity(width as u64).ok_or_else(|| {
            KzgError::FFTError(format!("field has no root of unity of order {}", width))
        })?;
        let roots_of_unity = expand_root_of_unity(&root_of_unity, width)?;

        // ω^-i == ω^(W - i)
        let inverse_roots_of_unity = (0..width)
            .map(|i| roots_of_unity[(width - i) % width])
            .collect();

        let width_inverse = F::from(width as u64)
            .inverse()
            .ok_or(KzgError::InvalidDenominator)?;

        debug!(width, "built evaluation domain");

        Ok(Self {
            roots_of_unity,
            inverse_roots_of_unity,
            width_inverse,
        })
    }

    pub fn width(&self) -> usize {
        self.roots_of_unity.len()
    }

    pub fn roots_of_unity(&self) -> &[F] {
        &self.roots_of_unity
    }

    pub fn inverse_roots_of_unity(&self) -> &[F] {
        &self.inverse_roots_of_unity
    }

    /// `1 / W` in the field.
    pub fn width_inverse(&self) -> &F {
        &self.width_inverse
    }

    pub fn get_nth_root_of_unity(&self, i: usize) -> Option<&F> {
        self.roots_of_unity.get(i)
    }

    /// Position of `z` in the domain, if `z` is a `W`-th root of unity.
    pub fn index_of(&self, z: &F) -> Option<usize> {
        self.roots_of_unity.iter().position(|root| root == z)
    }

    /// Coefficient form to evaluation form. `coeffs` must have exactly `W`
    /// entries.
    pub fn fft(&self, coeffs: &[F]) -> Result<Vec<F>, KzgError> {
        fft::fft(coeffs, &self.roots_of_unity)
    }

    /// Evaluation form to coefficient form: the transform over the inverse
    /// roots, scaled by `1 / W`.
    pub fn ifft(&self, evaluations: &[F]) -> Result<Vec<F>, KzgError> {
        let mut coeffs = fft::fft(evaluations, &self.inverse_roots_of_unity)?;
        for coeff in coeffs.iter_mut() {
            *coeff *= self.width_inverse;
        }
        Ok(coeffs)
    }
}

/// Expands `root` into `[1, root, root^2, ..]` until the powers cycle back to
/// one, checking that this takes exactly `width` steps.
fn expand_root_of_unity<F: FftField>(root: &F, width: usize) -> Result<Vec<F>, KzgError> {
    let mut roots = Vec::with_capacity(width);
    roots.push(F::one());

    let mut current = *root;
    while !current.is_one() {
        if roots.len() >= width {
            return Err(KzgError::FFTError(format!(
                "root of unity has order greater than {}",
                width
            )));
        }
        roots.push(current);
        current *= root;
    }

    if roots.len() != width {
        return Err(KzgError::FFTError(format!(
            "root of unity has order {} instead of {}",
            roots.len(),
            width
        )));
    }
    Ok(roots)
}
