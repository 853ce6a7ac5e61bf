use ark_bls12_381::Fr;
use ark_ff::{FftField, Field, Zero};

use crate::{
    arith,
    domain::Domain,
    errors::{KzgError, PolynomialError},
};

/// Evaluates a polynomial given in evaluation form at an arbitrary point `z`
/// with the barycentric formula
/// `f(z) = (z^W - 1) / W * Σ f_i · ω^i / (z - ω^i)`.
///
/// When `z` is itself a root of unity `ω^i` the formula would divide by zero;
/// `evaluations[i]` is returned directly instead.
///
/// Ref: <https://github.com/ethereum/consensus-specs/blob/master/specs/deneb/polynomial-commitments.md#evaluate_polynomial_in_evaluation_form>
pub fn evaluate_polynomial_in_evaluation_form<F: FftField>(
    evaluations: &[F],
    z: &F,
    domain: &Domain<F>,
) -> Result<F, KzgError> {
    let width = domain.width();
    if evaluations.len() != width {
        return Err(KzgError::InvalidInput(format!(
            "polynomial has {} evaluations but the domain width is {}",
            evaluations.len(),
            width
        )));
    }

    if let Some(index) = domain.index_of(z) {
        return Ok(evaluations[index]);
    }

    // z is off the domain, so none of these is zero.
    let denominators: Vec<F> = domain.roots_of_unity().iter().map(|root| *z - root).collect();
    let inverses = arith::batch_inverse(&denominators);

    let sum = evaluations
        .iter()
        .zip(domain.roots_of_unity())
        .zip(inverses)
        .fold(F::zero(), |acc, ((f_i, root), inverse)| {
            acc + *f_i * root * inverse
        });

    let vanishing = z.pow([width as u64]) - F::one();
    Ok(sum * vanishing * domain.width_inverse())
}

/// Values of the `W` Lagrange basis polynomials of the domain at `z`. If `z`
/// is the root `ω^k`, this is the `k`-th unit vector.
pub fn lagrange_basis_evaluations<F: FftField>(domain: &Domain<F>, z: &F) -> Vec<F> {
    let width = domain.width();
    if let Some(index) = domain.index_of(z) {
        let mut unit = vec![F::zero(); width];
        unit[index] = F::one();
        return unit;
    }

    let factor = (z.pow([width as u64]) - F::one()) * domain.width_inverse();
    let denominators: Vec<F> = domain.roots_of_unity().iter().map(|root| *z - root).collect();
    arith::batch_inverse(&denominators)
        .into_iter()
        .zip(domain.roots_of_unity())
        .map(|(inverse, root)| factor * root * inverse)
        .collect()
}

/// Evaluates a coefficient-form polynomial (lowest degree first) at `z` using
/// Horner's method.
pub fn evaluate_coeff_form<F: Field>(coeffs: &[F], z: &F) -> F {
    coeffs
        .iter()
        .rev()
        .fold(F::zero(), |acc, coeff| acc * z + coeff)
}

/// Schoolbook product of two coefficient-form polynomials.
pub fn multiply<F: Field>(a: &[F], b: &[F]) -> Vec<F> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut product = vec![F::zero(); a.len() + b.len() - 1];
    for (i, a_i) in a.iter().enumerate() {
        for (j, b_j) in b.iter().enumerate() {
            product[i + j] += *a_i * b_j;
        }
    }
    product
}

/// Long division of coefficient-form polynomials (lowest degree first).
///
/// Returns `(quotient, remainder)` with `dividend = quotient * divisor +
/// remainder` and `deg(remainder) < deg(divisor)`. The remainder always has
/// `divisor.len() - 1` entries, possibly all zero.
///
/// # Errors
/// - [PolynomialError::InvalidDivisor] if the divisor is empty or its
///   leading (last) coefficient is zero.
/// - [PolynomialError::DegreeMismatch] if `deg(dividend) < deg(divisor)`.
pub fn div_rem<F: Field>(dividend: &[F], divisor: &[F]) -> Result<(Vec<F>, Vec<F>), KzgError> {
    let leading = divisor
        .last()
        .ok_or_else(|| PolynomialError::InvalidDivisor("divisor is empty".to_string()))?;
    if leading.is_zero() {
        return Err(PolynomialError::InvalidDivisor(
            "leading coefficient of the divisor is zero".to_string(),
        )
        .into());
    }
    if dividend.len() < divisor.len() {
        return Err(PolynomialError::DegreeMismatch {
            dividend_degree: dividend.len().saturating_sub(1),
            divisor_degree: divisor.len() - 1,
        }
        .into());
    }

    let leading_inverse = arith::inverse(leading);
    let divisor_degree = divisor.len() - 1;
    let quotient_len = dividend.len() - divisor_degree;

    let mut remainder = dividend.to_vec();
    let mut quotient = vec![F::zero(); quotient_len];

    // Walk from the highest degree down, cancelling the top coefficient each step.
    for shift in (0..quotient_len).rev() {
        let coefficient = remainder[shift + divisor_degree] * leading_inverse;
        quotient[shift] = coefficient;
        for (j, divisor_j) in divisor.iter().enumerate() {
            remainder[shift + j] -= coefficient * divisor_j;
        }
    }

    remainder.truncate(divisor_degree);
    Ok((quotient, remainder))
}

/// Quotient of the long division of `dividend` by `divisor`. The remainder is
/// discarded, so this is only meaningful when the division is known to be
/// exact, e.g. `(P(X) - P(z)) / (X - z)`. Use [div_rem] to check.
pub fn long_divide<F: Field>(dividend: &[F], divisor: &[F]) -> Result<Vec<F>, KzgError> {
    div_rem(dividend, divisor).map(|(quotient, _)| quotient)
}

#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialEvalForm {
    /// evaluations[i] is the value of the polynomial at the i-th root of
    /// unity of a domain of the same width.
    evaluations: Vec<Fr>,
}

impl PolynomialEvalForm {
    /// Creates a new [PolynomialEvalForm] from evaluations over a domain of
    /// width `evals.len()`. The width must be a non-zero power of two; the
    /// evaluations are never padded.
    pub fn new(evals: Vec<Fr>) -> Result<Self, KzgError> {
        if evals.is_empty() || !evals.len().is_power_of_two() {
            return Err(KzgError::InvalidInput(format!(
                "evaluation form length {} is not a power of two",
                evals.len()
            )));
        }
        Ok(Self { evaluations: evals })
    }

    pub fn evaluations(&self) -> &[Fr] {
        &self.evaluations
    }

    pub fn len(&self) -> usize {
        self.evaluations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluations.is_empty()
    }

    pub fn get_evaluation(&self, i: usize) -> Option<&Fr> {
        self.evaluations.get(i)
    }

    /// Evaluates the polynomial at `z`. See
    /// [evaluate_polynomial_in_evaluation_form].
    pub fn evaluate(&self, z: &Fr, domain: &Domain<Fr>) -> Result<Fr, KzgError> {
        evaluate_polynomial_in_evaluation_form(&self.evaluations, z, domain)
    }

    /// Converts the polynomial to coefficient form by an IFFT over `domain`.
    pub fn to_coeff_form(&self, domain: &Domain<Fr>) -> Result<PolynomialCoeffForm, KzgError> {
        Ok(PolynomialCoeffForm::new(domain.ifft(&self.evaluations)?))
    }

    /// Concatenated 32-byte big-endian encodings of the evaluations.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.evaluations
            .iter()
            .flat_map(arith::fr_to_bytes_be)
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialCoeffForm {
    /// coeffs[i] is the coefficient of X^i.
    coeffs: Vec<Fr>,
}

impl PolynomialCoeffForm {
    pub fn new(coeffs: Vec<Fr>) -> Self {
        Self { coeffs }
    }

    pub fn coeffs(&self) -> &[Fr] {
        &self.coeffs
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn get_at_index(&self, i: usize) -> Option<&Fr> {
        self.coeffs.get(i)
    }

    /// Returns the degree of the polynomial, ignoring zero leading coefficients.
    pub fn degree(&self) -> usize {
        self.coeffs
            .iter()
            .rposition(|coeff| !coeff.is_zero())
            .unwrap_or(0)
    }

    pub fn evaluate(&self, z: &Fr) -> Fr {
        evaluate_coeff_form(&self.coeffs, z)
    }

    /// Converts the polynomial to evaluation form by an FFT over `domain`.
    /// Polynomials with fewer than `W` coefficients are extended with zero
    /// coefficients, which does not change the polynomial.
    pub fn to_eval_form(&self, domain: &Domain<Fr>) -> Result<PolynomialEvalForm, KzgError> {
        if self.coeffs.len() > domain.width() {
            return Err(KzgError::InvalidInput(format!(
                "polynomial has {} coefficients but the domain width is {}",
                self.coeffs.len(),
                domain.width()
            )));
        }
        let mut coeffs = self.coeffs.clone();
        coeffs.resize(domain.width(), Fr::from(0u64));
        PolynomialEvalForm::new(domain.fft(&coeffs)?)
    }
}
