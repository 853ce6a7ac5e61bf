use std::sync::Arc;

use ark_bls12_381::{Fr, G1Affine};
use ark_std::{One, Zero};
use rayon::prelude::*;
use rust_kzg_bls12_381_primitives::{
    arith,
    blob::Blob,
    errors::KzgError,
    helpers,
    polynomial::{div_rem, PolynomialCoeffForm, PolynomialEvalForm},
    setup::TrustedSetup,
};
use tracing::trace;

/// Main interesting struct of the prover crate.
/// [KZG] holds the trusted setup and provides methods for committing to a
/// blob (either via a [Blob] itself, or a [PolynomialCoeffForm] or
/// [PolynomialEvalForm]) and for generating opening proofs.
///
/// The setup is shared behind an [Arc], so a [KZG] is cheap to clone and can
/// be used from several threads at once.
#[derive(Debug, Clone, PartialEq)]
pub struct KZG {
    setup: Arc<TrustedSetup>,
}

impl KZG {
    pub fn new(setup: Arc<TrustedSetup>) -> Self {
        Self { setup }
    }

    pub fn setup(&self) -> &TrustedSetup {
        &self.setup
    }

    /// Number of field elements in a blob for this setup.
    pub fn width(&self) -> usize {
        self.setup.width()
    }

    /// Commit to a polynomial in evaluation form, as the combination of the
    /// Lagrange setup points weighted by the evaluations.
    ///
    /// # Errors
    /// [KzgError::InvalidInput] unless the polynomial has exactly `W`
    /// evaluations. Polynomials are never truncated or padded here.
    pub fn commit_eval_form(&self, polynomial: &PolynomialEvalForm) -> Result<G1Affine, KzgError> {
        if polynomial.len() != self.width() {
            return Err(KzgError::InvalidInput(format!(
                "polynomial has {} evaluations but the setup width is {}",
                polynomial.len(),
                self.width()
            )));
        }
        trace!(width = polynomial.len(), "committing to evaluation form");
        helpers::g1_lincomb(self.setup.g1_lagrange(), polynomial.evaluations())
    }

    /// commit to a [Blob], by transforming it into a [PolynomialEvalForm] and
    /// then calling [KZG::commit_eval_form].
    pub fn commit_blob(&self, blob: &Blob) -> Result<G1Affine, KzgError> {
        let polynomial = blob.to_polynomial_eval_form()?;
        self.commit_eval_form(&polynomial)
    }

    /// Commit to a polynomial in coefficient form using the monomial setup
    /// points. The polynomial may have at most `W` coefficients.
    pub fn commit_coeff_form(&self, polynomial: &PolynomialCoeffForm) -> Result<G1Affine, KzgError> {
        if polynomial.len() > self.width() {
            return Err(KzgError::InvalidInput(format!(
                "polynomial has {} coefficients but the setup width is {}",
                polynomial.len(),
                self.width()
            )));
        }
        trace!(len = polynomial.len(), "committing to coefficient form");
        let bases = &self.setup.g1_monomial()[..polynomial.len()];
        helpers::g1_lincomb(bases, polynomial.coeffs())
    }

    /// Computes the proof that the polynomial evaluates to `y` at `z`, and
    /// returns it together with `y`.
    ///
    /// The proof commits to the quotient `q(X) = (p(X) - y) / (X - z)`,
    /// computed directly in evaluation form. When `z` is one of the roots of
    /// unity the quotient at that root has no direct formula and is computed
    /// from the other evaluations.
    pub fn compute_proof(
        &self,
        polynomial: &PolynomialEvalForm,
        z_fr: &Fr,
    ) -> Result<(G1Affine, Fr), KzgError> {
        if polynomial.len() != self.width() {
            return Err(KzgError::InvalidInput(format!(
                "polynomial has {} evaluations but the setup width is {}",
                polynomial.len(),
                self.width()
            )));
        }

        let domain = self.setup.domain();
        let eval_fr = polynomial.evaluations();
        let y_fr = polynomial.evaluate(z_fr, domain)?;

        // (ω^i - z), zero at most once
        let denominators: Vec<Fr> = domain
            .roots_of_unity()
            .iter()
            .map(|root_of_unity| *root_of_unity - z_fr)
            .collect();
        let inverses = arith::batch_inverse(&denominators);

        let mut quotient_poly: Vec<Fr> = eval_fr
            .iter()
            .zip(inverses)
            .map(|(fr, inverse)| (*fr - y_fr) * inverse)
            .collect();
        if let Some(index) = domain.index_of(z_fr) {
            quotient_poly[index] = self.compute_quotient_eval_on_domain(index, eval_fr, &y_fr);
        }

        let quotient_poly_eval_form = PolynomialEvalForm::new(quotient_poly)?;
        let proof = self.commit_eval_form(&quotient_poly_eval_form)?;
        trace!(?proof, "computed proof");
        Ok((proof, y_fr))
    }

    /// Computes the proof for an opening at the `index`-th root of unity.
    pub fn compute_proof_with_known_z_fr_index(
        &self,
        polynomial: &PolynomialEvalForm,
        index: usize,
    ) -> Result<(G1Affine, Fr), KzgError> {
        let z_fr = *self
            .setup
            .domain()
            .get_nth_root_of_unity(index)
            .ok_or_else(|| {
                KzgError::InvalidInput(format!(
                    "root of unity index {} is out of range for width {}",
                    index,
                    self.width()
                ))
            })?;
        self.compute_proof(polynomial, &z_fr)
    }

    /// The quotient `(p(X) - y) / (X - z)` evaluated at `z = ω^m`, where the
    /// division in evaluation form is undefined:
    /// `q(z) = Σ_{i != m} (p(ω^i) - y) · ω^i / (z · (z - ω^i))`.
    ///
    /// Ref: <https://github.com/ethereum/consensus-specs/blob/master/specs/deneb/polynomial-commitments.md#compute_quotient_eval_within_domain>
    fn compute_quotient_eval_on_domain(&self, index: usize, eval_fr: &[Fr], value_fr: &Fr) -> Fr {
        let roots = self.setup.domain().roots_of_unity();
        let z_fr = roots[index];

        // z is a root of unity, so neither z nor z - ω^i for i != index is zero.
        let denominators: Vec<Fr> = roots
            .iter()
            .enumerate()
            .map(|(i, omega_i)| {
                if i == index {
                    Fr::one()
                } else {
                    z_fr * (z_fr - omega_i)
                }
            })
            .collect();
        let inverses = arith::batch_inverse(&denominators);

        roots
            .iter()
            .zip(eval_fr)
            .zip(inverses)
            .enumerate()
            .filter(|(i, _)| *i != index)
            .fold(Fr::zero(), |quotient, (_, ((omega_i, fi), inverse))| {
                quotient + (*fi - value_fr) * omega_i * inverse
            })
    }

    /// Computes the proof for a polynomial in coefficient form, with the
    /// quotient obtained by exact long division by `X - z`.
    ///
    /// # Errors
    /// [KzgError::NonZeroRemainder] if the division leaves a remainder, and
    /// [KzgError::InvalidInput] if the polynomial has more than `W`
    /// coefficients.
    pub fn compute_proof_coeff_form(
        &self,
        polynomial: &PolynomialCoeffForm,
        z_fr: &Fr,
    ) -> Result<(G1Affine, Fr), KzgError> {
        if polynomial.len() > self.width() {
            return Err(KzgError::InvalidInput(format!(
                "polynomial has {} coefficients but the setup width is {}",
                polynomial.len(),
                self.width()
            )));
        }

        let y_fr = polynomial.evaluate(z_fr);
        // A constant polynomial has a zero quotient.
        if polynomial.len() < 2 {
            return Ok((G1Affine::identity(), y_fr));
        }

        let mut shifted = polynomial.coeffs().to_vec();
        shifted[0] -= y_fr;
        let (quotient, remainder) = div_rem(&shifted, &[-*z_fr, Fr::one()])?;
        if remainder.iter().any(|r| !r.is_zero()) {
            return Err(KzgError::NonZeroRemainder);
        }

        let proof = self.commit_coeff_form(&PolynomialCoeffForm::new(quotient))?;
        Ok((proof, y_fr))
    }

    /// Computes the blob proof: the opening at the Fiat-Shamir challenge
    /// derived from the blob and its commitment.
    /// Ref: <https://github.com/ethereum/consensus-specs/blob/master/specs/deneb/polynomial-commitments.md#compute_blob_kzg_proof>
    pub fn compute_blob_proof(&self, blob: &Blob, commitment: &G1Affine) -> Result<G1Affine, KzgError> {
        let polynomial = blob.to_polynomial_eval_form()?;
        let evaluation_challenge = helpers::compute_challenge(blob, commitment)?;
        let (proof, _) = self.compute_proof(&polynomial, &evaluation_challenge)?;
        Ok(proof)
    }

    /// Folds `blobs` into `Σ scalars[i] · blobs[i]` and commits to the result.
    /// By linearity this equals the same combination of the individual
    /// commitments. No blobs commit to the point at infinity.
    pub fn commit_linear_combination(
        &self,
        blobs: &[Blob],
        scalars: &[Fr],
    ) -> Result<G1Affine, KzgError> {
        if blobs.len() != scalars.len() {
            return Err(KzgError::InvalidInput(format!(
                "{} blobs but {} scalars",
                blobs.len(),
                scalars.len()
            )));
        }
        if blobs.is_empty() {
            return Ok(G1Affine::identity());
        }

        let vectors = blobs
            .par_iter()
            .map(Blob::to_field_elements)
            .collect::<Result<Vec<_>, _>>()?;
        let folded = helpers::fr_lincomb(&vectors, scalars)?;
        trace!(blobs = blobs.len(), "committing to folded blobs");
        self.commit_eval_form(&PolynomialEvalForm::new(folded)?)
    }
}
