use ark_bls12_381::{Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{AffineRepr, CurveGroup};
use ark_poly::{EvaluationDomain, GeneralEvaluationDomain};
use rayon::prelude::*;
use tracing::debug;

use crate::{
    consts::{SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G2_AFFINE_COMPRESSED},
    domain::Domain,
    errors::KzgError,
    helpers::compute_powers,
    polynomial::lagrange_basis_evaluations,
    traits::ReadPointFromBytes,
};

/// The structured reference string of a KZG instance of width `W`.
///
/// - `g1_monomial[i] = [τ^i]G1`, used to commit to coefficient-form polynomials.
/// - `g2_monomial[i] = [τ^i]G2`; verification only needs `[τ]G2`.
/// - `g1_lagrange[i] = [L_i(τ)]G1` for the Lagrange basis of the `W`-th roots
///   of unity, used to commit to evaluation-form polynomials.
///
/// A setup is fully validated before it is returned and never changes
/// afterwards. Share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct TrustedSetup {
    g1_monomial: Vec<G1Affine>,
    g2_monomial: Vec<G2Affine>,
    g1_lagrange: Vec<G1Affine>,
    domain: Domain<Fr>,
}

impl TrustedSetup {
    /// Assembles a setup from its three point vectors.
    ///
    /// # Errors
    /// [KzgError::SetupError] unless all three vectors have the same length
    /// `W`, with `W >= 2` a power of two.
    pub fn new(
        g1_monomial: Vec<G1Affine>,
        g2_monomial: Vec<G2Affine>,
        g1_lagrange: Vec<G1Affine>,
    ) -> Result<Self, KzgError> {
        let width = g1_monomial.len();
        if g2_monomial.len() != width || g1_lagrange.len() != width {
            return Err(KzgError::SetupError(format!(
                "setup vectors differ in length: {} G1 monomial, {} G2 monomial, {} G1 Lagrange",
                width,
                g2_monomial.len(),
                g1_lagrange.len()
            )));
        }
        if width < 2 || !width.is_power_of_two() {
            return Err(KzgError::SetupError(format!(
                "setup width {} is not a power of two greater than one",
                width
            )));
        }

        let domain = Domain::new(width)?;
        debug!(width, "loaded trusted setup");

        Ok(Self {
            g1_monomial,
            g2_monomial,
            g1_lagrange,
            domain,
        })
    }

    /// Builds a setup from the monomial points only, deriving the Lagrange
    /// points with an inverse FFT over G1.
    pub fn from_monomial(
        g1_monomial: Vec<G1Affine>,
        g2_monomial: Vec<G2Affine>,
    ) -> Result<Self, KzgError> {
        let g1_lagrange = g1_ifft(&g1_monomial)?;
        Self::new(g1_monomial, g2_monomial, g1_lagrange)
    }

    /// Decodes concatenated compressed points (48 bytes per G1 point, 96
    /// bytes per G2 point). Every point is checked for curve and subgroup
    /// membership.
    pub fn from_compressed_bytes(
        g1_monomial_bytes: &[u8],
        g2_monomial_bytes: &[u8],
        g1_lagrange_bytes: &[u8],
    ) -> Result<Self, KzgError> {
        let g1_monomial = read_points::<G1Affine>(g1_monomial_bytes, SIZE_OF_G1_AFFINE_COMPRESSED)?;
        let g2_monomial = read_points::<G2Affine>(g2_monomial_bytes, SIZE_OF_G2_AFFINE_COMPRESSED)?;
        let g1_lagrange = read_points::<G1Affine>(g1_lagrange_bytes, SIZE_OF_G1_AFFINE_COMPRESSED)?;
        Self::new(g1_monomial, g2_monomial, g1_lagrange)
    }

    /// Builds a setup of the given width directly from the secret `tau`.
    ///
    /// Anyone who knows `tau` can forge proofs: this is for tests and
    /// benchmarks only.
    pub fn insecure_from_secret(tau: &Fr, width: usize) -> Result<Self, KzgError> {
        let domain = Domain::<Fr>::new(width)?;
        let powers = compute_powers(tau, width);
        let lagrange_scalars = lagrange_basis_evaluations(&domain, tau);

        let g1_monomial = scalar_multiples::<G1Projective>(&powers);
        let g2_monomial = scalar_multiples::<G2Projective>(&powers);
        let g1_lagrange = scalar_multiples::<G1Projective>(&lagrange_scalars);

        Self::new(g1_monomial, g2_monomial, g1_lagrange)
    }

    /// The width `W` of the setup: the number of field elements in a blob.
    pub fn width(&self) -> usize {
        self.domain.width()
    }

    pub fn g1_monomial(&self) -> &[G1Affine] {
        &self.g1_monomial
    }

    pub fn g2_monomial(&self) -> &[G2Affine] {
        &self.g2_monomial
    }

    pub fn g1_lagrange(&self) -> &[G1Affine] {
        &self.g1_lagrange
    }

    /// `[τ]G2`.
    pub fn g2_tau(&self) -> &G2Affine {
        &self.g2_monomial[1]
    }

    pub fn domain(&self) -> &Domain<Fr> {
        &self.domain
    }
}

/// Inverse FFT of the monomial points over the roots of unity of their
/// length, giving the Lagrange points.
fn g1_ifft(g1_monomial: &[G1Affine]) -> Result<Vec<G1Affine>, KzgError> {
    let length = g1_monomial.len();
    if !length.is_power_of_two() {
        return Err(KzgError::FFTError(
            "length provided is not a power of 2".to_string(),
        ));
    }

    let points_projective: Vec<G1Projective> = g1_monomial
        .par_iter()
        .map(|&p| G1Projective::from(p))
        .collect();
    let ifft_result = GeneralEvaluationDomain::<Fr>::new(length)
        .ok_or(KzgError::FFTError(
            "could not construct the G1 IFFT domain".to_string(),
        ))?
        .ifft(&points_projective);

    Ok(G1Projective::normalize_batch(&ifft_result))
}

fn read_points<P>(bytes: &[u8], point_size: usize) -> Result<Vec<P>, KzgError>
where
    P: ReadPointFromBytes + Send,
{
    if bytes.len() % point_size != 0 {
        return Err(KzgError::SetupError(format!(
            "{} bytes is not a whole number of {}-byte points",
            bytes.len(),
            point_size
        )));
    }
    bytes
        .par_chunks(point_size)
        .map(P::read_point_from_bytes_be)
        .collect()
}

fn scalar_multiples<G: CurveGroup<ScalarField = Fr>>(scalars: &[Fr]) -> Vec<G::Affine> {
    let generator = G::Affine::generator();
    let points: Vec<G> = scalars.par_iter().map(|s| generator * s).collect();
    G::normalize_batch(&points)
}
