use ark_bls12_381::{Fr, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use rust_kzg_bls12_381_primitives::{
    blob::Blob,
    consts::{BYTES_PER_FIELD_ELEMENT, SIZE_OF_G1_AFFINE_COMPRESSED},
    errors::KzgError,
    helpers,
    polynomial::evaluate_polynomial_in_evaluation_form,
    setup::TrustedSetup,
    traits::{ReadFrFromBytes, ReadPointFromBytes},
};
use tracing::debug;

/// This function performs verification of a KZG proof where the commitment, proof,
/// evaluation value, and evaluation point are provided as deserialized curve points
/// and field elements.
///
/// It checks the pairing equation
/// `e(C - [y]G1, -G2) · e(proof, [τ]G2 - [z]G2) == 1`,
/// which holds exactly when `C - [y]G1 = proof · (τ - z)`.
///
/// # Returns
///
/// * `Ok(true)` - If the proof is valid and verification succeeds
/// * `Ok(false)` - If the proof is invalid but no errors occurred during verification
/// * `Err(KzgError)` - If the commitment or proof is not a valid group element
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use ark_bls12_381::Fr;
/// use rust_kzg_bls12_381_primitives::{blob::Blob, setup::TrustedSetup};
/// use rust_kzg_bls12_381_prover::kzg::KZG;
/// use rust_kzg_bls12_381_verifier::verify::verify_proof_impl;
///
/// let setup = Arc::new(TrustedSetup::insecure_from_secret(&Fr::from(5u64), 4).unwrap());
/// let kzg = KZG::new(setup.clone());
/// let blob = Blob::from_field_elements(&[1u64, 2, 3, 4].map(Fr::from));
/// let poly = blob.to_polynomial_eval_form().unwrap();
/// let commitment = kzg.commit_blob(&blob).unwrap();
/// let z = Fr::from(42u64);
/// let (proof, y) = kzg.compute_proof(&poly, &z).unwrap();
///
/// assert!(verify_proof_impl(&setup, &commitment, &z, &y, &proof).unwrap());
/// ```
pub fn verify_proof_impl(
    setup: &TrustedSetup,
    commitment: &G1Affine,
    z_fr: &Fr,
    value_fr: &Fr,
    proof: &G1Affine,
) -> Result<bool, KzgError> {
    helpers::validate_g1_point(commitment)?;
    helpers::validate_g1_point(proof)?;

    // [τ - z]G2, standing for X - z
    let x_minus_z = helpers::sub_generator_multiple(setup.g2_tau(), z_fr);
    // C - [y]G1, which must equal [q(τ)(τ - z)]G1
    let commit_minus_value = helpers::sub_generator_multiple(commitment, value_fr);

    let verified = helpers::pairing_check(&[
        (commit_minus_value, -G2Affine::generator()),
        (*proof, x_minus_z),
    ]);
    if !verified {
        debug!("KZG proof did not verify");
    }
    Ok(verified)
}

/// This function performs verification of a KZG proof where the commitment, proof,
/// evaluation value, and evaluation point are provided as byte arrays in big-endian
/// format: 48-byte compressed G1 points and 32-byte scalars.
///
/// # Errors
///
/// * [KzgError::MalformedEncoding] if the commitment or proof is not a valid point encoding
/// * [KzgError::InvalidFieldElement] if `z` or `y` is not smaller than the BLS modulus
///
/// # References
///
/// * [Ethereum Consensus Specs - KZG Proof Verification](https://github.com/ethereum/consensus-specs/blob/master/specs/deneb/polynomial-commitments.md#verify_kzg_proof)
pub fn verify_kzg_proof(
    setup: &TrustedSetup,
    commitment: &[u8; SIZE_OF_G1_AFFINE_COMPRESSED],
    z_fr: &[u8; BYTES_PER_FIELD_ELEMENT],
    value_fr: &[u8; BYTES_PER_FIELD_ELEMENT],
    proof: &[u8; SIZE_OF_G1_AFFINE_COMPRESSED],
) -> Result<bool, KzgError> {
    let commitment = G1Affine::read_point_from_bytes_be(commitment)?;
    let z_fr = Fr::deserialize_from_bytes_be(z_fr)?;
    let value_fr = Fr::deserialize_from_bytes_be(value_fr)?;
    let proof = G1Affine::read_point_from_bytes_be(proof)?;
    verify_proof_impl(setup, &commitment, &z_fr, &value_fr, &proof)
}

/// This function performs verification of a KZG proof for a blob where the blob,
/// commitment, and proof are provided as deserialized objects. The opening point
/// is the Fiat-Shamir challenge of the blob and commitment, and the value is
/// recomputed from the blob.
///
/// # Errors
///
/// [KzgError::InvalidInput] if the blob does not hold exactly `W` field elements.
pub fn verify_blob_kzg_proof_impl(
    setup: &TrustedSetup,
    blob: &Blob,
    commitment: &G1Affine,
    proof: &G1Affine,
) -> Result<bool, KzgError> {
    let evaluations = blob.to_field_elements()?;
    let evaluation_challenge = helpers::compute_challenge(blob, commitment)?;
    let y = evaluate_polynomial_in_evaluation_form(
        &evaluations,
        &evaluation_challenge,
        setup.domain(),
    )?;
    verify_proof_impl(setup, commitment, &evaluation_challenge, &y, proof)
}

/// Byte-level version of [verify_blob_kzg_proof_impl]. The blob must be
/// `W * 32` bytes of canonical field elements.
///
/// # References
///
/// * [Ethereum Consensus Specs - Blob KZG Proof Verification](https://github.com/ethereum/consensus-specs/blob/master/specs/deneb/polynomial-commitments.md#verify_blob_kzg_proof)
pub fn verify_blob_kzg_proof(
    setup: &TrustedSetup,
    blob: &[u8],
    commitment: &[u8; SIZE_OF_G1_AFFINE_COMPRESSED],
    proof: &[u8; SIZE_OF_G1_AFFINE_COMPRESSED],
) -> Result<bool, KzgError> {
    let blob = Blob::new(blob)?;
    let commitment = G1Affine::read_point_from_bytes_be(commitment)?;
    let proof = G1Affine::read_point_from_bytes_be(proof)?;
    verify_blob_kzg_proof_impl(setup, &blob, &commitment, &proof)
}
