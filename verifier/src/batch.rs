use ark_bls12_381::{Fr, G1Affine, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use rayon::prelude::*;
use rust_kzg_bls12_381_primitives::{
    arith,
    blob::Blob,
    consts::{
        BYTES_PER_FIELD_ELEMENT, RANDOM_CHALLENGE_KZG_BATCH_DOMAIN, SIZE_OF_G1_AFFINE_COMPRESSED,
    },
    errors::KzgError,
    helpers,
    setup::TrustedSetup,
    traits::{ReadFrFromBytes, ReadPointFromBytes},
};
use tracing::{debug, trace};

// verify_blob_kzg_proof_batch_impl is used to verify a batch of KZG proofs where the commitments and proofs are in Affine form
// This accepts Affine points and acts as a helper function for verify_blob_kzg_proof_batch
// but also gives the user the option to verify a batch of proofs directly from Affine points
pub fn verify_blob_kzg_proof_batch_impl(
    setup: &TrustedSetup,
    blobs: &[Blob],
    commitments: &[G1Affine],
    proofs: &[G1Affine],
) -> Result<bool, KzgError> {
    if !(commitments.len() == blobs.len() && proofs.len() == blobs.len()) {
        return Err(KzgError::InvalidInput(format!(
            "batch has {} blobs, {} commitments and {} proofs",
            blobs.len(),
            commitments.len(),
            proofs.len()
        )));
    }

    let (evaluation_challenges, ys) =
        helpers::compute_challenges_and_evaluate_polynomial(blobs, commitments, setup.domain())?;

    verify_kzg_proof_batch_impl(setup, commitments, &evaluation_challenges, &ys, proofs)
}

/// Ref: https://github.com/ethereum/consensus-specs/blob/master/specs/deneb/polynomial-commitments.md#verify_blob_kzg_proof_batch
/// This function is used to verify a batch of KZG proofs where the commitments and proofs are in compressed form
pub fn verify_blob_kzg_proof_batch(
    setup: &TrustedSetup,
    blobs_bytes: &[Vec<u8>],
    commitments_compressed: &[[u8; SIZE_OF_G1_AFFINE_COMPRESSED]],
    proofs_compressed: &[[u8; SIZE_OF_G1_AFFINE_COMPRESSED]],
) -> Result<bool, KzgError> {
    let commitments = read_g1_points(commitments_compressed)?;
    let proofs = read_g1_points(proofs_compressed)?;
    let blobs = blobs_bytes
        .iter()
        .map(|blob| Blob::new(blob))
        .collect::<Result<Vec<Blob>, KzgError>>()?;
    verify_blob_kzg_proof_batch_impl(setup, &blobs, &commitments, &proofs)
}

/// Ref: https://github.com/ethereum/consensus-specs/blob/master/specs/deneb/polynomial-commitments.md#verify_kzg_proof_batch
/// Derives the batching challenge `r` from the whole batch and returns
/// `[r^0, r^1, ..., r^(n-1)]`. The transcript is:
/// `domain || W (8 bytes) || n (8 bytes) || (commitment || z || y || proof)*`
fn compute_r_powers(
    width: usize,
    commitments: &[G1Affine],
    zs: &[Fr],
    ys: &[Fr],
    proofs: &[G1Affine],
) -> Result<Vec<Fr>, KzgError> {
    let n = commitments.len();
    let input_size = RANDOM_CHALLENGE_KZG_BATCH_DOMAIN.len()
        + 16
        + n * (2 * SIZE_OF_G1_AFFINE_COMPRESSED + 2 * BYTES_PER_FIELD_ELEMENT);

    let mut data_to_be_hashed: Vec<u8> = Vec::with_capacity(input_size);
    data_to_be_hashed.extend_from_slice(RANDOM_CHALLENGE_KZG_BATCH_DOMAIN);
    data_to_be_hashed.extend_from_slice(&(width as u64).to_be_bytes());
    data_to_be_hashed.extend_from_slice(&(n as u64).to_be_bytes());

    for i in 0..n {
        data_to_be_hashed.extend_from_slice(&helpers::g1_point_to_bytes(&commitments[i])?);
        data_to_be_hashed.extend_from_slice(&arith::fr_to_bytes_be(&zs[i]));
        data_to_be_hashed.extend_from_slice(&arith::fr_to_bytes_be(&ys[i]));
        data_to_be_hashed.extend_from_slice(&helpers::g1_point_to_bytes(&proofs[i])?);
    }

    if data_to_be_hashed.len() != input_size {
        return Err(KzgError::InvalidInputLength {
            expected: input_size,
            actual: data_to_be_hashed.len(),
        });
    }

    let r = helpers::hash_to_field_element(&data_to_be_hashed);
    Ok(helpers::compute_powers(&r, n))
}

/// Verifies multiple KZG proofs efficiently.
/// Ref: https://github.com/ethereum/consensus-specs/blob/master/specs/deneb/polynomial-commitments.md#verify_kzg_proof_batch
///
/// With `r` derived from the batch, checks
/// `e(Σ r^i·proof_i, [τ]G2) == e(Σ r^i·(C_i - [y_i]G1) + Σ r^i·z_i·proof_i, G2)`.
///
/// # Returns
///
/// * `Ok(true)` if all proofs are valid, including for an empty batch.
/// * `Ok(false)` if any proof is invalid.
/// * `Err(KzgError)` if the inputs differ in length or contain invalid points.
pub fn verify_kzg_proof_batch_impl(
    setup: &TrustedSetup,
    commitments: &[G1Affine],
    zs: &[Fr],
    ys: &[Fr],
    proofs: &[G1Affine],
) -> Result<bool, KzgError> {
    if !(commitments.len() == zs.len() && zs.len() == ys.len() && ys.len() == proofs.len()) {
        return Err(KzgError::InvalidInput(format!(
            "batch has {} commitments, {} zs, {} ys and {} proofs",
            commitments.len(),
            zs.len(),
            ys.len(),
            proofs.len()
        )));
    }
    if commitments.is_empty() {
        return Ok(true);
    }

    commitments
        .par_iter()
        .chain(proofs.par_iter())
        .try_for_each(helpers::validate_g1_point)?;

    let n = commitments.len();
    trace!(n, "verifying KZG proof batch");

    let r_powers = compute_r_powers(setup.width(), commitments, zs, ys, proofs)?;

    // Σ r^i · proof_i
    let proof_lincomb = helpers::g1_lincomb(proofs, &r_powers)?;

    // C_i - [y_i]G1 and r^i · z_i
    let c_minus_y: Vec<G1Affine> = commitments
        .par_iter()
        .zip(ys.par_iter())
        .map(|(commitment, y)| helpers::sub_generator_multiple(commitment, y))
        .collect();
    let r_times_z: Vec<Fr> = r_powers.iter().zip(zs).map(|(r, z)| *r * z).collect();

    let proof_z_lincomb = helpers::g1_lincomb(proofs, &r_times_z)?;
    let c_minus_y_lincomb = helpers::g1_lincomb(&c_minus_y, &r_powers)?;
    let rhs_g1 = (c_minus_y_lincomb + proof_z_lincomb).into_affine();

    let verified = helpers::pairings_verify(
        proof_lincomb,
        *setup.g2_tau(),
        rhs_g1,
        G2Affine::generator(),
    );
    if !verified {
        debug!(n, "KZG proof batch did not verify");
    }
    Ok(verified)
}

// This function is used to verify a batch of KZG proofs where the commitments and proofs are in compressed form
// The commitments, proofs, and zs, ys are expected to be in big endian format
pub fn verify_kzg_proof_batch(
    setup: &TrustedSetup,
    commitments_compressed: &[[u8; SIZE_OF_G1_AFFINE_COMPRESSED]],
    zs: &[[u8; BYTES_PER_FIELD_ELEMENT]],
    ys: &[[u8; BYTES_PER_FIELD_ELEMENT]],
    proofs_compressed: &[[u8; SIZE_OF_G1_AFFINE_COMPRESSED]],
) -> Result<bool, KzgError> {
    let commitments = read_g1_points(commitments_compressed)?;
    let proofs = read_g1_points(proofs_compressed)?;
    let zs = read_scalars(zs)?;
    let ys = read_scalars(ys)?;

    verify_kzg_proof_batch_impl(setup, &commitments, &zs, &ys, &proofs)
}

fn read_g1_points(
    compressed: &[[u8; SIZE_OF_G1_AFFINE_COMPRESSED]],
) -> Result<Vec<G1Affine>, KzgError> {
    compressed
        .iter()
        .map(|bytes| G1Affine::read_point_from_bytes_be(bytes))
        .collect()
}

fn read_scalars(encoded: &[[u8; BYTES_PER_FIELD_ELEMENT]]) -> Result<Vec<Fr>, KzgError> {
    encoded
        .iter()
        .map(|bytes| Fr::deserialize_from_bytes_be(bytes))
        .collect()
}
