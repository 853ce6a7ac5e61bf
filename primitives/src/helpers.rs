use ark_bls12_381::{Bls12_381, Fr, G1Affine, G1Projective, G2Affine};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{Field, PrimeField};
use ark_serialize::CanonicalSerialize;
use ark_std::Zero;
use rayon::prelude::*;
use sha2::{Digest, Sha256};

use crate::{
    arith,
    blob::Blob,
    consts::{
        BYTES_PER_FIELD_ELEMENT, FIAT_SHAMIR_PROTOCOL_DOMAIN, SIZE_OF_G1_AFFINE_COMPRESSED,
        SIZE_OF_G2_AFFINE_COMPRESSED,
    },
    domain::Domain,
    errors::KzgError,
    polynomial::evaluate_polynomial_in_evaluation_form,
};

/// Pads the input data by inserting a 0x00 byte before every 31-byte chunk,
/// so that every 32-byte chunk of the output is a canonical field element
/// (it is smaller than 2^248). The last chunk is zero-filled on the right.
///
/// # Example
/// ```
/// use rust_kzg_bls12_381_primitives::helpers::pad_payload;
///
/// let padded = pad_payload(&[1u8; 40]);
/// assert_eq!(padded.len(), 64);
/// assert_eq!(padded[0], 0);
/// assert_eq!(padded[32], 0);
/// ```
pub fn pad_payload(input_data: &[u8]) -> Vec<u8> {
    let bytes_per_chunk = BYTES_PER_FIELD_ELEMENT - 1;
    let chunk_count = input_data.len().div_ceil(bytes_per_chunk);
    let mut padded_output = vec![0u8; chunk_count * BYTES_PER_FIELD_ELEMENT];

    for (chunk_idx, chunk) in input_data.chunks(bytes_per_chunk).enumerate() {
        let output_start = chunk_idx * BYTES_PER_FIELD_ELEMENT + 1;
        padded_output[output_start..output_start + chunk.len()].copy_from_slice(chunk);
    }

    padded_output
}

/// Removes the 0x00 prefix from each 32-byte chunk. Inverse of [pad_payload]
/// up to the zero bytes that filled the last chunk.
pub fn remove_internal_padding(padded_data: &[u8]) -> Result<Vec<u8>, KzgError> {
    if padded_data.len() % BYTES_PER_FIELD_ELEMENT != 0 {
        return Err(KzgError::InvalidInput(format!(
            "padded data length {} is not a multiple of {}",
            padded_data.len(),
            BYTES_PER_FIELD_ELEMENT
        )));
    }

    let chunk_count = padded_data.len() / BYTES_PER_FIELD_ELEMENT;
    let mut output = Vec::with_capacity(chunk_count * (BYTES_PER_FIELD_ELEMENT - 1));
    for chunk in padded_data.chunks_exact(BYTES_PER_FIELD_ELEMENT) {
        output.extend_from_slice(&chunk[1..]);
    }
    Ok(output)
}

/// Checks that `data` is a sequence of 32-byte big-endian encodings of
/// scalars smaller than the BLS modulus.
pub fn validate_blob_data_as_canonical_field_elements(data: &[u8]) -> Result<(), KzgError> {
    if data.len() % BYTES_PER_FIELD_ELEMENT != 0 {
        return Err(KzgError::InvalidInput(format!(
            "blob length {} is not a multiple of {}",
            data.len(),
            BYTES_PER_FIELD_ELEMENT
        )));
    }

    for (i, chunk) in data.chunks_exact(BYTES_PER_FIELD_ELEMENT).enumerate() {
        arith::fr_from_bytes_be(chunk).map_err(|_| {
            KzgError::InvalidFieldElement(format!(
                "field element at position {} is not canonical",
                i
            ))
        })?;
    }
    Ok(())
}

/// Computes powers of a field element up to a given exponent.
/// Ref: https://github.com/ethereum/consensus-specs/blob/master/specs/deneb/polynomial-commitments.md#compute_powers
///
/// For a given field element x, computes [1, x, x², x³, ..., x^(count-1)]
pub fn compute_powers<F: Field>(base: &F, count: usize) -> Vec<F> {
    let mut powers = Vec::with_capacity(count);
    let mut current = F::one();
    for _ in 0..count {
        powers.push(current);
        current *= base;
    }
    powers
}

/// Computes a linear combination of G1 points weighted by scalar coefficients.
///
/// Given points P₁, P₂, ..., Pₙ and scalars s₁, s₂, ..., sₙ
/// Computes: s₁P₁ + s₂P₂ + ... + sₙPₙ
/// Uses Multi-Scalar Multiplication (MSM) for efficient computation. The
/// result for empty input, or all-zero scalars, is the point at infinity.
///
/// # Errors
/// [KzgError::InvalidInput] when the two slices differ in length.
pub fn g1_lincomb(points: &[G1Affine], scalars: &[Fr]) -> Result<G1Affine, KzgError> {
    if points.len() != scalars.len() {
        return Err(KzgError::InvalidInput(format!(
            "{} points but {} scalars in linear combination",
            points.len(),
            scalars.len()
        )));
    }
    if points.is_empty() {
        return Ok(G1Affine::identity());
    }

    let lincomb = G1Projective::msm(points, scalars)
        .map_err(|len| KzgError::MsmError(format!("MSM failed on {} inputs", len)))?;
    Ok(lincomb.into_affine())
}

/// Folds vectors of field elements: entry `j` of the result is
/// `Σ scalars[i] * vectors[i][j]`. All vectors must have the same length.
pub fn fr_lincomb<F: Field>(vectors: &[Vec<F>], scalars: &[F]) -> Result<Vec<F>, KzgError> {
    if vectors.len() != scalars.len() {
        return Err(KzgError::InvalidInput(format!(
            "{} vectors but {} scalars in linear combination",
            vectors.len(),
            scalars.len()
        )));
    }
    let Some(first) = vectors.first() else {
        return Ok(Vec::new());
    };

    let width = first.len();
    if let Some(row) = vectors.iter().position(|vector| vector.len() != width) {
        return Err(KzgError::InvalidInput(format!(
            "vector {} has length {} instead of {}",
            row,
            vectors[row].len(),
            width
        )));
    }

    let mut result = vec![F::zero(); width];
    for (vector, scalar) in vectors.iter().zip(scalars) {
        for (acc, value) in result.iter_mut().zip(vector) {
            *acc += *scalar * value;
        }
    }
    Ok(result)
}

/// SHA-256 of `msg`, read as a big-endian integer and reduced modulo the BLS
/// modulus.
pub fn hash_to_field_element(msg: &[u8]) -> Fr {
    let msg_digest = Sha256::digest(msg);
    Fr::from_be_bytes_mod_order(msg_digest.as_slice())
}

/// Returns true when the product of the pairings `e(g1_i, g2_i)` is the
/// identity of the target group.
pub fn pairing_check(pairs: &[(G1Affine, G2Affine)]) -> bool {
    let g1_points = pairs.iter().map(|(g1, _)| *g1);
    let g2_points = pairs.iter().map(|(_, g2)| *g2);
    Bls12_381::multi_pairing(g1_points, g2_points).is_zero()
}

/// Checks `e(a1, a2) == e(b1, b2)` with a single multi-pairing.
pub fn pairings_verify(a1: G1Affine, a2: G2Affine, b1: G1Affine, b2: G2Affine) -> bool {
    pairing_check(&[(a1, a2), (-b1, b2)])
}

/// Computes the Fiat-Shamir challenge from a blob and its commitment.
/// Ref: https://github.com/ethereum/consensus-specs/blob/master/specs/deneb/polynomial-commitments.md#compute_challenge
///
/// The hashed message is the protocol domain separator, the number of field
/// elements as a 16-byte big-endian integer, the blob bytes and the
/// compressed commitment.
pub fn compute_challenge(blob: &Blob, commitment: &G1Affine) -> Result<Fr, KzgError> {
    validate_g1_point(commitment)?;

    let blob_data = blob.data();
    let challenge_input_size =
        FIAT_SHAMIR_PROTOCOL_DOMAIN.len() + 16 + blob_data.len() + SIZE_OF_G1_AFFINE_COMPRESSED;

    let mut digest_bytes = Vec::with_capacity(challenge_input_size);
    digest_bytes.extend_from_slice(FIAT_SHAMIR_PROTOCOL_DOMAIN);
    digest_bytes.extend_from_slice(&(blob.num_field_elements() as u128).to_be_bytes());
    digest_bytes.extend_from_slice(blob_data);
    digest_bytes.extend_from_slice(&g1_point_to_bytes(commitment)?);

    if digest_bytes.len() != challenge_input_size {
        return Err(KzgError::InvalidInputLength {
            expected: challenge_input_size,
            actual: digest_bytes.len(),
        });
    }

    Ok(hash_to_field_element(&digest_bytes))
}

/// For every `(blob, commitment)` pair, derives the Fiat-Shamir challenge
/// and evaluates the blob polynomial there. Returns the challenges and the
/// evaluations in input order.
pub fn compute_challenges_and_evaluate_polynomial(
    blobs: &[Blob],
    commitments: &[G1Affine],
    domain: &Domain<Fr>,
) -> Result<(Vec<Fr>, Vec<Fr>), KzgError> {
    if blobs.len() != commitments.len() {
        return Err(KzgError::InvalidInput(format!(
            "{} blobs but {} commitments",
            blobs.len(),
            commitments.len()
        )));
    }

    let pairs = blobs
        .par_iter()
        .zip(commitments.par_iter())
        .map(|(blob, commitment)| {
            let evaluations = blob.to_field_elements()?;
            let challenge = compute_challenge(blob, commitment)?;
            let y = evaluate_polynomial_in_evaluation_form(&evaluations, &challenge, domain)?;
            Ok((challenge, y))
        })
        .collect::<Result<Vec<(Fr, Fr)>, KzgError>>()?;

    Ok(pairs.into_iter().unzip())
}

/// Validates that a G1 point is on the curve and in the prime order subgroup.
/// The point at infinity is valid: it commits to the zero polynomial.
pub fn validate_g1_point(point: &G1Affine) -> Result<(), KzgError> {
    if point.is_zero() {
        return Ok(());
    }

    if !point.is_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G1 point not on curve".to_string(),
        ));
    }

    if !point.is_in_correct_subgroup_assuming_on_curve() {
        return Err(KzgError::NotOnCurveError(
            "G1 point not in correct subgroup".to_string(),
        ));
    }

    Ok(())
}

/// 48-byte compressed encoding of a G1 point.
pub fn g1_point_to_bytes(point: &G1Affine) -> Result<[u8; SIZE_OF_G1_AFFINE_COMPRESSED], KzgError> {
    let mut bytes = [0u8; SIZE_OF_G1_AFFINE_COMPRESSED];
    point
        .serialize_compressed(&mut bytes[..])
        .map_err(|e| KzgError::SerializationError(e.to_string()))?;
    Ok(bytes)
}

/// 96-byte compressed encoding of a G2 point.
pub fn g2_point_to_bytes(point: &G2Affine) -> Result<[u8; SIZE_OF_G2_AFFINE_COMPRESSED], KzgError> {
    let mut bytes = [0u8; SIZE_OF_G2_AFFINE_COMPRESSED];
    point
        .serialize_compressed(&mut bytes[..])
        .map_err(|e| KzgError::SerializationError(e.to_string()))?;
    Ok(bytes)
}

/// Returns `base - scalar * G`, where `G` is the generator of the group.
pub fn sub_generator_multiple<A: AffineRepr>(base: &A, scalar: &A::ScalarField) -> A {
    (base.into_group() - A::generator() * scalar).into_affine()
}
