use ark_bls12_381::{g1, g2, Fr, G1Affine, G2Affine};
use ark_ec::{short_weierstrass::Affine, AffineRepr};
use ark_ff::Field;
use ark_serialize::CanonicalDeserialize;

use crate::{
    arith,
    consts::{G1_ZERO_ENCODING, SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G2_AFFINE_COMPRESSED},
    errors::KzgError,
};

/// Decoding of points from their compressed big-endian encodings. Decoding
/// checks that the point is on the curve and in the prime order subgroup.
///
/// Implemented on the concrete curve configs: `G1Affine` and `G2Affine` are
/// both projections through `Bls12Config` and would overlap for coherence.
pub trait ReadPointFromBytes: AffineRepr {
    fn read_point_from_bytes_be(bytes: &[u8]) -> Result<Self, KzgError>;
}

impl ReadPointFromBytes for Affine<g1::Config> {
    /// Both `0xc0 || 0^47` and the all-zero string decode to the point at
    /// infinity.
    fn read_point_from_bytes_be(bytes: &[u8]) -> Result<G1Affine, KzgError> {
        if bytes.len() != SIZE_OF_G1_AFFINE_COMPRESSED {
            return Err(KzgError::InvalidInputLength {
                expected: SIZE_OF_G1_AFFINE_COMPRESSED,
                actual: bytes.len(),
            });
        }
        if bytes == G1_ZERO_ENCODING {
            return Ok(G1Affine::identity());
        }
        G1Affine::deserialize_compressed(bytes)
            .map_err(|e| KzgError::MalformedEncoding(format!("G1 point: {}", e)))
    }
}

impl ReadPointFromBytes for Affine<g2::Config> {
    fn read_point_from_bytes_be(bytes: &[u8]) -> Result<G2Affine, KzgError> {
        if bytes.len() != SIZE_OF_G2_AFFINE_COMPRESSED {
            return Err(KzgError::InvalidInputLength {
                expected: SIZE_OF_G2_AFFINE_COMPRESSED,
                actual: bytes.len(),
            });
        }
        G2Affine::deserialize_compressed(bytes)
            .map_err(|e| KzgError::MalformedEncoding(format!("G2 point: {}", e)))
    }
}

// A new trait for Fr for reading from bytes in big endian format
pub trait ReadFrFromBytes: Field {
    fn deserialize_from_bytes_be(bytes: &[u8]) -> Result<Self, KzgError>;
}

impl ReadFrFromBytes for Fr {
    fn deserialize_from_bytes_be(bytes: &[u8]) -> Result<Fr, KzgError> {
        arith::fr_from_bytes_be(bytes)
    }
}
