pub const BYTES_PER_FIELD_ELEMENT: usize = 32;
pub const SIZE_OF_G1_AFFINE_COMPRESSED: usize = 48; // in bytes
pub const SIZE_OF_G2_AFFINE_COMPRESSED: usize = 96; // in bytes

/// Width of a mainnet blob, in field elements.
pub const FIELD_ELEMENTS_PER_BLOB: usize = 4096;

/// Generator of the multiplicative group of the BLS12-381 scalar field. Roots
/// of unity of order `W` are `PRIMITIVE_ROOT_OF_UNITY^((p - 1) / W)`.
pub const PRIMITIVE_ROOT_OF_UNITY: u64 = 7;

/// Width above which the two halves of the recursive FFT are computed on the
/// rayon pool.
pub const PARALLEL_FFT_THRESHOLD: usize = 1 << 10;

pub const FIAT_SHAMIR_PROTOCOL_DOMAIN: &[u8] = b"FSBLOBVERIFY_V1_";
pub const RANDOM_CHALLENGE_KZG_BATCH_DOMAIN: &[u8] = b"RCKZGBATCH___V1_";

/// Canonical compressed encoding of the G1 point at infinity: compression and
/// infinity flags set, everything else zero.
pub const G1_POINT_AT_INFINITY: [u8; SIZE_OF_G1_AFFINE_COMPRESSED] = {
    let mut bytes = [0u8; SIZE_OF_G1_AFFINE_COMPRESSED];
    bytes[0] = 0xc0;
    bytes
};

/// The all-zero encoding, additionally accepted as the point at infinity for
/// commitments and proofs.
pub const G1_ZERO_ENCODING: [u8; SIZE_OF_G1_AFFINE_COMPRESSED] = [0u8; SIZE_OF_G1_AFFINE_COMPRESSED];
