use thiserror::Error;

/// Errors related to Polynomial operations.
///
/// The `PolynomialError` enum encapsulates the structural errors of
/// coefficient-form polynomial division.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PolynomialError {
    /// The divisor of a polynomial division is empty or has a zero leading coefficient.
    #[error("invalid divisor: {0}")]
    InvalidDivisor(String),

    /// The dividend has a smaller degree than the divisor.
    #[error("dividend degree {dividend_degree} is smaller than divisor degree {divisor_degree}")]
    DegreeMismatch {
        dividend_degree: usize,
        divisor_degree: usize,
    },
}

/// Errors related to KZG operations.
///
/// The `KzgError` enum encapsulates all possible errors that can occur during
/// KZG-related operations, including those from `PolynomialError`. A proof
/// that fails its pairing check is not an error: verification returns
/// `Ok(false)` for it.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum KzgError {
    /// Wraps errors originating from Polynomial operations.
    #[error("polynomial error: {0}")]
    PolynomialError(#[from] PolynomialError),

    /// Structurally invalid input, such as vectors of mismatched lengths.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An input had a length other than the one required.
    #[error("invalid input length: expected {expected}, got {actual}")]
    InvalidInputLength { expected: usize, actual: usize },

    /// Bytes that are neither a point at infinity encoding nor a valid
    /// on-curve, correct-subgroup point.
    #[error("malformed encoding: {0}")]
    MalformedEncoding(String),

    /// Error indicating invalid field element bytes that exceed the field modulus.
    #[error("invalid field element: {0}")]
    InvalidFieldElement(String),

    /// Division by the zero field element.
    #[error("invalid denominator")]
    InvalidDenominator,

    /// A division that had to be exact left a remainder.
    #[error("polynomial division left a non-zero remainder")]
    NonZeroRemainder,

    #[error("not on curve error: {0}")]
    NotOnCurveError(String),

    #[error("MSM error: {0}")]
    MsmError(String),

    /// Error related to Fast Fourier Transform (FFT) operations with a descriptive message.
    #[error("FFT error: {0}")]
    FFTError(String),

    /// Error related to serialization with a descriptive message.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// The trusted setup is inconsistent with itself or with the requested width.
    #[error("trusted setup error: {0}")]
    SetupError(String),
}
