use ark_bls12_381::Fr;
use serde::{Deserialize, Serialize};

use crate::{
    arith,
    consts::BYTES_PER_FIELD_ELEMENT,
    errors::KzgError,
    helpers,
    polynomial::PolynomialEvalForm,
};

/// A blob: a sequence of BLS12-381 scalars, each encoded as 32 big-endian
/// bytes. A blob that is committed to must hold exactly `W` elements for the
/// width `W` of the trusted setup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    /// The binary data contained within the blob.
    blob_data: Vec<u8>,
}

impl Blob {
    /// Creates a new `Blob` from already encoded field elements.
    ///
    /// The length must be a multiple of 32 and every 32-byte chunk must be
    /// smaller than the BLS modulus.
    pub fn new(blob_data: &[u8]) -> Result<Self, KzgError> {
        helpers::validate_blob_data_as_canonical_field_elements(blob_data)?;
        Ok(Blob {
            blob_data: blob_data.to_vec(),
        })
    }

    /// Creates a blob of `width` field elements from arbitrary user bytes.
    /// Every 31 bytes of `raw_data` are prefixed with a zero byte (see
    /// [helpers::pad_payload]) and the result is padded with zero field
    /// elements up to `width`.
    pub fn from_raw_data(raw_data: &[u8], width: usize) -> Result<Self, KzgError> {
        let mut blob_data = helpers::pad_payload(raw_data);
        let blob_size = width * BYTES_PER_FIELD_ELEMENT;
        if blob_data.len() > blob_size {
            return Err(KzgError::InvalidInput(format!(
                "{} bytes of data do not fit in a blob of {} field elements",
                raw_data.len(),
                width
            )));
        }
        blob_data.resize(blob_size, 0);
        Ok(Blob { blob_data })
    }

    pub fn from_field_elements(elements: &[Fr]) -> Self {
        let blob_data = elements.iter().flat_map(arith::fr_to_bytes_be).collect();
        Blob { blob_data }
    }

    /// Returns the data stored by [Blob::from_raw_data], followed by the zero
    /// bytes that padded it to the blob width.
    pub fn to_raw_data(&self) -> Result<Vec<u8>, KzgError> {
        helpers::remove_internal_padding(&self.blob_data)
    }

    /// Returns the blob data
    pub fn data(&self) -> &[u8] {
        &self.blob_data
    }

    /// Returns the length of the blob data in bytes.
    pub fn len(&self) -> usize {
        self.blob_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blob_data.is_empty()
    }

    pub fn num_field_elements(&self) -> usize {
        self.blob_data.len() / BYTES_PER_FIELD_ELEMENT
    }

    /// Decodes the blob into field elements. A blob deserialized with serde
    /// has not been validated, so non-canonical chunks are reported here.
    pub fn to_field_elements(&self) -> Result<Vec<Fr>, KzgError> {
        if self.blob_data.len() % BYTES_PER_FIELD_ELEMENT != 0 {
            return Err(KzgError::InvalidInput(format!(
                "blob length {} is not a multiple of {}",
                self.blob_data.len(),
                BYTES_PER_FIELD_ELEMENT
            )));
        }
        self.blob_data
            .chunks_exact(BYTES_PER_FIELD_ELEMENT)
            .map(arith::fr_from_bytes_be)
            .collect()
    }

    /// Convert the blob data to a [PolynomialEvalForm].
    pub fn to_polynomial_eval_form(&self) -> Result<PolynomialEvalForm, KzgError> {
        PolynomialEvalForm::new(self.to_field_elements()?)
    }
}

impl TryFrom<Vec<u8>> for Blob {
    type Error = KzgError;

    fn try_from(blob_data: Vec<u8>) -> Result<Self, Self::Error> {
        helpers::validate_blob_data_as_canonical_field_elements(&blob_data)?;
        Ok(Blob { blob_data })
    }
}

impl From<Blob> for Vec<u8> {
    fn from(blob: Blob) -> Self {
        blob.blob_data
    }
}
