//! Signature types for threshold signing.

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

use super::ThresholdSignatureError;

/// A single recoverable ECDSA signature split into its `v`, `r` and `s` components.
///
/// `v` is the recovery byte in Ethereum convention (27 or 28); the raw
/// recovery ids 0 and 1 are accepted as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EcdsaSignature {
    v: u8,
    r: B256,
    s: B256,
}

impl EcdsaSignature {
    /// Create a signature from its components.
    pub fn new(v: u8, r: B256, s: B256) -> Self {
        Self { v, r, s }
    }

    /// Get the recovery byte.
    pub fn v(&self) -> u8 {
        self.v
    }

    /// Get the r component.
    pub fn r(&self) -> &B256 {
        &self.r
    }

    /// Get the s component.
    pub fn s(&self) -> &B256 {
        &self.s
    }

    /// Get the compact signature (r || s) without recovery byte.
    pub fn compact(&self) -> [u8; 64] {
        let mut compact = [0u8; 64];
        compact[..32].copy_from_slice(self.r.as_slice());
        compact[32..].copy_from_slice(self.s.as_slice());
        compact
    }
}

/// A batch of ECDSA signatures submitted as three parallel component arrays.
///
/// The arrays are not checked against each other on construction; a length
/// mismatch surfaces as [`ThresholdSignatureError::MalformedSignatureBatch`]
/// when the batch is read.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SignatureBatch {
    v: Vec<u8>,
    r: Vec<B256>,
    s: Vec<B256>,
}

impl SignatureBatch {
    /// Create a batch from parallel component arrays.
    pub fn new(v: Vec<u8>, r: Vec<B256>, s: Vec<B256>) -> Self {
        Self { v, r, s }
    }

    /// Create an empty batch.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a signature to the end of the batch.
    pub fn push(&mut self, sig: EcdsaSignature) {
        self.v.push(sig.v);
        self.r.push(sig.r);
        self.s.push(sig.s);
    }

    /// Returns a new batch with the signatures of `other` appended.
    pub fn concat(mut self, other: &SignatureBatch) -> Self {
        self.v.extend_from_slice(&other.v);
        self.r.extend_from_slice(&other.r);
        self.s.extend_from_slice(&other.s);
        self
    }

    /// Get the recovery bytes.
    pub fn v(&self) -> &[u8] {
        &self.v
    }

    /// Get the r components.
    pub fn r(&self) -> &[B256] {
        &self.r
    }

    /// Get the s components.
    pub fn s(&self) -> &[B256] {
        &self.s
    }

    /// Returns the number of signatures, or an error if the component arrays
    /// disagree.
    pub fn len(&self) -> Result<usize, ThresholdSignatureError> {
        if self.v.len() != self.r.len() || self.r.len() != self.s.len() {
            return Err(ThresholdSignatureError::MalformedSignatureBatch {
                v: self.v.len(),
                r: self.r.len(),
                s: self.s.len(),
            });
        }
        Ok(self.v.len())
    }

    /// Check if the batch carries no components at all.
    pub fn is_empty(&self) -> bool {
        self.v.is_empty() && self.r.is_empty() && self.s.is_empty()
    }

    /// Zip the component arrays into individual signatures.
    pub fn signatures(&self) -> Result<Vec<EcdsaSignature>, ThresholdSignatureError> {
        self.len()?;
        Ok(self
            .v
            .iter()
            .zip(&self.r)
            .zip(&self.s)
            .map(|((v, r), s)| EcdsaSignature::new(*v, *r, *s))
            .collect())
    }
}

impl FromIterator<EcdsaSignature> for SignatureBatch {
    fn from_iter<I: IntoIterator<Item = EcdsaSignature>>(iter: I) -> Self {
        let mut batch = SignatureBatch::empty();
        for sig in iter {
            batch.push(sig);
        }
        batch
    }
}
