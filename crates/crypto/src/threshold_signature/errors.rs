//! Error types for threshold signature operations.

use alloy_primitives::Address;
use thiserror::Error;

/// Errors that can occur during threshold signature operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThresholdSignatureError {
    /// The `v`, `r` and `s` component arrays differ in length.
    #[error("malformed signature batch: v={v}, r={r}, s={s} components")]
    MalformedSignatureBatch { v: usize, r: usize, s: usize },

    /// Not enough signatures to meet the threshold.
    #[error("insufficient signatures: provided {provided}, required {required}")]
    InsufficientSignatures { provided: usize, required: usize },

    /// The batch carries signatures beyond the segments a policy consumes.
    #[error("unexpected signatures: expected {expected}, provided {provided}")]
    UnexpectedSignatures { expected: usize, provided: usize },

    /// A recovered signer is not a member of the required key set.
    #[error("unauthorized signer {signer} at index {index}")]
    UnauthorizedSigner { index: usize, signer: Address },

    /// Recovered signers are not strictly ascending (this includes duplicates).
    #[error("signer order violation at index {index}")]
    SignerOrderViolation { index: usize },

    /// The recovery byte is not one of 0, 1, 27 or 28.
    #[error("invalid signature format at index {index}: recovery byte {v}")]
    InvalidSignatureFormat { index: usize, v: u8 },

    /// No public key could be recovered from the signature.
    #[error("invalid signature at index {index}")]
    InvalidSignature { index: usize },

    /// More keys than [`MAX_SIGNERS`](super::MAX_SIGNERS) were configured.
    #[error("too many signers: {provided} exceeds maximum {max}")]
    TooManySigners { provided: usize, max: usize },

    /// The same key appears twice in a key set.
    #[error("duplicate member {0}")]
    DuplicateMember(Address),

    /// The zero address was configured as a signer.
    #[error("zero address at index {index}")]
    ZeroMember { index: usize },

    /// Invalid threshold value.
    #[error("invalid threshold: {threshold} exceeds total keys {total_keys}")]
    InvalidThreshold { threshold: u8, total_keys: usize },
}
