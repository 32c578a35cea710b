//! Cryptographic primitives for threshold-authorized custody actions.

pub mod digest;
pub mod threshold_signature;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use digest::eth_signed_message_digest;
pub use threshold_signature::{
    EcdsaSignature, SignatureBatch, ThresholdConfig, ThresholdSignatureError,
};
