//! Threshold ECDSA signatures over ordered key sets.
//!
//! A key set is a list of account addresses plus the number of them that must
//! sign. Signatures arrive as a [`SignatureBatch`]; signers are recovered from
//! the batch and checked for membership and strictly ascending address order.

mod config;
mod errors;
mod signature;
mod verification;

pub use config::{MAX_SIGNERS, ThresholdConfig};
pub use errors::ThresholdSignatureError;
pub use signature::{EcdsaSignature, SignatureBatch};
pub use verification::{
    address_of, pubkey_to_address, recover_signer, recover_signers, sign_digest,
    verify_ordered_signers,
};
