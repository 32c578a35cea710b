//! Signer recovery and ordered-membership verification.

use alloy_primitives::{Address, B256};

use super::{EcdsaSignature, SignatureBatch, ThresholdConfig, ThresholdSignatureError};

mod ecdsa;

pub use ecdsa::{address_of, pubkey_to_address, sign_digest};

/// Recovers the signer of every signature in `batch`, preserving batch order.
///
/// # Verification Steps
///
/// 1. Check that the `v`, `r` and `s` arrays have identical length
/// 2. For each signature, normalize the recovery byte and recover the public key
/// 3. Derive the signer address from the recovered key
///
/// No membership, ordering or threshold rule is applied here; see
/// [`verify_ordered_signers`] for that.
pub fn recover_signers(
    batch: &SignatureBatch,
    digest: &B256,
) -> Result<Vec<Address>, ThresholdSignatureError> {
    batch
        .signatures()?
        .iter()
        .enumerate()
        .map(|(index, sig)| ecdsa::recover_signer(sig, digest, index))
        .collect()
}

/// Recovers the signer of a single signature over `digest`.
pub fn recover_signer(
    sig: &EcdsaSignature,
    digest: &B256,
) -> Result<Address, ThresholdSignatureError> {
    ecdsa::recover_signer(sig, digest, 0)
}

/// Checks a segment of recovered signers against a key set.
///
/// The segment must hold at least `required` signers, every signer must be a
/// member of `config`, and signers must be strictly ascending by address, which
/// also rules out duplicates. `first_index` is the position of the segment
/// within its batch and only shifts the indices reported in errors.
pub fn verify_ordered_signers(
    config: &ThresholdConfig,
    signers: &[Address],
    required: usize,
    first_index: usize,
) -> Result<(), ThresholdSignatureError> {
    if signers.len() < required {
        return Err(ThresholdSignatureError::InsufficientSignatures {
            provided: signers.len(),
            required,
        });
    }

    let mut previous: Option<&Address> = None;
    for (offset, signer) in signers.iter().enumerate() {
        let index = first_index + offset;

        if !config.contains(signer) {
            return Err(ThresholdSignatureError::UnauthorizedSigner {
                index,
                signer: *signer,
            });
        }

        if previous.is_some_and(|prev| prev >= signer) {
            return Err(ThresholdSignatureError::SignerOrderViolation { index });
        }
        previous = Some(signer);
    }

    Ok(())
}
