//! ECDSA-specific signer recovery.

use alloy_primitives::{Address, B256, keccak256};
use secp256k1::{
    Message, PublicKey, SECP256K1, SecretKey,
    ecdsa::{RecoverableSignature, RecoveryId},
};

use crate::threshold_signature::{EcdsaSignature, ThresholdSignatureError};

/// Offset added to the raw recovery id in the Ethereum `v` convention.
const ETH_RECOVERY_OFFSET: u8 = 27;

/// Recovers the signer address of a single signature over `digest`.
///
/// `index` is the position of the signature in its batch and is only used for
/// error reporting.
pub(crate) fn recover_signer(
    sig: &EcdsaSignature,
    digest: &B256,
    index: usize,
) -> Result<Address, ThresholdSignatureError> {
    let message = Message::from_digest(digest.0);

    let recovery_id = normalize_recovery_byte(sig.v())
        .and_then(|id| RecoveryId::from_i32(id as i32).ok())
        .ok_or(ThresholdSignatureError::InvalidSignatureFormat { index, v: sig.v() })?;

    let recoverable_sig = RecoverableSignature::from_compact(&sig.compact(), recovery_id)
        .map_err(|_| ThresholdSignatureError::InvalidSignature { index })?;

    let recovered_pubkey = SECP256K1
        .recover_ecdsa(&message, &recoverable_sig)
        .map_err(|_| ThresholdSignatureError::InvalidSignature { index })?;

    Ok(pubkey_to_address(&recovered_pubkey))
}

/// Derives the account address of a public key: the last 20 bytes of the
/// keccak256 hash of the uncompressed point without its prefix byte.
pub fn pubkey_to_address(pubkey: &PublicKey) -> Address {
    let uncompressed = pubkey.serialize_uncompressed();
    let hash = keccak256(&uncompressed[1..]);
    Address::from_slice(&hash[12..])
}

/// Derives the account address controlled by `secret_key`.
pub fn address_of(secret_key: &SecretKey) -> Address {
    pubkey_to_address(&PublicKey::from_secret_key(SECP256K1, secret_key))
}

/// Signs `digest` and returns the signature with an Ethereum-style `v`.
pub fn sign_digest(digest: &B256, secret_key: &SecretKey) -> EcdsaSignature {
    let message = Message::from_digest(digest.0);
    let sig = SECP256K1.sign_ecdsa_recoverable(&message, secret_key);
    let (recovery_id, compact) = sig.serialize_compact();

    EcdsaSignature::new(
        recovery_id.to_i32() as u8 + ETH_RECOVERY_OFFSET,
        B256::from_slice(&compact[..32]),
        B256::from_slice(&compact[32..]),
    )
}

fn normalize_recovery_byte(v: u8) -> Option<u8> {
    match v {
        0 | 1 => Some(v),
        27 | 28 => Some(v - ETH_RECOVERY_OFFSET),
        _ => None,
    }
}
