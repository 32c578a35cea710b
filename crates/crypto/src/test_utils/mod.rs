//! Deterministic keys and signature helpers for tests.

use alloy_primitives::{Address, B256};
use secp256k1::SecretKey;

use crate::threshold_signature::{SignatureBatch, address_of, sign_digest};

/// Builds a secret key whose scalar is `seed` (zero is bumped to one).
pub fn secret_key_from_seed(seed: u8) -> SecretKey {
    let mut sk_bytes = [0u8; 32];
    sk_bytes[31] = seed.max(1);
    // A scalar in 1..=255 is always a valid secp256k1 key.
    SecretKey::from_slice(&sk_bytes).expect("small scalar is a valid key")
}

/// Returns `count` key pairs for seeds `first..first+count`, sorted by address.
pub fn sorted_keypairs(first: u8, count: u8) -> Vec<(SecretKey, Address)> {
    let mut pairs: Vec<(SecretKey, Address)> = (first..first + count)
        .map(|seed| {
            let sk = secret_key_from_seed(seed);
            let addr = address_of(&sk);
            (sk, addr)
        })
        .collect();
    pairs.sort_by_key(|(_, addr)| *addr);
    pairs
}

/// Signs `digest` with each key in the order given.
pub fn create_signature_batch(digest: &B256, signers: &[SecretKey]) -> SignatureBatch {
    signers.iter().map(|sk| sign_digest(digest, sk)).collect()
}
