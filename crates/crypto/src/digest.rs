//! Signed-message digests.

use alloy_primitives::{B256, keccak256};

/// Prefix applied by wallets to a 32-byte message before signing.
pub const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Wraps a 32-byte hash in the signed-message envelope and hashes it again.
///
/// This is the digest wallets actually sign when asked to sign `hash`.
pub fn eth_signed_message_digest(hash: &B256) -> B256 {
    let mut buf = [0u8; ETH_SIGNED_MESSAGE_PREFIX.len() + 32];
    buf[..ETH_SIGNED_MESSAGE_PREFIX.len()].copy_from_slice(ETH_SIGNED_MESSAGE_PREFIX);
    buf[ETH_SIGNED_MESSAGE_PREFIX.len()..].copy_from_slice(hash.as_slice());
    keccak256(buf)
}
