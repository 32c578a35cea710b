use alloy_primitives::{Address, B256, U256, keccak256};
use custody_crypto::eth_signed_message_digest;

use crate::{constants::ActionKind, encoding::PackedEncoder};

/// Canonical signed message of an operator action.
///
/// The sighash is `keccak256(operator || kind || payload || nonce)` in packed
/// encoding, with `kind` and `nonce` as 256-bit integers. Binding the operator
/// identity and nonce makes a signature valid for exactly one operator and one
/// position in its action sequence.
pub trait Sighash {
    fn kind(&self) -> ActionKind;

    /// Packed encoding of the action-specific parameters.
    fn sighash_payload(&self) -> Vec<u8>;

    fn compute_sighash(&self, operator: &Address, nonce: u64) -> B256 {
        let message = PackedEncoder::new()
            .address(operator)
            .u256(U256::from(u8::from(self.kind())))
            .raw(&self.sighash_payload())
            .u256(U256::from(nonce))
            .finish();
        keccak256(message)
    }

    /// The digest signers actually sign: the sighash wrapped as a signed message.
    fn signing_digest(&self, operator: &Address, nonce: u64) -> B256 {
        eth_signed_message_digest(&self.compute_sighash(operator, nonce))
    }
}
