use alloy_primitives::{Address, B256};
use custody_crypto::SignatureBatch;
use serde::{Deserialize, Serialize};

use crate::actions::{OperatorAction, Sighash};

/// A signed submission: the action, the nonce it was signed against, and the
/// collected signatures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedPayload {
    nonce: u64,
    action: OperatorAction,
    signatures: SignatureBatch,
}

impl SignedPayload {
    pub fn new(nonce: u64, action: OperatorAction, signatures: SignatureBatch) -> Self {
        Self {
            nonce,
            action,
            signatures,
        }
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    pub fn action(&self) -> &OperatorAction {
        &self.action
    }

    pub fn signatures(&self) -> &SignatureBatch {
        &self.signatures
    }

    /// The digest the signatures are expected to be over, for `operator`.
    pub fn signing_digest(&self, operator: &Address) -> B256 {
        self.action.signing_digest(operator, self.nonce)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;
    use custody_crypto::{
        test_utils::{create_signature_batch, secret_key_from_seed},
        threshold_signature::recover_signers,
    };

    use super::*;
    use crate::actions::UpdatePrice;

    #[test]
    fn test_payload_json_carries_parallel_arrays() {
        let operator = Address::repeat_byte(0x0F);
        let action: OperatorAction = UpdatePrice::new(U256::from(3), U256::from(2)).into();
        let digest = action.signing_digest(&operator, 4);
        let sigs = create_signature_batch(
            &digest,
            &[secret_key_from_seed(1), secret_key_from_seed(2)],
        );

        let payload = SignedPayload::new(4, action, sigs);
        let json = payload.to_json_pretty().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["nonce"], 4);
        assert_eq!(value["action"]["type"], "update_price");
        assert_eq!(value["signatures"]["v"].as_array().unwrap().len(), 2);
        assert_eq!(value["signatures"]["r"].as_array().unwrap().len(), 2);

        let decoded = SignedPayload::from_json(&json).unwrap();
        assert_eq!(decoded, payload);

        let signers = recover_signers(decoded.signatures(), &decoded.signing_digest(&operator));
        assert_eq!(signers.map(|s| s.len()), Ok(2));
    }
}
