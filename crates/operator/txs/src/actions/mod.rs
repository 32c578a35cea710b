use serde::{Deserialize, Serialize};

mod fund;
mod registration;
mod sighash;
mod transfer;

pub use fund::{SetPaused, UpdatePrice};
pub use registration::{RegisterColdWallet, RegisterFund, RegisterToken, RegisterTrustedWallets};
pub use sighash::Sighash;
pub use transfer::{TransferNative, TransferToken};

use crate::constants::ActionKind;

/// Any privileged operator action.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OperatorAction {
    RegisterFund(RegisterFund),
    RegisterToken(RegisterToken),
    RegisterTrustedWallets(RegisterTrustedWallets),
    RegisterColdWallet(RegisterColdWallet),
    TransferNative(TransferNative),
    TransferToken(TransferToken),
    UpdatePrice(UpdatePrice),
    SetPaused(SetPaused),
}

impl Sighash for OperatorAction {
    fn kind(&self) -> ActionKind {
        match self {
            OperatorAction::RegisterFund(a) => a.kind(),
            OperatorAction::RegisterToken(a) => a.kind(),
            OperatorAction::RegisterTrustedWallets(a) => a.kind(),
            OperatorAction::RegisterColdWallet(a) => a.kind(),
            OperatorAction::TransferNative(a) => a.kind(),
            OperatorAction::TransferToken(a) => a.kind(),
            OperatorAction::UpdatePrice(a) => a.kind(),
            OperatorAction::SetPaused(a) => a.kind(),
        }
    }

    fn sighash_payload(&self) -> Vec<u8> {
        match self {
            OperatorAction::RegisterFund(a) => a.sighash_payload(),
            OperatorAction::RegisterToken(a) => a.sighash_payload(),
            OperatorAction::RegisterTrustedWallets(a) => a.sighash_payload(),
            OperatorAction::RegisterColdWallet(a) => a.sighash_payload(),
            OperatorAction::TransferNative(a) => a.sighash_payload(),
            OperatorAction::TransferToken(a) => a.sighash_payload(),
            OperatorAction::UpdatePrice(a) => a.sighash_payload(),
            OperatorAction::SetPaused(a) => a.sighash_payload(),
        }
    }
}

// Allow easy conversion from each action type into a unified `OperatorAction`.
macro_rules! impl_from_action {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for OperatorAction {
                fn from(action: $variant) -> Self {
                    OperatorAction::$variant(action)
                }
            }
        )*
    };
}

impl_from_action!(
    RegisterFund,
    RegisterToken,
    RegisterTrustedWallets,
    RegisterColdWallet,
    TransferNative,
    TransferToken,
    UpdatePrice,
    SetPaused,
);

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use alloy_primitives::{Address, U256, keccak256};

    use super::*;

    fn operator() -> Address {
        Address::repeat_byte(0x0F)
    }

    fn all_actions() -> Vec<OperatorAction> {
        let a = Address::with_last_byte(1);
        let b = Address::with_last_byte(2);
        vec![
            RegisterFund::new(a).into(),
            RegisterToken::new(a).into(),
            RegisterTrustedWallets::new(vec![a, b], true).into(),
            RegisterColdWallet::new(a, b).into(),
            TransferNative::new(a, b, U256::from(5)).into(),
            TransferToken::new(a, a, b, U256::from(5)).into(),
            UpdatePrice::new(U256::from(3), U256::from(2)).into(),
            SetPaused::new(true).into(),
        ]
    }

    #[test]
    fn test_register_fund_sighash_layout() {
        let fund = Address::repeat_byte(0xAA);
        let action = RegisterFund::new(fund);

        let mut expected = Vec::new();
        expected.extend_from_slice(operator().as_slice());
        expected.extend_from_slice(&[0u8; 32]);
        expected.extend_from_slice(fund.as_slice());
        let mut nonce = [0u8; 32];
        nonce[31] = 7;
        expected.extend_from_slice(&nonce);

        assert_eq!(action.compute_sighash(&operator(), 7), keccak256(&expected));
    }

    #[test]
    fn test_set_paused_sighash_layout() {
        let action = SetPaused::new(true);

        let mut expected = Vec::new();
        expected.extend_from_slice(operator().as_slice());
        let mut kind = [0u8; 32];
        kind[31] = 7;
        expected.extend_from_slice(&kind);
        expected.push(1);
        expected.extend_from_slice(&[0u8; 32]);

        assert_eq!(action.compute_sighash(&operator(), 0), keccak256(&expected));
    }

    #[test]
    fn test_sighash_distinct_per_action() {
        let hashes: HashSet<_> = all_actions()
            .iter()
            .map(|a| a.compute_sighash(&operator(), 0))
            .collect();
        assert_eq!(hashes.len(), 8);
    }

    #[test]
    fn test_sighash_binds_operator_and_nonce() {
        let action: OperatorAction = SetPaused::new(false).into();
        let base = action.compute_sighash(&operator(), 3);

        assert_ne!(base, action.compute_sighash(&operator(), 4));
        assert_ne!(base, action.compute_sighash(&Address::repeat_byte(0x10), 3));
        assert_ne!(base, action.signing_digest(&operator(), 3));
    }

    #[test]
    fn test_enum_delegates_to_inner() {
        let inner = TransferNative::new(
            Address::with_last_byte(1),
            Address::with_last_byte(2),
            U256::from(9),
        );
        let wrapped: OperatorAction = inner.clone().into();

        assert_eq!(wrapped.kind(), ActionKind::TransferNative);
        assert_eq!(
            wrapped.compute_sighash(&operator(), 1),
            inner.compute_sighash(&operator(), 1)
        );
    }

    #[test]
    fn test_action_json_is_tagged() {
        let action: OperatorAction =
            RegisterTrustedWallets::new(vec![Address::with_last_byte(1)], false).into();
        let json = serde_json::to_value(&action).unwrap();

        assert_eq!(json["type"], "register_trusted_wallets");
        assert_eq!(json["as_hot"], false);

        let decoded: OperatorAction = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, action);
    }
}
