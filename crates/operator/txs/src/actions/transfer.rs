use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::{actions::Sighash, constants::ActionKind, encoding::PackedEncoder};

/// Moves native currency out of a custody wallet.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TransferNative {
    from: Address,
    to: Address,
    value: U256,
}

impl TransferNative {
    pub fn new(from: Address, to: Address, value: U256) -> Self {
        Self { from, to, value }
    }

    /// Custody wallet the value leaves from.
    pub fn source(&self) -> Address {
        self.from
    }

    pub fn destination(&self) -> Address {
        self.to
    }

    pub fn value(&self) -> U256 {
        self.value
    }
}

impl Sighash for TransferNative {
    fn kind(&self) -> ActionKind {
        ActionKind::TransferNative
    }

    fn sighash_payload(&self) -> Vec<u8> {
        PackedEncoder::new()
            .address(&self.from)
            .address(&self.to)
            .u256(self.value)
            .finish()
    }
}

/// Moves a token balance out of a custody wallet.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TransferToken {
    token: Address,
    from: Address,
    to: Address,
    value: U256,
}

impl TransferToken {
    pub fn new(token: Address, from: Address, to: Address, value: U256) -> Self {
        Self {
            token,
            from,
            to,
            value,
        }
    }

    pub fn token(&self) -> Address {
        self.token
    }

    /// Custody wallet the value leaves from.
    pub fn source(&self) -> Address {
        self.from
    }

    pub fn destination(&self) -> Address {
        self.to
    }

    pub fn value(&self) -> U256 {
        self.value
    }
}

impl Sighash for TransferToken {
    fn kind(&self) -> ActionKind {
        ActionKind::TransferToken
    }

    fn sighash_payload(&self) -> Vec<u8> {
        PackedEncoder::new()
            .address(&self.token)
            .address(&self.from)
            .address(&self.to)
            .u256(self.value)
            .finish()
    }
}
