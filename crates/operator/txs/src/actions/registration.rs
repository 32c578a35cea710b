use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{actions::Sighash, constants::ActionKind, encoding::PackedEncoder};

/// Sets the fund this operator manages.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RegisterFund {
    fund: Address,
}

impl RegisterFund {
    pub fn new(fund: Address) -> Self {
        Self { fund }
    }

    pub fn fund(&self) -> Address {
        self.fund
    }
}

impl Sighash for RegisterFund {
    fn kind(&self) -> ActionKind {
        ActionKind::RegisterFund
    }

    fn sighash_payload(&self) -> Vec<u8> {
        PackedEncoder::new().address(&self.fund).finish()
    }
}

/// Sets the token of the registered fund.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RegisterToken {
    token: Address,
}

impl RegisterToken {
    pub fn new(token: Address) -> Self {
        Self { token }
    }

    pub fn token(&self) -> Address {
        self.token
    }
}

impl Sighash for RegisterToken {
    fn kind(&self) -> ActionKind {
        ActionKind::RegisterToken
    }

    fn sighash_payload(&self) -> Vec<u8> {
        PackedEncoder::new().address(&self.token).finish()
    }
}

/// Registers custody wallets as trusted, and optionally as hot.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RegisterTrustedWallets {
    wallets: Vec<Address>,
    as_hot: bool,
}

impl RegisterTrustedWallets {
    pub fn new(wallets: Vec<Address>, as_hot: bool) -> Self {
        Self { wallets, as_hot }
    }

    pub fn wallets(&self) -> &[Address] {
        &self.wallets
    }

    pub fn as_hot(&self) -> bool {
        self.as_hot
    }
}

impl Sighash for RegisterTrustedWallets {
    fn kind(&self) -> ActionKind {
        ActionKind::RegisterTrustedWallets
    }

    fn sighash_payload(&self) -> Vec<u8> {
        PackedEncoder::new()
            .address_list(&self.wallets)
            .bool(self.as_hot)
            .finish()
    }
}

/// Registers a cold custody wallet and binds it to a signing key.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RegisterColdWallet {
    wallet: Address,
    key: Address,
}

impl RegisterColdWallet {
    pub fn new(wallet: Address, key: Address) -> Self {
        Self { wallet, key }
    }

    pub fn wallet(&self) -> Address {
        self.wallet
    }

    /// The key that must co-sign every transfer out of the wallet.
    pub fn key(&self) -> Address {
        self.key
    }
}

impl Sighash for RegisterColdWallet {
    fn kind(&self) -> ActionKind {
        ActionKind::RegisterColdWallet
    }

    fn sighash_payload(&self) -> Vec<u8> {
        PackedEncoder::new()
            .address(&self.wallet)
            .address(&self.key)
            .finish()
    }
}
