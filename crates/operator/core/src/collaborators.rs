//! Interfaces to the systems the operator drives but does not implement.
//!
//! Read methods are used while checking preconditions; write methods are only
//! called once every check for an action has passed.

use alloy_primitives::{Address, U256};
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CollaboratorError {
    #[error("unknown account {0}")]
    UnknownAccount(Address),

    #[error("call rejected: {0}")]
    Rejected(String),
}

/// The fund whose assets the operator manages.
pub trait FundContract {
    /// Account that owns (administers) `fund`.
    fn fund_owner(&self, fund: &Address) -> Result<Address, CollaboratorError>;

    fn set_token(&mut self, fund: &Address, token: &Address) -> Result<(), CollaboratorError>;

    fn update_price(
        &mut self,
        fund: &Address,
        numerator: U256,
        denominator: U256,
    ) -> Result<(), CollaboratorError>;

    fn set_paused(&mut self, fund: &Address, paused: bool) -> Result<(), CollaboratorError>;
}

/// Custody wallets holding the fund's assets.
pub trait CustodyWallets {
    /// Account that owns `wallet`; registration requires this to be the fund.
    fn wallet_owner(&self, wallet: &Address) -> Result<Address, CollaboratorError>;

    fn native_balance(&self, wallet: &Address) -> Result<U256, CollaboratorError>;

    fn send_native(
        &mut self,
        from: &Address,
        to: &Address,
        value: U256,
    ) -> Result<(), CollaboratorError>;

    fn send_token(
        &mut self,
        from: &Address,
        token: &Address,
        to: &Address,
        value: U256,
    ) -> Result<(), CollaboratorError>;
}

/// Fungible-token balances.
pub trait TokenLedger {
    fn balance_of(&self, token: &Address, account: &Address) -> Result<U256, CollaboratorError>;
}

/// Everything an operator needs from its environment.
pub trait Collaborators: FundContract + CustodyWallets + TokenLedger {}

impl<T> Collaborators for T where T: FundContract + CustodyWallets + TokenLedger {}
