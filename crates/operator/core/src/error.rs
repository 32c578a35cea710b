use alloy_primitives::{Address, U256};
use custody_crypto::ThresholdSignatureError;
use thiserror::Error;

use crate::collaborators::CollaboratorError;

/// Errors returned by operator entry points. Any error means no state changed.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum OperatorError {
    /// Signature recovery or threshold verification failed.
    #[error(transparent)]
    ThresholdSignature(#[from] ThresholdSignatureError),

    /// The submitted nonce is not the current one.
    #[error("stale nonce: provided {provided}, current {current}")]
    StaleNonce { provided: u64, current: u64 },

    /// Transfers may only leave hot or cold wallets.
    #[error("untrusted transfer source {0}")]
    UntrustedSource(Address),

    #[error("owner mismatch for {account}: expected {expected}, found {found}")]
    OwnerMismatch {
        account: Address,
        expected: Address,
        found: Address,
    },

    #[error("wallet {0} is already trusted")]
    AlreadyTrusted(Address),

    #[error("wallet {0} has no cold key binding")]
    UnknownColdWallet(Address),

    #[error("fund has not been registered")]
    FundNotSet,

    #[error("fund already registered as {0}")]
    FundAlreadySet(Address),

    /// A parameter that must name an account was the zero address.
    #[error("zero address given for {0}")]
    ZeroAddress(&'static str),

    #[error("wallet list is empty")]
    EmptyWalletList,

    #[error("insufficient balance in {wallet}: available {available}, requested {requested}")]
    InsufficientBalance {
        wallet: Address,
        available: U256,
        requested: U256,
    },

    /// A collaborator rejected a forwarded call.
    #[error("collaborator: {0}")]
    Collaborator(#[from] CollaboratorError),
}
