use alloy_primitives::{Address, U256};
use serde::Serialize;

/// Notification emitted once per successful action, carrying its resolved
/// parameters.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum OperatorEvent {
    FundRegistered {
        fund: Address,
    },
    TokenRegistered {
        fund: Address,
        token: Address,
    },
    TrustedWalletsRegistered {
        wallets: Vec<Address>,
        as_hot: bool,
    },
    ColdWalletRegistered {
        wallet: Address,
        key: Address,
    },
    NativeTransferAuthorized {
        from: Address,
        to: Address,
        value: U256,
    },
    TokenTransferAuthorized {
        token: Address,
        from: Address,
        to: Address,
        value: U256,
    },
    PriceUpdateAuthorized {
        fund: Address,
        numerator: U256,
        denominator: U256,
    },
    PauseAuthorized {
        fund: Address,
    },
    UnpauseAuthorized {
        fund: Address,
    },
    /// A cold key proved access to its wallet. Not tied to an action.
    ColdWalletAccessed {
        wallet: Address,
    },
}

impl OperatorEvent {
    /// Short event name, as used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            OperatorEvent::FundRegistered { .. } => "FundRegistered",
            OperatorEvent::TokenRegistered { .. } => "TokenRegistered",
            OperatorEvent::TrustedWalletsRegistered { .. } => "TrustedWalletsRegistered",
            OperatorEvent::ColdWalletRegistered { .. } => "ColdWalletRegistered",
            OperatorEvent::NativeTransferAuthorized { .. } => "NativeTransferAuthorized",
            OperatorEvent::TokenTransferAuthorized { .. } => "TokenTransferAuthorized",
            OperatorEvent::PriceUpdateAuthorized { .. } => "PriceUpdateAuthorized",
            OperatorEvent::PauseAuthorized { .. } => "PauseAuthorized",
            OperatorEvent::UnpauseAuthorized { .. } => "UnpauseAuthorized",
            OperatorEvent::ColdWalletAccessed { .. } => "ColdWalletAccessed",
        }
    }
}

/// Result of a successful action: the nonce it consumed and its event.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ActionReceipt {
    pub nonce: u64,
    pub event: OperatorEvent,
}
