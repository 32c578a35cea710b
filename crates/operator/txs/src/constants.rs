use std::fmt;

use serde::{Deserialize, Serialize};

/// Privileged operator action types.
///
/// Each variant's `u8` value is the action discriminant mixed into the signed
/// message, so signatures for one kind of action never verify for another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ActionKind {
    /// Set the fund reference.
    RegisterFund = 0,
    /// Set the fund's token.
    RegisterToken = 1,
    /// Register trusted (optionally hot) custody wallets.
    RegisterTrustedWallets = 2,
    /// Register a cold custody wallet bound to a signing key.
    RegisterColdWallet = 3,
    /// Move native currency out of a custody wallet.
    TransferNative = 4,
    /// Move a token balance out of a custody wallet.
    TransferToken = 5,
    /// Update the fund's price ratio.
    UpdatePrice = 6,
    /// Pause or unpause the fund.
    SetPaused = 7,
}

impl From<ActionKind> for u8 {
    fn from(kind: ActionKind) -> Self {
        kind as u8
    }
}

impl TryFrom<u8> for ActionKind {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ActionKind::RegisterFund),
            1 => Ok(ActionKind::RegisterToken),
            2 => Ok(ActionKind::RegisterTrustedWallets),
            3 => Ok(ActionKind::RegisterColdWallet),
            4 => Ok(ActionKind::TransferNative),
            5 => Ok(ActionKind::TransferToken),
            6 => Ok(ActionKind::UpdatePrice),
            7 => Ok(ActionKind::SetPaused),
            invalid => Err(invalid),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::RegisterFund => "RegisterFund",
            ActionKind::RegisterToken => "RegisterToken",
            ActionKind::RegisterTrustedWallets => "RegisterTrustedWallets",
            ActionKind::RegisterColdWallet => "RegisterColdWallet",
            ActionKind::TransferNative => "TransferNative",
            ActionKind::TransferToken => "TransferToken",
            ActionKind::UpdatePrice => "UpdatePrice",
            ActionKind::SetPaused => "SetPaused",
        };
        f.write_str(name)
    }
}
