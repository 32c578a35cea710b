use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::{actions::Sighash, constants::ActionKind, encoding::PackedEncoder};

/// Updates the fund's price ratio.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct UpdatePrice {
    numerator: U256,
    denominator: U256,
}

impl UpdatePrice {
    pub fn new(numerator: U256, denominator: U256) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn numerator(&self) -> U256 {
        self.numerator
    }

    pub fn denominator(&self) -> U256 {
        self.denominator
    }
}

impl Sighash for UpdatePrice {
    fn kind(&self) -> ActionKind {
        ActionKind::UpdatePrice
    }

    fn sighash_payload(&self) -> Vec<u8> {
        PackedEncoder::new()
            .u256(self.numerator)
            .u256(self.denominator)
            .finish()
    }
}

/// Pauses or unpauses the fund.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SetPaused {
    paused: bool,
}

impl SetPaused {
    pub fn new(paused: bool) -> Self {
        Self { paused }
    }

    pub fn paused(&self) -> bool {
        self.paused
    }
}

impl Sighash for SetPaused {
    fn kind(&self) -> ActionKind {
        ActionKind::SetPaused
    }

    fn sighash_payload(&self) -> Vec<u8> {
        PackedEncoder::new().bool(self.paused).finish()
    }
}
