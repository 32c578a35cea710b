//! Configuration types for threshold signing.

use std::collections::HashSet;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use super::ThresholdSignatureError;

/// Maximum number of signers allowed in a single key set.
pub const MAX_SIGNERS: usize = 10;

/// Configuration for a threshold signature authority.
///
/// Defines who can sign (`keys`) and how many must sign (`threshold`). Keys are
/// stored in the order they were configured; verification compares recovered
/// signers by address order and never depends on storage order.
///
/// A threshold of zero is representable here. Callers that need a non-zero
/// threshold (the operational key set) enforce it at their own layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholdConfig", into = "RawThresholdConfig")]
pub struct ThresholdConfig {
    /// Addresses of all authorized signers.
    keys: Vec<Address>,
    /// Minimum number of signatures required.
    threshold: u8,
    /// Membership index over `keys`.
    members: HashSet<Address>,
}

impl ThresholdConfig {
    /// Create a new threshold configuration.
    ///
    /// # Errors
    ///
    /// Returns `ThresholdSignatureError` if:
    /// - `TooManySigners`: more than [`MAX_SIGNERS`] keys are given
    /// - `ZeroMember`: one of the keys is the zero address
    /// - `DuplicateMember`: the keys list contains duplicate members
    /// - `InvalidThreshold`: the threshold exceeds the total number of keys
    pub fn try_new(keys: Vec<Address>, threshold: u8) -> Result<Self, ThresholdSignatureError> {
        if keys.len() > MAX_SIGNERS {
            return Err(ThresholdSignatureError::TooManySigners {
                provided: keys.len(),
                max: MAX_SIGNERS,
            });
        }

        let mut members = HashSet::with_capacity(keys.len());
        for (index, key) in keys.iter().enumerate() {
            if key.is_zero() {
                return Err(ThresholdSignatureError::ZeroMember { index });
            }
            if !members.insert(*key) {
                return Err(ThresholdSignatureError::DuplicateMember(*key));
            }
        }

        if threshold as usize > keys.len() {
            return Err(ThresholdSignatureError::InvalidThreshold {
                threshold,
                total_keys: keys.len(),
            });
        }

        Ok(Self {
            keys,
            threshold,
            members,
        })
    }

    /// Get the signer addresses in configured order.
    pub fn keys(&self) -> &[Address] {
        &self.keys
    }

    /// Get the threshold value.
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Check whether `signer` belongs to this key set.
    pub fn contains(&self, signer: &Address) -> bool {
        self.members.contains(signer)
    }

    /// Get the number of authorized signers.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if there are no authorized signers.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns `true` if any key is shared with `other`.
    pub fn overlaps(&self, other: &ThresholdConfig) -> bool {
        self.keys.iter().any(|k| other.contains(k))
    }

    /// The signer addresses sorted ascending, which is the order signatures
    /// must be presented in.
    pub fn sorted_keys(&self) -> Vec<Address> {
        let mut keys = self.keys.clone();
        keys.sort_unstable();
        keys
    }
}

/// Serialized shape of [`ThresholdConfig`], validated on the way in.
#[derive(Serialize, Deserialize)]
struct RawThresholdConfig {
    keys: Vec<Address>,
    threshold: u8,
}

impl TryFrom<RawThresholdConfig> for ThresholdConfig {
    type Error = ThresholdSignatureError;

    fn try_from(raw: RawThresholdConfig) -> Result<Self, Self::Error> {
        ThresholdConfig::try_new(raw.keys, raw.threshold)
    }
}

impl From<ThresholdConfig> for RawThresholdConfig {
    fn from(config: ThresholdConfig) -> Self {
        Self {
            keys: config.keys,
            threshold: config.threshold,
        }
    }
}
