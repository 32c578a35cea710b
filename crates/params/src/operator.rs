use std::{fs, num::NonZero, path::Path};

use alloy_primitives::Address;
use custody_crypto::ThresholdConfig;
use serde::{Deserialize, Serialize};

use crate::{KeySetRole, ParamsError};

/// Identity and signer key sets of a fund operator.
///
/// Invariants, checked on every construction path including deserialization:
/// - `operator` is not the zero address
/// - the hot key set has a threshold of at least 1
/// - the hot and trust key sets share no key
///
/// Per-set bounds (at most [`MAX_SIGNERS`](custody_crypto::threshold_signature::MAX_SIGNERS)
/// keys, no zero or duplicate keys, threshold within the set size) are
/// enforced by [`ThresholdConfig`] itself.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOperatorParams", into = "RawOperatorParams")]
pub struct OperatorParams {
    operator: Address,
    hot: ThresholdConfig,
    trust: ThresholdConfig,
    hot_threshold: NonZero<u8>,
}

impl OperatorParams {
    /// Assembles parameters from already-built key sets.
    pub fn new(
        operator: Address,
        hot: ThresholdConfig,
        trust: ThresholdConfig,
    ) -> Result<Self, ParamsError> {
        let hot_threshold = NonZero::new(hot.threshold()).ok_or(ParamsError::ZeroHotThreshold)?;
        let params = Self {
            operator,
            hot,
            trust,
            hot_threshold,
        };
        params.validate()?;
        Ok(params)
    }

    /// Builds both key sets from raw key lists and assembles parameters,
    /// tagging key set errors with the set they came from.
    pub fn from_keys(
        operator: Address,
        hot_keys: Vec<Address>,
        hot_threshold: u8,
        trust_keys: Vec<Address>,
        trust_threshold: u8,
    ) -> Result<Self, ParamsError> {
        let hot = ThresholdConfig::try_new(hot_keys, hot_threshold).map_err(|source| {
            ParamsError::InvalidKeySet {
                role: KeySetRole::Hot,
                source,
            }
        })?;
        let trust = ThresholdConfig::try_new(trust_keys, trust_threshold).map_err(|source| {
            ParamsError::InvalidKeySet {
                role: KeySetRole::Trust,
                source,
            }
        })?;
        Self::new(operator, hot, trust)
    }

    /// Checks the cross-field invariants.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.operator.is_zero() {
            return Err(ParamsError::ZeroOperator);
        }

        if self.hot.threshold() == 0 {
            return Err(ParamsError::ZeroHotThreshold);
        }

        if let Some(shared) = self.hot.keys().iter().find(|k| self.trust.contains(k)) {
            return Err(ParamsError::OverlappingKeySets(*shared));
        }

        Ok(())
    }

    /// Parses parameters from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ParamsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses parameters from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ParamsError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads parameters from a file, choosing the format by extension
    /// (`.json` or `.toml`).
    pub fn load_from_path(path: &Path) -> Result<Self, ParamsError> {
        let ext = path.extension().and_then(|e| e.to_str());
        let contents = fs::read_to_string(path)?;
        match ext {
            Some("json") => Self::from_json_str(&contents),
            Some("toml") => Self::from_toml_str(&contents),
            other => Err(ParamsError::UnsupportedFormat(other.map(str::to_owned))),
        }
    }

    /// Serializes to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ParamsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn operator(&self) -> Address {
        self.operator
    }

    /// Operational key set.
    pub fn hot(&self) -> &ThresholdConfig {
        &self.hot
    }

    /// Trust-party key set.
    pub fn trust(&self) -> &ThresholdConfig {
        &self.trust
    }

    pub fn hot_threshold(&self) -> NonZero<u8> {
        self.hot_threshold
    }

    pub fn trust_threshold(&self) -> u8 {
        self.trust.threshold()
    }
}

#[derive(Serialize, Deserialize)]
struct RawOperatorParams {
    operator: Address,
    hot: ThresholdConfig,
    trust: ThresholdConfig,
}

impl TryFrom<RawOperatorParams> for OperatorParams {
    type Error = ParamsError;

    fn try_from(raw: RawOperatorParams) -> Result<Self, Self::Error> {
        OperatorParams::new(raw.operator, raw.hot, raw.trust)
    }
}

impl From<OperatorParams> for RawOperatorParams {
    fn from(params: OperatorParams) -> Self {
        Self {
            operator: params.operator,
            hot: params.hot,
            trust: params.trust,
        }
    }
}
