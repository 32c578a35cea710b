use std::{fmt, io};

use alloy_primitives::Address;
use custody_crypto::ThresholdSignatureError;
use thiserror::Error;

/// Which of the operator's key sets an error refers to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum KeySetRole {
    /// Operational (hot) keys.
    Hot,
    /// Trust-party keys.
    Trust,
}

impl fmt::Display for KeySetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySetRole::Hot => f.write_str("hot"),
            KeySetRole::Trust => f.write_str("trust"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("invalid {role} key set: {source}")]
    InvalidKeySet {
        role: KeySetRole,
        #[source]
        source: ThresholdSignatureError,
    },

    #[error("hot threshold must be at least 1")]
    ZeroHotThreshold,

    #[error("key {0} appears in both the hot and trust key sets")]
    OverlappingKeySets(Address),

    #[error("operator identity must not be the zero address")]
    ZeroOperator,

    #[error("unsupported params file extension: {0:?}")]
    UnsupportedFormat(Option<String>),

    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),
}
