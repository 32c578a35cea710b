//! Signature policies composed from ordered-signer checks.
//!
//! Each policy works on the signer addresses recovered from a batch, in batch
//! order. The batch-level wrappers recover signers first and then apply the
//! matching policy.

use std::num::NonZero;

use alloy_primitives::{Address, B256};
use custody_crypto::{
    EcdsaSignature, SignatureBatch, ThresholdConfig, ThresholdSignatureError,
    threshold_signature::{recover_signer, recover_signers, verify_ordered_signers},
};
use custody_params::OperatorParams;

use crate::{error::OperatorError, registry::TrustRegistry};

/// The operational and trust-party key sets with their thresholds.
#[derive(Clone, Debug)]
pub struct ThresholdPolicy {
    hot: ThresholdConfig,
    trust: ThresholdConfig,
    hot_threshold: NonZero<u8>,
}

impl ThresholdPolicy {
    pub fn new(params: &OperatorParams) -> Self {
        Self {
            hot: params.hot().clone(),
            trust: params.trust().clone(),
            hot_threshold: params.hot_threshold(),
        }
    }

    pub fn hot_keys(&self) -> &ThresholdConfig {
        &self.hot
    }

    pub fn trust_keys(&self) -> &ThresholdConfig {
        &self.trust
    }

    pub fn hot_threshold(&self) -> NonZero<u8> {
        self.hot_threshold
    }

    pub fn trust_threshold(&self) -> u8 {
        self.trust.threshold()
    }

    /// At least `hot_threshold` signers, all operational keys, strictly ascending.
    pub fn check_hot(&self, signers: &[Address]) -> Result<(), ThresholdSignatureError> {
        verify_ordered_signers(&self.hot, signers, self.hot_threshold.get() as usize, 0)
    }

    /// Exactly `hot_threshold` ascending operational keys followed by exactly
    /// `trust_threshold` ascending trust-party keys.
    ///
    /// Returns the signers after both segments, for callers that require
    /// further signers.
    pub fn check_trust_segments<'a>(
        &self,
        signers: &'a [Address],
    ) -> Result<&'a [Address], ThresholdSignatureError> {
        let h = self.hot_threshold.get() as usize;
        let t = self.trust.threshold() as usize;

        let (hot_segment, rest) = signers.split_at(h.min(signers.len()));
        verify_ordered_signers(&self.hot, hot_segment, h, 0)?;

        if t == 0 {
            return Ok(rest);
        }

        let (trust_segment, tail) = rest.split_at(t.min(rest.len()));
        verify_ordered_signers(&self.trust, trust_segment, t, h)?;

        Ok(tail)
    }

    /// The trust segments with nothing after them.
    pub fn check_trust_action(&self, signers: &[Address]) -> Result<(), ThresholdSignatureError> {
        let tail = self.check_trust_segments(signers)?;
        ensure_consumed(signers.len(), tail)
    }

    /// `signer` must be the key bound to `wallet`.
    pub fn check_cold_access(
        &self,
        registry: &TrustRegistry,
        wallet: &Address,
        signer: &Address,
    ) -> Result<(), OperatorError> {
        let key = bound_cold_key(registry, wallet)?;
        check_single_signer(&key, &[*signer], 0)?;
        Ok(())
    }

    /// The trust segments followed by exactly one signature from the key bound
    /// to `wallet`. The binding is looked up before any signer is checked.
    pub fn check_cold_transfer(
        &self,
        registry: &TrustRegistry,
        wallet: &Address,
        signers: &[Address],
    ) -> Result<(), OperatorError> {
        let key = bound_cold_key(registry, wallet)?;
        let tail = self.check_trust_segments(signers)?;
        let index = signers.len() - tail.len();
        check_single_signer(&key, tail, index)?;
        ensure_consumed(signers.len(), &tail[1..])?;
        Ok(())
    }

    /// The trust segments followed by exactly one signature from `key`, which
    /// is about to be bound as a cold key.
    pub fn check_cold_registration(
        &self,
        key: &Address,
        signers: &[Address],
    ) -> Result<(), ThresholdSignatureError> {
        let tail = self.check_trust_segments(signers)?;
        let index = signers.len() - tail.len();
        check_single_signer(key, tail, index)?;
        ensure_consumed(signers.len(), &tail[1..])
    }

    pub fn verify_hot(&self, batch: &SignatureBatch, digest: &B256) -> Result<(), OperatorError> {
        let signers = recover_signers(batch, digest)?;
        self.check_hot(&signers)?;
        Ok(())
    }

    pub fn verify_trust_action(
        &self,
        batch: &SignatureBatch,
        digest: &B256,
    ) -> Result<(), OperatorError> {
        let signers = recover_signers(batch, digest)?;
        self.check_trust_action(&signers)?;
        Ok(())
    }

    /// Recovers the single signer of `sig` and checks it against the key
    /// bound to `wallet`.
    pub fn verify_cold_access(
        &self,
        registry: &TrustRegistry,
        sig: &EcdsaSignature,
        digest: &B256,
        wallet: &Address,
    ) -> Result<(), OperatorError> {
        let signer = recover_signer(sig, digest)?;
        self.check_cold_access(registry, wallet, &signer)
    }

    pub fn verify_cold_transfer(
        &self,
        registry: &TrustRegistry,
        wallet: &Address,
        batch: &SignatureBatch,
        digest: &B256,
    ) -> Result<(), OperatorError> {
        let signers = recover_signers(batch, digest)?;
        self.check_cold_transfer(registry, wallet, &signers)
    }

    pub fn verify_cold_registration(
        &self,
        key: &Address,
        batch: &SignatureBatch,
        digest: &B256,
    ) -> Result<(), OperatorError> {
        let signers = recover_signers(batch, digest)?;
        self.check_cold_registration(key, &signers)?;
        Ok(())
    }
}

fn bound_cold_key(registry: &TrustRegistry, wallet: &Address) -> Result<Address, OperatorError> {
    registry
        .cold_key_of(wallet)
        .ok_or(OperatorError::UnknownColdWallet(*wallet))
}

/// Checks that `tail` starts with `key`. `index` is the tail's position in
/// its batch.
fn check_single_signer(
    key: &Address,
    tail: &[Address],
    index: usize,
) -> Result<(), ThresholdSignatureError> {
    match tail.first() {
        None => Err(ThresholdSignatureError::InsufficientSignatures {
            provided: 0,
            required: 1,
        }),
        Some(signer) if signer != key => Err(ThresholdSignatureError::UnauthorizedSigner {
            index,
            signer: *signer,
        }),
        Some(_) => Ok(()),
    }
}

fn ensure_consumed(provided: usize, rest: &[Address]) -> Result<(), ThresholdSignatureError> {
    if rest.is_empty() {
        return Ok(());
    }
    Err(ThresholdSignatureError::UnexpectedSignatures {
        expected: provided - rest.len(),
        provided,
    })
}
