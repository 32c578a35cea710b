use alloy_primitives::Address;
use custody_crypto::{
    SignatureBatch,
    test_utils::{create_signature_batch, secret_key_from_seed, sorted_keypairs},
    threshold_signature::address_of,
};
use custody_operator::{Collaborators, FundOperator};
use custody_operator_txs::{
    OperatorAction, Sighash, SignedPayload,
    actions::{RegisterColdWallet, RegisterFund, RegisterTrustedWallets},
};
use custody_params::OperatorParams;
use secp256k1::SecretKey;

use crate::MockCustody;

/// Seed of the first trust-party key; hot keys start at 1.
const TRUST_SEED_BASE: u8 = 101;

/// Address the fixture's fund lives at.
pub const FUND: Address = Address::repeat_byte(0xF0);

/// A signing key together with its address.
#[derive(Clone, Debug)]
pub struct Signer {
    pub key: SecretKey,
    pub address: Address,
}

impl Signer {
    pub fn from_seed(seed: u8) -> Self {
        let key = secret_key_from_seed(seed);
        Self {
            key,
            address: address_of(&key),
        }
    }
}

/// Deterministic operator identity and key sets.
///
/// Hot and trust signers are kept sorted by address, so taking a prefix of
/// either list always yields a correctly ordered segment.
#[derive(Clone, Debug)]
pub struct OperatorFixture {
    pub params: OperatorParams,
    pub hot: Vec<Signer>,
    pub trust: Vec<Signer>,
}

impl OperatorFixture {
    /// Builds `hot_count` operational keys and `trust_count` trust-party keys.
    ///
    /// # Panics
    ///
    /// Panics if the counts and thresholds do not form valid parameters.
    pub fn new(hot_count: u8, hot_threshold: u8, trust_count: u8, trust_threshold: u8) -> Self {
        let to_signers = |pairs: Vec<(SecretKey, Address)>| -> Vec<Signer> {
            pairs
                .into_iter()
                .map(|(key, address)| Signer { key, address })
                .collect()
        };
        let hot = to_signers(sorted_keypairs(1, hot_count));
        let trust = to_signers(sorted_keypairs(TRUST_SEED_BASE, trust_count));

        let params = OperatorParams::from_keys(
            Address::repeat_byte(0x0F),
            hot.iter().map(|s| s.address).collect(),
            hot_threshold,
            trust.iter().map(|s| s.address).collect(),
            trust_threshold,
        )
        .expect("fixture params are valid");

        Self { params, hot, trust }
    }

    pub fn operator_address(&self) -> Address {
        self.params.operator()
    }

    pub fn operator<E: Collaborators>(&self, env: E) -> FundOperator<E> {
        FundOperator::new(&self.params, env)
    }

    /// The lowest `n` hot keys, in ascending address order.
    pub fn hot_signers(&self, n: usize) -> Vec<Signer> {
        self.hot[..n].to_vec()
    }

    /// The lowest `n` trust-party keys, in ascending address order.
    pub fn trust_signers(&self, n: usize) -> Vec<Signer> {
        self.trust[..n].to_vec()
    }

    /// Exactly `hot_threshold` hot keys followed by `trust_threshold` trust keys.
    pub fn trust_action_signers(&self) -> Vec<Signer> {
        let mut signers = self.hot_signers(self.params.hot_threshold().get() as usize);
        signers.extend(self.trust_signers(self.params.trust_threshold() as usize));
        signers
    }

    /// Signs `action` at `nonce` for this operator with each signer in order.
    pub fn sign(&self, action: &impl Sighash, nonce: u64, signers: &[Signer]) -> SignatureBatch {
        let digest = action.signing_digest(&self.operator_address(), nonce);
        let keys: Vec<SecretKey> = signers.iter().map(|s| s.key).collect();
        create_signature_batch(&digest, &keys)
    }

    pub fn payload(
        &self,
        action: impl Into<OperatorAction>,
        nonce: u64,
        signers: &[Signer],
    ) -> SignedPayload {
        let action = action.into();
        let sigs = self.sign(&action, nonce, signers);
        SignedPayload::new(nonce, action, sigs)
    }

    /// Collaborators with the fund owned by this operator.
    pub fn custody(&self) -> MockCustody {
        MockCustody::new().with_fund(FUND, self.operator_address())
    }

    /// Registers [`FUND`] with a trust-action batch.
    ///
    /// # Panics
    ///
    /// Panics if registration fails.
    pub fn register_fund<E: Collaborators>(&self, op: &mut FundOperator<E>) {
        let action = RegisterFund::new(FUND);
        let nonce = op.nonce();
        let sigs = self.sign(&action, nonce, &self.trust_action_signers());
        op.register_fund(&action, nonce, &sigs)
            .expect("fund registration succeeds");
    }

    /// Registers fund-owned `wallets` as trusted (and hot if `as_hot`).
    ///
    /// # Panics
    ///
    /// Panics if registration fails.
    pub fn register_wallets<E: Collaborators>(
        &self,
        op: &mut FundOperator<E>,
        wallets: &[Address],
        as_hot: bool,
    ) {
        let action = RegisterTrustedWallets::new(wallets.to_vec(), as_hot);
        let nonce = op.nonce();
        let sigs = self.sign(&action, nonce, &self.trust_action_signers());
        op.register_trusted_wallets(&action, nonce, &sigs)
            .expect("wallet registration succeeds");
    }

    /// Registers a fund-owned `wallet` as cold, bound to `cold`.
    ///
    /// # Panics
    ///
    /// Panics if registration fails.
    pub fn register_cold<E: Collaborators>(
        &self,
        op: &mut FundOperator<E>,
        wallet: Address,
        cold: &Signer,
    ) {
        let action = RegisterColdWallet::new(wallet, cold.address);
        let nonce = op.nonce();
        let mut signers = self.trust_action_signers();
        signers.push(cold.clone());
        let sigs = self.sign(&action, nonce, &signers);
        op.register_cold_wallet(&action, nonce, &sigs)
            .expect("cold wallet registration succeeds");
    }
}
