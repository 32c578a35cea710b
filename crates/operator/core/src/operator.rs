use std::num::NonZero;

use alloy_primitives::{Address, B256};
use custody_crypto::{EcdsaSignature, SignatureBatch, ThresholdConfig, eth_signed_message_digest};
use custody_operator_txs::{
    ActionKind, OperatorAction, Sighash, SignedPayload,
    actions::{
        RegisterColdWallet, RegisterFund, RegisterToken, RegisterTrustedWallets, SetPaused,
        TransferNative, TransferToken, UpdatePrice,
    },
};
use custody_params::OperatorParams;
use tracing::{debug, info, warn};

use crate::{
    collaborators::{CollaboratorError, Collaborators},
    error::OperatorError,
    events::{ActionReceipt, OperatorEvent},
    policy::ThresholdPolicy,
    registry::{TrustRegistry, WalletClass},
    replay::ReplayGuard,
};

/// Signature policy a transfer is routed to, decided by the wallets involved.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum TransferRoute {
    /// Hot source to a trusted destination.
    Hot,
    /// Hot source to an external destination.
    TrustAction,
    /// Cold source; the wallet's bound key must co-sign.
    Cold,
}

/// Authorizes privileged fund actions and forwards them to the collaborators.
///
/// Every entry point follows the same sequence:
/// 1. Check the nonce against the replay guard
/// 2. Check the action's state preconditions
/// 3. Recover signers and apply the action's signature policy
/// 4. Forward the call to the collaborator, if the action has one
/// 5. Apply registry changes, advance the nonce and emit the receipt
///
/// A failure at any step returns before step 5, so a rejected action leaves the
/// operator exactly as it was.
#[derive(Debug)]
pub struct FundOperator<E> {
    operator: Address,
    policy: ThresholdPolicy,
    registry: TrustRegistry,
    replay: ReplayGuard,
    env: E,
}

impl<E: Collaborators> FundOperator<E> {
    pub fn new(params: &OperatorParams, env: E) -> Self {
        Self {
            operator: params.operator(),
            policy: ThresholdPolicy::new(params),
            registry: TrustRegistry::new(),
            replay: ReplayGuard::new(),
            env,
        }
    }

    /// Identity mixed into every signed message.
    pub fn operator(&self) -> Address {
        self.operator
    }

    /// The nonce the next action must be signed against.
    pub fn nonce(&self) -> u64 {
        self.replay.current()
    }

    pub fn registry(&self) -> &TrustRegistry {
        &self.registry
    }

    pub fn policy(&self) -> &ThresholdPolicy {
        &self.policy
    }

    pub fn class_of(&self, wallet: &Address) -> WalletClass {
        self.registry.class_of(wallet)
    }

    pub fn is_hot(&self, wallet: &Address) -> bool {
        self.registry.is_hot(wallet)
    }

    pub fn is_trusted(&self, wallet: &Address) -> bool {
        self.registry.is_trusted(wallet)
    }

    pub fn cold_key_of(&self, wallet: &Address) -> Option<Address> {
        self.registry.cold_key_of(wallet)
    }

    pub fn fund(&self) -> Option<Address> {
        self.registry.fund()
    }

    pub fn hot_wallets(&self) -> &[Address] {
        self.registry.hot_wallets()
    }

    pub fn cold_wallets(&self) -> &[Address] {
        self.registry.cold_wallets()
    }

    pub fn cold_keys(&self) -> &[Address] {
        self.registry.cold_keys()
    }

    pub fn is_hot_key(&self, key: &Address) -> bool {
        self.policy.hot_keys().contains(key)
    }

    pub fn is_trust_key(&self, key: &Address) -> bool {
        self.policy.trust_keys().contains(key)
    }

    pub fn hot_keys(&self) -> &ThresholdConfig {
        self.policy.hot_keys()
    }

    pub fn trust_keys(&self) -> &ThresholdConfig {
        self.policy.trust_keys()
    }

    pub fn hot_threshold(&self) -> NonZero<u8> {
        self.policy.hot_threshold()
    }

    pub fn trust_threshold(&self) -> u8 {
        self.policy.trust_threshold()
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut E {
        &mut self.env
    }

    pub fn into_env(self) -> E {
        self.env
    }

    /// Digest signers must sign for `action` at `nonce` on this operator.
    pub fn signing_digest(&self, action: &impl Sighash, nonce: u64) -> B256 {
        action.signing_digest(&self.operator, nonce)
    }

    /// Checks that `sig` over `hash` was made by the key bound to `wallet`.
    ///
    /// This is a read-only check for off-chain access to a cold wallet. It is
    /// not replay protected and does not touch the nonce.
    pub fn verify_cold_access(
        &self,
        sig: &EcdsaSignature,
        hash: &B256,
        wallet: &Address,
    ) -> Result<OperatorEvent, OperatorError> {
        let digest = eth_signed_message_digest(hash);
        match self.policy.verify_cold_access(&self.registry, sig, &digest, wallet) {
            Ok(()) => {
                let event = OperatorEvent::ColdWalletAccessed { wallet: *wallet };
                info!(%wallet, event = event.name(), "cold wallet access verified");
                Ok(event)
            }
            Err(err) => {
                warn!(%wallet, %err, "cold wallet access rejected");
                Err(err)
            }
        }
    }

    /// Routes a signed submission to the matching entry point.
    pub fn dispatch(&mut self, payload: &SignedPayload) -> Result<ActionReceipt, OperatorError> {
        let nonce = payload.nonce();
        let sigs = payload.signatures();
        match payload.action() {
            OperatorAction::RegisterFund(a) => self.register_fund(a, nonce, sigs),
            OperatorAction::RegisterToken(a) => self.register_token(a, nonce, sigs),
            OperatorAction::RegisterTrustedWallets(a) => {
                self.register_trusted_wallets(a, nonce, sigs)
            }
            OperatorAction::RegisterColdWallet(a) => self.register_cold_wallet(a, nonce, sigs),
            OperatorAction::TransferNative(a) => self.transfer_native(a, nonce, sigs),
            OperatorAction::TransferToken(a) => self.transfer_token(a, nonce, sigs),
            OperatorAction::UpdatePrice(a) => self.update_price(a, nonce, sigs),
            OperatorAction::SetPaused(a) => self.set_paused(a, nonce, sigs),
        }
    }

    /// Sets the fund reference. The fund must be owned by this operator.
    pub fn register_fund(
        &mut self,
        action: &RegisterFund,
        nonce: u64,
        sigs: &SignatureBatch,
    ) -> Result<ActionReceipt, OperatorError> {
        self.authorize(ActionKind::RegisterFund, nonce, |this| {
            let fund = action.fund();
            this.registry.validate_fund(&fund)?;

            let owner = this.env.fund_owner(&fund)?;
            if owner != this.operator {
                return Err(OperatorError::OwnerMismatch {
                    account: fund,
                    expected: this.operator,
                    found: owner,
                });
            }

            let digest = this.signing_digest(action, nonce);
            this.policy.verify_trust_action(sigs, &digest)?;

            this.registry.register_fund(fund)?;
            Ok(OperatorEvent::FundRegistered { fund })
        })
    }

    pub fn register_token(
        &mut self,
        action: &RegisterToken,
        nonce: u64,
        sigs: &SignatureBatch,
    ) -> Result<ActionReceipt, OperatorError> {
        self.authorize(ActionKind::RegisterToken, nonce, |this| {
            let fund = this.registry.require_fund()?;
            let token = action.token();
            if token.is_zero() {
                return Err(OperatorError::ZeroAddress("token"));
            }

            let digest = this.signing_digest(action, nonce);
            this.policy.verify_trust_action(sigs, &digest)?;

            this.env.set_token(&fund, &token)?;
            Ok(OperatorEvent::TokenRegistered { fund, token })
        })
    }

    /// Registers fund-owned wallets as trusted, and as hot if requested. The
    /// whole list is checked before any wallet is registered.
    pub fn register_trusted_wallets(
        &mut self,
        action: &RegisterTrustedWallets,
        nonce: u64,
        sigs: &SignatureBatch,
    ) -> Result<ActionReceipt, OperatorError> {
        self.authorize(ActionKind::RegisterTrustedWallets, nonce, |this| {
            this.registry.require_fund()?;
            if action.wallets().is_empty() {
                return Err(OperatorError::EmptyWalletList);
            }

            let entries = action
                .wallets()
                .iter()
                .map(|wallet| Ok((*wallet, this.env.wallet_owner(wallet)?)))
                .collect::<Result<Vec<_>, CollaboratorError>>()?;
            this.registry.validate_trusted_batch(&entries)?;

            let digest = this.signing_digest(action, nonce);
            this.policy.verify_trust_action(sigs, &digest)?;

            this.registry
                .register_trusted_batch(&entries, action.as_hot())?;
            Ok(OperatorEvent::TrustedWalletsRegistered {
                wallets: action.wallets().to_vec(),
                as_hot: action.as_hot(),
            })
        })
    }

    /// Registers a fund-owned wallet as cold. The key being bound must sign
    /// right after the trust segments.
    pub fn register_cold_wallet(
        &mut self,
        action: &RegisterColdWallet,
        nonce: u64,
        sigs: &SignatureBatch,
    ) -> Result<ActionReceipt, OperatorError> {
        self.authorize(ActionKind::RegisterColdWallet, nonce, |this| {
            this.registry.require_fund()?;
            let wallet = action.wallet();
            let key = action.key();

            let owner = this.env.wallet_owner(&wallet)?;
            this.registry.validate_cold(&wallet, &owner, &key)?;

            let digest = this.signing_digest(action, nonce);
            this.policy.verify_cold_registration(&key, sigs, &digest)?;

            this.registry.register_cold(wallet, &owner, key)?;
            Ok(OperatorEvent::ColdWalletRegistered { wallet, key })
        })
    }

    pub fn transfer_native(
        &mut self,
        action: &TransferNative,
        nonce: u64,
        sigs: &SignatureBatch,
    ) -> Result<ActionReceipt, OperatorError> {
        self.authorize(ActionKind::TransferNative, nonce, |this| {
            let (from, to, value) = (action.source(), action.destination(), action.value());
            let route = this.route_transfer(&from, &to)?;

            let available = this.env.native_balance(&from)?;
            if available < value {
                return Err(OperatorError::InsufficientBalance {
                    wallet: from,
                    available,
                    requested: value,
                });
            }

            let digest = this.signing_digest(action, nonce);
            this.verify_transfer(route, &from, sigs, &digest)?;

            this.env.send_native(&from, &to, value)?;
            Ok(OperatorEvent::NativeTransferAuthorized { from, to, value })
        })
    }

    pub fn transfer_token(
        &mut self,
        action: &TransferToken,
        nonce: u64,
        sigs: &SignatureBatch,
    ) -> Result<ActionReceipt, OperatorError> {
        self.authorize(ActionKind::TransferToken, nonce, |this| {
            let token = action.token();
            let (from, to, value) = (action.source(), action.destination(), action.value());
            if token.is_zero() {
                return Err(OperatorError::ZeroAddress("token"));
            }
            let route = this.route_transfer(&from, &to)?;

            let available = this.env.balance_of(&token, &from)?;
            if available < value {
                return Err(OperatorError::InsufficientBalance {
                    wallet: from,
                    available,
                    requested: value,
                });
            }

            let digest = this.signing_digest(action, nonce);
            this.verify_transfer(route, &from, sigs, &digest)?;

            this.env.send_token(&from, &token, &to, value)?;
            Ok(OperatorEvent::TokenTransferAuthorized {
                token,
                from,
                to,
                value,
            })
        })
    }

    /// Forwards a price update. Operational signatures alone suffice.
    pub fn update_price(
        &mut self,
        action: &UpdatePrice,
        nonce: u64,
        sigs: &SignatureBatch,
    ) -> Result<ActionReceipt, OperatorError> {
        self.authorize(ActionKind::UpdatePrice, nonce, |this| {
            let fund = this.registry.require_fund()?;

            let digest = this.signing_digest(action, nonce);
            this.policy.verify_hot(sigs, &digest)?;

            let (numerator, denominator) = (action.numerator(), action.denominator());
            this.env.update_price(&fund, numerator, denominator)?;
            Ok(OperatorEvent::PriceUpdateAuthorized {
                fund,
                numerator,
                denominator,
            })
        })
    }

    pub fn set_paused(
        &mut self,
        action: &SetPaused,
        nonce: u64,
        sigs: &SignatureBatch,
    ) -> Result<ActionReceipt, OperatorError> {
        self.authorize(ActionKind::SetPaused, nonce, |this| {
            let fund = this.registry.require_fund()?;

            let digest = this.signing_digest(action, nonce);
            this.policy.verify_trust_action(sigs, &digest)?;

            this.env.set_paused(&fund, action.paused())?;
            Ok(if action.paused() {
                OperatorEvent::PauseAuthorized { fund }
            } else {
                OperatorEvent::UnpauseAuthorized { fund }
            })
        })
    }

    /// Runs `body` under the replay guard. The nonce advances only if `body`
    /// succeeds; `body` must not mutate state before its last fallible step.
    fn authorize<F>(
        &mut self,
        kind: ActionKind,
        nonce: u64,
        body: F,
    ) -> Result<ActionReceipt, OperatorError>
    where
        F: FnOnce(&mut Self) -> Result<OperatorEvent, OperatorError>,
    {
        debug!(%kind, nonce, "authorizing action");

        let outcome = match self.replay.check(nonce) {
            Ok(()) => body(self),
            Err(err) => Err(err),
        };
        match outcome {
            Ok(event) => {
                let consumed = self.replay.advance();
                info!(%kind, nonce = consumed, event = event.name(), ?event, "action authorized");
                Ok(ActionReceipt {
                    nonce: consumed,
                    event,
                })
            }
            Err(err) => {
                warn!(%kind, nonce, current = self.replay.current(), %err, "action rejected");
                Err(err)
            }
        }
    }

    fn route_transfer(&self, from: &Address, to: &Address) -> Result<TransferRoute, OperatorError> {
        if to.is_zero() {
            return Err(OperatorError::ZeroAddress("recipient"));
        }
        match self.registry.class_of(from) {
            WalletClass::Cold { .. } => Ok(TransferRoute::Cold),
            WalletClass::Hot if self.registry.is_trusted(to) => Ok(TransferRoute::Hot),
            WalletClass::Hot => Ok(TransferRoute::TrustAction),
            WalletClass::Trusted | WalletClass::Unknown => Err(OperatorError::UntrustedSource(*from)),
        }
    }

    fn verify_transfer(
        &self,
        route: TransferRoute,
        from: &Address,
        sigs: &SignatureBatch,
        digest: &B256,
    ) -> Result<(), OperatorError> {
        debug!(?route, %from, "verifying transfer");
        match route {
            TransferRoute::Hot => self.policy.verify_hot(sigs, digest),
            TransferRoute::TrustAction => self.policy.verify_trust_action(sigs, digest),
            TransferRoute::Cold => self
                .policy
                .verify_cold_transfer(&self.registry, from, sigs, digest),
        }
    }
}
