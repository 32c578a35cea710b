use std::collections::{HashMap, HashSet};

use alloy_primitives::Address;
use serde::Serialize;

use crate::error::OperatorError;

/// Classification of a wallet under management.
///
/// Classes only ever move up from [`WalletClass::Unknown`]; there is no path
/// back down and a classified wallet cannot be registered again.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize)]
pub enum WalletClass {
    #[default]
    Unknown,
    /// Co-managed but not transactable under the hot-only policy.
    Trusted,
    /// Trusted and transactable under the hot-only policy.
    Hot,
    /// Trusted and bound to a key that must co-sign every transfer out.
    Cold { key: Address },
}

impl WalletClass {
    pub fn is_trusted(&self) -> bool {
        !matches!(self, WalletClass::Unknown)
    }

    pub fn is_hot(&self) -> bool {
        matches!(self, WalletClass::Hot)
    }

    pub fn cold_key(&self) -> Option<Address> {
        match self {
            WalletClass::Cold { key } => Some(*key),
            _ => None,
        }
    }
}

/// Wallet classifications, cold key bindings and the fund reference.
///
/// Every mutator has a matching `validate_*` method that performs the same
/// checks without mutating, so callers can check preconditions before doing
/// any signature work and then apply the change once authorized.
#[derive(Clone, Debug, Default)]
pub struct TrustRegistry {
    classes: HashMap<Address, WalletClass>,
    hot_wallets: Vec<Address>,
    cold_wallets: Vec<Address>,
    cold_keys: Vec<Address>,
    fund: Option<Address>,
}

impl TrustRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn class_of(&self, wallet: &Address) -> WalletClass {
        self.classes.get(wallet).copied().unwrap_or_default()
    }

    pub fn is_hot(&self, wallet: &Address) -> bool {
        self.class_of(wallet).is_hot()
    }

    pub fn is_trusted(&self, wallet: &Address) -> bool {
        self.class_of(wallet).is_trusted()
    }

    pub fn cold_key_of(&self, wallet: &Address) -> Option<Address> {
        self.class_of(wallet).cold_key()
    }

    /// Hot wallets in registration order. The fund is classified hot but is
    /// not listed here.
    pub fn hot_wallets(&self) -> &[Address] {
        &self.hot_wallets
    }

    /// Cold wallets in registration order.
    pub fn cold_wallets(&self) -> &[Address] {
        &self.cold_wallets
    }

    /// Bound cold keys, index-aligned with [`Self::cold_wallets`].
    pub fn cold_keys(&self) -> &[Address] {
        &self.cold_keys
    }

    pub fn fund(&self) -> Option<Address> {
        self.fund
    }

    pub fn require_fund(&self) -> Result<Address, OperatorError> {
        self.fund.ok_or(OperatorError::FundNotSet)
    }

    pub fn validate_fund(&self, fund: &Address) -> Result<(), OperatorError> {
        if let Some(existing) = self.fund {
            return Err(OperatorError::FundAlreadySet(existing));
        }
        if fund.is_zero() {
            return Err(OperatorError::ZeroAddress("fund"));
        }
        Ok(())
    }

    /// Sets the fund reference and classifies the fund as hot.
    pub fn register_fund(&mut self, fund: Address) -> Result<(), OperatorError> {
        self.validate_fund(&fund)?;
        self.fund = Some(fund);
        self.classes.insert(fund, WalletClass::Hot);
        Ok(())
    }

    /// Checks that `wallet` can be classified: it must be unclassified, not
    /// the zero address, and owned by the registered fund.
    pub fn validate_wallet(
        &self,
        wallet: &Address,
        declared_owner: &Address,
    ) -> Result<(), OperatorError> {
        let fund = self.require_fund()?;
        if wallet.is_zero() {
            return Err(OperatorError::ZeroAddress("wallet"));
        }
        if self.is_trusted(wallet) {
            return Err(OperatorError::AlreadyTrusted(*wallet));
        }
        if *declared_owner != fund {
            return Err(OperatorError::OwnerMismatch {
                account: *wallet,
                expected: fund,
                found: *declared_owner,
            });
        }
        Ok(())
    }

    /// Validates a batch of `(wallet, declared_owner)` pairs as a whole. A
    /// wallet listed twice is reported as already trusted.
    pub fn validate_trusted_batch(&self, entries: &[(Address, Address)]) -> Result<(), OperatorError> {
        if entries.is_empty() {
            return Err(OperatorError::EmptyWalletList);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for (wallet, owner) in entries {
            self.validate_wallet(wallet, owner)?;
            if !seen.insert(*wallet) {
                return Err(OperatorError::AlreadyTrusted(*wallet));
            }
        }
        Ok(())
    }

    pub fn register_trusted(
        &mut self,
        wallet: Address,
        declared_owner: &Address,
        as_hot: bool,
    ) -> Result<(), OperatorError> {
        self.validate_wallet(&wallet, declared_owner)?;
        self.insert_trusted(wallet, as_hot);
        Ok(())
    }

    /// Registers every wallet in the batch, or none of them.
    pub fn register_trusted_batch(
        &mut self,
        entries: &[(Address, Address)],
        as_hot: bool,
    ) -> Result<(), OperatorError> {
        self.validate_trusted_batch(entries)?;
        for (wallet, _) in entries {
            self.insert_trusted(*wallet, as_hot);
        }
        Ok(())
    }

    pub fn validate_cold(
        &self,
        wallet: &Address,
        declared_owner: &Address,
        key: &Address,
    ) -> Result<(), OperatorError> {
        self.validate_wallet(wallet, declared_owner)?;
        if key.is_zero() {
            return Err(OperatorError::ZeroAddress("cold key"));
        }
        Ok(())
    }

    /// Classifies `wallet` as cold and binds it to `key`.
    pub fn register_cold(
        &mut self,
        wallet: Address,
        declared_owner: &Address,
        key: Address,
    ) -> Result<(), OperatorError> {
        self.validate_cold(&wallet, declared_owner, &key)?;
        self.classes.insert(wallet, WalletClass::Cold { key });
        self.cold_wallets.push(wallet);
        self.cold_keys.push(key);
        Ok(())
    }

    fn insert_trusted(&mut self, wallet: Address, as_hot: bool) {
        if as_hot {
            self.classes.insert(wallet, WalletClass::Hot);
            self.hot_wallets.push(wallet);
        } else {
            self.classes.insert(wallet, WalletClass::Trusted);
        }
    }
}
