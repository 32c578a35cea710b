use std::collections::HashMap;

use alloy_primitives::{Address, U256};
use custody_operator::{CollaboratorError, CustodyWallets, FundContract, TokenLedger};

/// In-memory fund, custody wallets and token ledger.
///
/// Sends move balances between accounts so tests can observe their effect.
/// Price updates with a zero numerator or denominator are rejected, which
/// gives tests a collaborator failure to provoke.
#[derive(Clone, Debug, Default)]
pub struct MockCustody {
    fund_owners: HashMap<Address, Address>,
    wallet_owners: HashMap<Address, Address>,
    native: HashMap<Address, U256>,
    tokens: HashMap<(Address, Address), U256>,
    fund_token: Option<Address>,
    price: Option<(U256, U256)>,
    paused: bool,
    sends: usize,
}

impl MockCustody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fund(mut self, fund: Address, owner: Address) -> Self {
        self.fund_owners.insert(fund, owner);
        self
    }

    pub fn with_wallet(mut self, wallet: Address, owner: Address) -> Self {
        self.wallet_owners.insert(wallet, owner);
        self
    }

    pub fn with_native(mut self, account: Address, balance: U256) -> Self {
        self.native.insert(account, balance);
        self
    }

    pub fn with_token_balance(mut self, token: Address, account: Address, balance: U256) -> Self {
        self.tokens.insert((token, account), balance);
        self
    }

    pub fn native_of(&self, account: &Address) -> U256 {
        self.native.get(account).copied().unwrap_or_default()
    }

    pub fn token_of(&self, token: &Address, account: &Address) -> U256 {
        self.tokens
            .get(&(*token, *account))
            .copied()
            .unwrap_or_default()
    }

    pub fn fund_token(&self) -> Option<Address> {
        self.fund_token
    }

    pub fn price(&self) -> Option<(U256, U256)> {
        self.price
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Number of native and token sends performed.
    pub fn sends(&self) -> usize {
        self.sends
    }

    fn debit(balance: &mut U256, value: U256) -> Result<(), CollaboratorError> {
        *balance = balance
            .checked_sub(value)
            .ok_or_else(|| CollaboratorError::Rejected("balance underflow".to_string()))?;
        Ok(())
    }
}

impl FundContract for MockCustody {
    fn fund_owner(&self, fund: &Address) -> Result<Address, CollaboratorError> {
        self.fund_owners
            .get(fund)
            .copied()
            .ok_or(CollaboratorError::UnknownAccount(*fund))
    }

    fn set_token(&mut self, _fund: &Address, token: &Address) -> Result<(), CollaboratorError> {
        self.fund_token = Some(*token);
        Ok(())
    }

    fn update_price(
        &mut self,
        _fund: &Address,
        numerator: U256,
        denominator: U256,
    ) -> Result<(), CollaboratorError> {
        if numerator.is_zero() || denominator.is_zero() {
            return Err(CollaboratorError::Rejected("zero price component".to_string()));
        }
        self.price = Some((numerator, denominator));
        Ok(())
    }

    fn set_paused(&mut self, _fund: &Address, paused: bool) -> Result<(), CollaboratorError> {
        self.paused = paused;
        Ok(())
    }
}

impl CustodyWallets for MockCustody {
    fn wallet_owner(&self, wallet: &Address) -> Result<Address, CollaboratorError> {
        self.wallet_owners
            .get(wallet)
            .copied()
            .ok_or(CollaboratorError::UnknownAccount(*wallet))
    }

    fn native_balance(&self, wallet: &Address) -> Result<U256, CollaboratorError> {
        Ok(self.native_of(wallet))
    }

    fn send_native(
        &mut self,
        from: &Address,
        to: &Address,
        value: U256,
    ) -> Result<(), CollaboratorError> {
        Self::debit(self.native.entry(*from).or_default(), value)?;
        *self.native.entry(*to).or_default() += value;
        self.sends += 1;
        Ok(())
    }

    fn send_token(
        &mut self,
        from: &Address,
        token: &Address,
        to: &Address,
        value: U256,
    ) -> Result<(), CollaboratorError> {
        Self::debit(self.tokens.entry((*token, *from)).or_default(), value)?;
        *self.tokens.entry((*token, *to)).or_default() += value;
        self.sends += 1;
        Ok(())
    }
}

impl TokenLedger for MockCustody {
    fn balance_of(&self, token: &Address, account: &Address) -> Result<U256, CollaboratorError> {
        Ok(self.token_of(token, account))
    }
}
