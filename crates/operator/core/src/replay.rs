use crate::error::OperatorError;

/// Single monotonically increasing counter every authorized action is bound to.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ReplayGuard {
    nonce: u64,
}

impl ReplayGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The nonce the next action must be signed against.
    pub fn current(&self) -> u64 {
        self.nonce
    }

    pub fn check(&self, provided: u64) -> Result<(), OperatorError> {
        if provided != self.nonce {
            return Err(OperatorError::StaleNonce {
                provided,
                current: self.nonce,
            });
        }
        Ok(())
    }

    /// Consumes the current nonce. Only called once an action fully succeeded.
    pub(crate) fn advance(&mut self) -> u64 {
        let consumed = self.nonce;
        self.nonce += 1;
        consumed
    }
}
