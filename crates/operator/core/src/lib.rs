//! Authorization engine for a custodial fund operator.
//!
//! [`FundOperator`] is the entry point: one method per privileged action, each
//! checking the replay nonce, the action's preconditions against the
//! [`TrustRegistry`], and the signature policy the action requires before
//! forwarding to the [`collaborators`].

pub mod collaborators;
pub mod error;
pub mod events;
pub mod operator;
pub mod policy;
pub mod registry;
pub mod replay;

pub use collaborators::{CollaboratorError, Collaborators, CustodyWallets, FundContract, TokenLedger};
pub use error::OperatorError;
pub use events::{ActionReceipt, OperatorEvent};
pub use operator::FundOperator;
pub use policy::ThresholdPolicy;
pub use registry::{TrustRegistry, WalletClass};
pub use replay::ReplayGuard;
