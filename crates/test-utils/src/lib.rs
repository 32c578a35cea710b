//! Test fixtures for operator scenario tests: in-memory collaborators and a
//! deterministic set of signers.

mod fixture;
mod mock;

pub use fixture::{FUND, OperatorFixture, Signer};
pub use mock::MockCustody;
