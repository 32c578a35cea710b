//! Privileged operator actions, their canonical signed message, and the
//! submission envelope that carries them.

pub mod actions;
pub mod constants;
pub mod encoding;
pub mod payload;

pub use actions::{OperatorAction, Sighash};
pub use constants::ActionKind;
pub use payload::SignedPayload;
