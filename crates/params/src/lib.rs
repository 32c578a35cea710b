//! Operator parameters: the operator identity and its two signer key sets.
//!
//! Parameters are fixed for the lifetime of an operator. They can be built
//! directly with [`OperatorParams::new`] or loaded from a JSON or TOML file
//! with [`OperatorParams::load_from_path`]; both paths run the same checks.

mod errors;
mod operator;

pub use errors::{KeySetRole, ParamsError};
pub use operator::OperatorParams;
