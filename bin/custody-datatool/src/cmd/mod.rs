//! Subcommand implementations.

mod keys;
mod params;
mod sign;

use crate::args::{CmdContext, Subcommand};

/// Executes a subcommand.
pub(crate) fn exec_subc(cmd: Subcommand, ctx: &mut CmdContext) -> anyhow::Result<()> {
    match cmd {
        Subcommand::GenKeys(subc) => keys::exec(subc, ctx),
        Subcommand::GenParams(subc) => params::exec(subc, ctx),
        Subcommand::Sighash(subc) => sign::exec_sighash(subc, ctx),
        Subcommand::Sign(subc) => sign::exec_sign(subc, ctx),
    }
}
