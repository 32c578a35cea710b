//! `genparams` subcommand: builds an operator params file.

use custody_params::OperatorParams;
use tracing::info;

use crate::{
    args::{CmdContext, SubcGenParams},
    util::{parse_address, resolve_addresses, write_output},
};

/// Executes the `genparams` subcommand.
///
/// Key lists are taken in the order given. Parameters are validated before
/// anything is written.
pub(super) fn exec(cmd: SubcGenParams, _ctx: &mut CmdContext) -> anyhow::Result<()> {
    let operator = parse_address(&cmd.operator)?;
    let hot = resolve_addresses(cmd.hot_keys.as_deref(), &cmd.hot_key)?;
    let trust = resolve_addresses(cmd.trust_keys.as_deref(), &cmd.trust_key)?;

    if hot.is_empty() {
        anyhow::bail!("at least one operational key is required");
    }

    let params = OperatorParams::from_keys(
        operator,
        hot,
        cmd.hot_threshold,
        trust,
        cmd.trust_threshold,
    )?;

    info!(
        %operator,
        hot = params.hot().len(),
        hot_threshold = params.hot_threshold().get(),
        trust = params.trust().len(),
        trust_threshold = params.trust_threshold(),
        "built operator params"
    );

    let json = params.to_json_pretty()?;
    write_output(cmd.output.as_deref(), &json, false)
}
