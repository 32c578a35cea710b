//! `sighash` and `sign` subcommands: compute and sign the message for an
//! action.

use alloy_primitives::{Address, B256};
use custody_crypto::{
    SignatureBatch,
    threshold_signature::{recover_signers, sign_digest},
};
use custody_operator_txs::{OperatorAction, Sighash, SignedPayload};
use custody_params::OperatorParams;
use secp256k1::SecretKey;
use tracing::{info, warn};

use crate::{
    args::{CmdContext, SubcSighash, SubcSign},
    util::{read_action, read_key_file, write_output},
};

/// Executes the `sighash` subcommand.
///
/// Prints the packed-message hash and the EIP-191 digest the signers sign.
pub(super) fn exec_sighash(cmd: SubcSighash, _ctx: &mut CmdContext) -> anyhow::Result<()> {
    let params = OperatorParams::load_from_path(&cmd.params)?;
    let action = read_action(&cmd.action)?;

    let operator = params.operator();
    let sighash = action.compute_sighash(&operator, cmd.nonce);
    let digest = action.signing_digest(&operator, cmd.nonce);

    info!(kind = %action.kind(), nonce = cmd.nonce, %operator, "computed sighash");
    println!("sighash {sighash}");
    println!("digest  {digest}");
    Ok(())
}

/// Executes the `sign` subcommand.
///
/// Signs with every key in the key file, in file order. The recovered signers
/// are classified against the params so that a batch that cannot satisfy any
/// policy is noticed before it is submitted.
pub(super) fn exec_sign(cmd: SubcSign, _ctx: &mut CmdContext) -> anyhow::Result<()> {
    let params = OperatorParams::load_from_path(&cmd.params)?;
    let action = read_action(&cmd.action)?;
    let keys = read_key_file(&cmd.key_file)?;
    if keys.is_empty() {
        anyhow::bail!("key file {} holds no keys", cmd.key_file.display());
    }

    let payload = sign_payload(&params, action, cmd.nonce, &keys);
    report_signers(&params, &payload)?;

    let json = payload.to_json_pretty()?;
    write_output(cmd.output.as_deref(), &json, false)
}

fn sign_payload(
    params: &OperatorParams,
    action: OperatorAction,
    nonce: u64,
    keys: &[SecretKey],
) -> SignedPayload {
    let digest = action.signing_digest(&params.operator(), nonce);
    let batch: SignatureBatch = keys.iter().map(|key| sign_digest(&digest, key)).collect();
    SignedPayload::new(nonce, action, batch)
}

fn report_signers(params: &OperatorParams, payload: &SignedPayload) -> anyhow::Result<()> {
    let digest: B256 = payload.signing_digest(&params.operator());
    let signers = recover_signers(payload.signatures(), &digest)?;

    for (index, signer) in signers.iter().enumerate() {
        match key_role(params, signer) {
            Some(role) => info!(index, %signer, role, "signer"),
            None => warn!(index, %signer, "signer is in neither key set"),
        }
    }

    info!(
        kind = %payload.action().kind(),
        nonce = payload.nonce(),
        signatures = signers.len(),
        "signed payload"
    );
    Ok(())
}

fn key_role(params: &OperatorParams, signer: &Address) -> Option<&'static str> {
    if params.hot().contains(signer) {
        Some("hot")
    } else if params.trust().contains(signer) {
        Some("trust")
    } else {
        None
    }
}
