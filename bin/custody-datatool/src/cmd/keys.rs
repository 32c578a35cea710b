//! `genkeys` subcommand: generates signing keys.

use std::fmt::Write;

use alloy_primitives::Address;
use custody_crypto::threshold_signature::address_of;
use rand::{CryptoRng, RngCore};
use secp256k1::SecretKey;
use tracing::info;

use crate::{
    args::{CmdContext, SubcGenKeys},
    util::write_output,
};

/// Executes the `genkeys` subcommand.
///
/// Keys are sorted by address so that any prefix of the file is a correctly
/// ordered signing segment. Each key is preceded by a comment with its address.
pub(super) fn exec(cmd: SubcGenKeys, ctx: &mut CmdContext) -> anyhow::Result<()> {
    if cmd.count == 0 {
        anyhow::bail!("key count must be at least 1");
    }

    let keys = gen_keys(&mut ctx.rng, cmd.count);
    let mut contents = String::new();
    for (key, address) in &keys {
        writeln!(contents, "# {address}")?;
        writeln!(contents, "0x{}", hex::encode(key.secret_bytes()))?;
    }

    write_output(cmd.output.as_deref(), &contents, cmd.force)?;
    info!(count = keys.len(), "generated keys");
    Ok(())
}

/// Generates `count` keys, sorted by address.
fn gen_keys<R: RngCore + CryptoRng>(rng: &mut R, count: usize) -> Vec<(SecretKey, Address)> {
    let mut keys: Vec<_> = (0..count)
        .map(|_| {
            let key = SecretKey::new(rng);
            (key, address_of(&key))
        })
        .collect();
    keys.sort_by_key(|(_, address)| *address);
    keys
}
