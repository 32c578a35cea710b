//! Parsing and file helpers shared by the `custody-datatool` subcommands.

use std::{
    fs,
    io::{self, Write},
    path::Path,
    str::FromStr,
};

use alloy_primitives::Address;
use anyhow::Context;
use custody_operator_txs::OperatorAction;
use secp256k1::SecretKey;

/// Returns the meaningful lines of `contents`: trimmed, with blank lines and
/// `#` comments dropped.
pub(crate) fn data_lines(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

pub(crate) fn parse_address(s: &str) -> anyhow::Result<Address> {
    Address::from_str(s.trim()).with_context(|| format!("invalid address: {s}"))
}

/// Parses a 32-byte hex secret key, with or without a `0x` prefix.
pub(crate) fn parse_secret_key(s: &str) -> anyhow::Result<SecretKey> {
    let s = s.trim();
    let bytes = hex::decode(s.strip_prefix("0x").unwrap_or(s)).context("secret key is not hex")?;
    SecretKey::from_slice(&bytes).context("invalid secret key")
}

/// Collects addresses from an optional file followed by those given inline.
pub(crate) fn resolve_addresses(
    file: Option<&Path>,
    inline: &[String],
) -> anyhow::Result<Vec<Address>> {
    let mut addrs = Vec::new();

    if let Some(path) = file {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read key list {}", path.display()))?;
        for line in data_lines(&contents) {
            addrs.push(parse_address(line)?);
        }
    }

    for s in inline {
        addrs.push(parse_address(s)?);
    }

    Ok(addrs)
}

/// Reads a key file, keeping keys in file order.
pub(crate) fn read_key_file(path: &Path) -> anyhow::Result<Vec<SecretKey>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read key file {}", path.display()))?;
    data_lines(&contents)
        .enumerate()
        .map(|(i, line)| {
            parse_secret_key(line).with_context(|| format!("key {i} in {}", path.display()))
        })
        .collect()
}

pub(crate) fn read_action(path: &Path) -> anyhow::Result<OperatorAction> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read action file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse action file {}", path.display()))
}

/// Writes `contents` to `output`, or to stdout if no path is given.
pub(crate) fn write_output(output: Option<&Path>, contents: &str, force: bool) -> anyhow::Result<()> {
    let Some(path) = output else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(contents.as_bytes())?;
        if !contents.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        return Ok(());
    };

    if path.exists() && !force {
        anyhow::bail!("not overwriting file {}, add --force to overwrite", path.display());
    }
    fs::write(path, contents).with_context(|| format!("failed to write to file {}", path.display()))
}
