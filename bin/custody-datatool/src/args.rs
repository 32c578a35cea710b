//! Command line arguments for the `custody-datatool` binary.

use std::path::PathBuf;

use argh::FromArgs;
use rand::rngs::OsRng;

/// Args.
#[derive(FromArgs)]
pub(crate) struct Args {
    #[argh(switch, description = "emit logs as JSON on stderr")]
    pub(crate) json_logs: bool,

    #[argh(subcommand)]
    pub(crate) subc: Subcommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
pub(crate) enum Subcommand {
    GenKeys(SubcGenKeys),
    GenParams(SubcGenParams),
    Sighash(SubcSighash),
    Sign(SubcSign),
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "genkeys",
    description = "generates secp256k1 signing keys and writes them as a key file"
)]
pub(crate) struct SubcGenKeys {
    #[argh(
        option,
        description = "number of keys to generate (default 1)",
        short = 'n',
        default = "1"
    )]
    pub(crate) count: usize,

    #[argh(
        option,
        description = "output key file path (default stdout)",
        short = 'o'
    )]
    pub(crate) output: Option<PathBuf>,

    #[argh(switch, description = "force overwrite", short = 'f')]
    pub(crate) force: bool,
}

/// Build an operator params file.
#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "genparams",
    description = "generates operator params from key addresses and thresholds"
)]
pub(crate) struct SubcGenParams {
    #[argh(option, description = "operator identity address", short = 'p')]
    pub(crate) operator: String,

    #[argh(
        option,
        description = "add an operational key address (appended after file keys)",
        short = 'k'
    )]
    pub(crate) hot_key: Vec<String>,

    #[argh(option, description = "read operational key addresses by line from file")]
    pub(crate) hot_keys: Option<PathBuf>,

    #[argh(option, description = "operational signing threshold")]
    pub(crate) hot_threshold: u8,

    #[argh(
        option,
        description = "add a trust-party key address (appended after file keys)",
        short = 't'
    )]
    pub(crate) trust_key: Vec<String>,

    #[argh(option, description = "read trust-party key addresses by line from file")]
    pub(crate) trust_keys: Option<PathBuf>,

    #[argh(
        option,
        description = "trust-party signing threshold (default 0)",
        default = "0"
    )]
    pub(crate) trust_threshold: u8,

    #[argh(
        option,
        description = "output file path .json (default stdout)",
        short = 'o'
    )]
    pub(crate) output: Option<PathBuf>,
}

/// Print the message to sign for an action.
#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "sighash",
    description = "prints the sighash and signing digest of an action"
)]
pub(crate) struct SubcSighash {
    #[argh(option, description = "operator params file (.json or .toml)", short = 'p')]
    pub(crate) params: PathBuf,

    #[argh(option, description = "action file (.json)", short = 'a')]
    pub(crate) action: PathBuf,

    #[argh(option, description = "nonce the action is signed against", short = 'n')]
    pub(crate) nonce: u64,
}

/// Sign an action and write the signed payload.
#[derive(FromArgs, PartialEq, Debug)]
#[argh(
    subcommand,
    name = "sign",
    description = "signs an action with keys in file order and writes a signed payload"
)]
pub(crate) struct SubcSign {
    #[argh(option, description = "operator params file (.json or .toml)", short = 'p')]
    pub(crate) params: PathBuf,

    #[argh(option, description = "action file (.json)", short = 'a')]
    pub(crate) action: PathBuf,

    #[argh(option, description = "nonce the action is signed against", short = 'n')]
    pub(crate) nonce: u64,

    #[argh(
        option,
        description = "key file, one hex secret key per line, in signing order",
        short = 'k'
    )]
    pub(crate) key_file: PathBuf,

    #[argh(
        option,
        description = "output file path .json (default stdout)",
        short = 'o'
    )]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) struct CmdContext {
    /// Shared RNG, must be a cryptographically secure, high-entropy RNG.
    pub(crate) rng: OsRng,
}

/// Resolves the command context and subcommand from the parsed command line arguments.
pub(crate) fn resolve_context_and_subcommand(
    args: Args,
) -> anyhow::Result<(CmdContext, Subcommand)> {
    let ctx = CmdContext { rng: OsRng };
    Ok((ctx, args.subc))
}
