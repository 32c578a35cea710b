//! Command line tool for preparing custody operator data.
//!
//! Generates signing keys and parameter files, computes the message signers
//! must sign for an action, and assembles signed payloads.
//!
//! # Warning
//!
//! Keys are written to disk in plain hex. This tool is intended for testing
//! and signature collection rehearsals, not for holding production keys.

mod args;
mod cmd;
mod util;

use std::process;

use args::resolve_context_and_subcommand;
use cmd::exec_subc;
use custody_common::logging::{self, LoggerConfig};

fn main() {
    let args: args::Args = argh::from_env();
    logging::init(
        LoggerConfig::new("custody-datatool".to_string())
            .with_json_logging(args.json_logs)
            .with_stderr(true),
    );

    let inner = || -> anyhow::Result<()> {
        let (mut ctx, subc) = resolve_context_and_subcommand(args)?;
        exec_subc(subc, &mut ctx)?;
        Ok(())
    };
    if let Err(e) = inner() {
        eprintln!("ERROR\n{e:?}");
        process::exit(1);
    }
}
