//! `cbor-read` — drive a [`ByteStringReader`] from the command line.
//!
//! The binary entry point lives in `src/bin/cbor_read.rs`; this module holds
//! argument parsing, reader deployment and per-call outcome formatting so
//! they can be tested without spawning a process.

use std::path::PathBuf;

use anyhow::{bail, Context};
use cbor_read_core::{Address, ByteStringReader, ReadError, ReaderConfig, Receipt};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "cbor-read", version, about = "Decode CBOR byte strings into ParsedBytes32 events")]
pub struct Args {
    /// TOML file with `owner`, `value` and `label`.
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Owner address; overrides the config file.
    #[arg(long)]
    pub owner: Option<Address>,

    /// Caller address; defaults to the owner.
    #[arg(long)]
    pub caller: Option<Address>,

    /// Prefix for revert reasons; overrides the config file.
    #[arg(long)]
    pub label: Option<String>,

    /// Value held by the reader at deployment; overrides the config file.
    #[arg(long)]
    pub value: Option<u64>,

    /// Hex-encoded inputs, each decoded as a separate call.
    #[arg(required = true)]
    pub inputs: Vec<String>,
}

/// Result of one call as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    Success(Receipt),
    Revert { error: ReadError, reason: String },
}

impl CallOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CallOutcome::Success(_))
    }

    /// One output line: receipt JSON on success, `revert[: reason]` otherwise.
    pub fn render(&self) -> anyhow::Result<String> {
        match self {
            CallOutcome::Success(receipt) => Ok(receipt.to_json()?),
            CallOutcome::Revert { reason, .. } if reason.is_empty() => Ok("revert".to_string()),
            CallOutcome::Revert { reason, .. } => Ok(format!("revert: {reason}")),
        }
    }
}

/// Merges the config file with command-line overrides.
pub fn resolve_config(args: &Args) -> anyhow::Result<ReaderConfig> {
    let mut config = match (&args.config, args.owner) {
        (Some(path), _) => ReaderConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        (None, Some(owner)) => ReaderConfig::new(owner),
        (None, None) => bail!("an owner is required: pass --owner or --config"),
    };
    if let Some(owner) = args.owner {
        config.owner = owner;
    }
    if let Some(value) = args.value {
        config.value = value;
    }
    if let Some(label) = &args.label {
        config.label = Some(label.clone());
    }
    Ok(config)
}

/// Parses a hex input with or without a `0x` prefix.
pub fn parse_input(s: &str) -> anyhow::Result<Vec<u8>> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    hex::decode(digits).with_context(|| format!("invalid hex input {s:?}"))
}

/// Runs one call against `reader`.
pub fn call(reader: &ByteStringReader, caller: &Address, input: &[u8]) -> CallOutcome {
    match reader.read_this(caller, input) {
        Ok(receipt) => CallOutcome::Success(receipt),
        Err(error) => CallOutcome::Revert {
            reason: reader.revert_reason(&error),
            error,
        },
    }
}

/// Decodes every input before running any call so a bad argument aborts early.
pub fn run(args: &Args) -> anyhow::Result<Vec<CallOutcome>> {
    let config = resolve_config(args)?;
    let reader = config.deploy();
    let caller = args.caller.unwrap_or(config.owner);
    tracing::debug!(owner = %config.owner, %caller, calls = args.inputs.len(), "running calls");
    let inputs = args
        .inputs
        .iter()
        .map(|s| parse_input(s))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(inputs
        .iter()
        .map(|input| call(&reader, &caller, input))
        .collect())
}
