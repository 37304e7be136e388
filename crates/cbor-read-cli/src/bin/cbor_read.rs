//! `cbor-read` — decode hex-encoded CBOR byte strings as a caller.
//!
//! Usage:
//!   cbor-read [--config FILE] [--owner ADDR] [--caller ADDR] [--label TEXT] [--value N] HEX...
//!
//! Receipts go to stdout as JSON lines, reverts to stderr. Exits 1 if any
//! call reverted and 2 on usage or configuration errors.

use std::io::{self, Write};
use std::process::ExitCode;

use cbor_read_cli::{run, Args};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let outcomes = match run(&args) {
        Ok(outcomes) => outcomes,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::from(2);
        }
    };

    let mut stdout = io::stdout().lock();
    let mut reverted = false;
    for outcome in &outcomes {
        let line = match outcome.render() {
            Ok(line) => line,
            Err(e) => {
                eprintln!("{e:#}");
                return ExitCode::from(2);
            }
        };
        if outcome.is_success() {
            if writeln!(stdout, "{line}").is_err() {
                return ExitCode::from(2);
            }
        } else {
            reverted = true;
            eprintln!("{line}");
        }
    }

    if reverted {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
