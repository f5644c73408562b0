//! Password subcommand: check a candidate password against the configured
//! policy. Exits with status 1 when any rule fails.

use std::io::Write;

use clap::Args;
use rasp_core::{NormalizerConfig, PasswordRule};
use serde::Serialize;

use crate::output::emit;

/// Arguments for the password subcommand.
#[derive(Args, Debug)]
pub struct PasswordArgs {
    /// Candidate password.
    pub password: String,
}

#[derive(Debug, Serialize)]
struct PasswordReport {
    accepted: bool,
    failed: Vec<PasswordRule>,
}

/// Report the rules `args.password` breaks. Returns whether it is accepted.
pub fn run(
    args: &PasswordArgs,
    config: &NormalizerConfig,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let failed = config.password.check(&args.password);
    let report = PasswordReport {
        accepted: failed.is_empty(),
        failed,
    };
    emit(out, json, &report, |r| {
        if r.accepted {
            vec!["accepted".to_string()]
        } else {
            r.failed.iter().map(|rule| format!("rejected: {rule}")).collect()
        }
    })?;
    Ok(report.accepted)
}
