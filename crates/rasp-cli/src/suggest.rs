//! Suggest-email subcommand.

use std::io::Write;

use clap::Args;
use rasp_core::{suggest_email_domains, NormalizerConfig};

use crate::output::emit;

/// Arguments for the suggest-email subcommand.
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Partial address, e.g. `joao@gm`.
    pub input: String,
}

/// Print one completed address per line.
pub fn run(
    args: &SuggestArgs,
    config: &NormalizerConfig,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let suggestions = suggest_email_domains(&args.input, &config.email_domains);
    emit(out, json, &suggestions, |s| s.clone())
}
