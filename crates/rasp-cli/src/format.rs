//! # Digits and Format Subcommands
//!
//! Mirror the live masks of the web forms so exported values can be
//! cleaned or displayed the same way.

use std::io::Write;

use clap::Args;
use rasp_core::{extract_digits, Mask};
use serde::Serialize;

use crate::output::emit;

/// Arguments for the digits subcommand.
#[derive(Args, Debug)]
pub struct DigitsArgs {
    /// Raw text; everything but ASCII digits is dropped.
    pub input: String,
}

/// Arguments for the format subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Mask to apply: cpf, cnpj, phone or document.
    pub mask: Mask,

    /// Raw or partially typed value.
    pub input: String,
}

#[derive(Debug, Serialize)]
struct FormatReport<'a> {
    input: &'a str,
    digits: String,
    formatted: String,
}

/// Print the digits of `args.input`.
pub fn run_digits(args: &DigitsArgs, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let digits = extract_digits(&args.input);
    emit(out, json, &digits, |d| vec![d.to_string()])
}

/// Print `args.input` under the chosen mask.
pub fn run_format(args: &FormatArgs, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let report = FormatReport {
        input: &args.input,
        digits: extract_digits(&args.input)
            .truncated(args.mask.max_digits())
            .into_string(),
        formatted: args.mask.apply(&args.input),
    };
    emit(out, json, &report, |r| vec![r.formatted.clone()])
}
