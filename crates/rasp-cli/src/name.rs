//! Name subcommand: capitalize a personal name with the configured stop
//! words.

use std::io::Write;

use clap::Args;
use rasp_core::{capitalize_name_with, NormalizerConfig};

use crate::output::emit;

/// Arguments for the name subcommand.
#[derive(Args, Debug)]
pub struct NameArgs {
    /// Name as typed; several words may be passed unquoted.
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
}

/// Print the capitalized name.
pub fn run(
    args: &NameArgs,
    config: &NormalizerConfig,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let name = capitalize_name_with(&args.words.join(" "), &config.stop_words);
    emit(out, json, &name, |n| vec![n.clone()])
}
