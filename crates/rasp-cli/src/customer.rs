//! Customer subcommand: build the canonical customer payload the backend
//! expects from raw form values. Always prints JSON.

use std::io::Write;

use anyhow::Context;
use clap::Args;
use rasp_core::{CustomerRecord, NormalizerConfig};

/// Arguments for the customer subcommand.
#[derive(Args, Debug)]
pub struct CustomerArgs {
    /// Full name.
    #[arg(long)]
    pub name: String,

    /// E-mail address.
    #[arg(long)]
    pub email: String,

    /// Phone, with or without area code.
    #[arg(long)]
    pub phone: String,

    /// CPF or CNPJ, masked or not.
    #[arg(long)]
    pub document: String,
}

/// Print the normalized record.
pub fn run(args: &CustomerArgs, config: &NormalizerConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let record = CustomerRecord::normalize(
        &args.name,
        &args.email,
        &args.phone,
        &args.document,
        config,
    )
    .context("customer data rejected")?;
    tracing::debug!(document_type = %record.document_type, "customer normalized");
    serde_json::to_writer_pretty(&mut *out, &record)?;
    writeln!(out)?;
    Ok(())
}
