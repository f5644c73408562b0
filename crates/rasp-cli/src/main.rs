//! # rasp CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Brazilian form-input normalization: CPF, CNPJ, phone, names, e-mail and
/// PIX keys.
#[derive(Parser, Debug)]
#[command(name = "rasp", version, about)]
struct Cli {
    /// YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print reports as JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Strip everything but digits.
    Digits(rasp_cli::format::DigitsArgs),
    /// Apply a CPF, CNPJ, phone or document mask.
    Format(rasp_cli::format::FormatArgs),
    /// Validate a CPF, CNPJ, phone, document or PIX key.
    Validate(rasp_cli::validate::ValidateArgs),
    /// Capitalize a personal name.
    Name(rasp_cli::name::NameArgs),
    /// Complete the domain of a partially typed e-mail.
    SuggestEmail(rasp_cli::suggest::SuggestArgs),
    /// Check a password against the sign-up policy.
    Password(rasp_cli::password::PasswordArgs),
    /// Build the canonical customer payload.
    Customer(rasp_cli::customer::CustomerArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = rasp_cli::config::load(cli.config.as_deref())?;
    let mut out = std::io::stdout().lock();

    let ok = match &cli.command {
        Commands::Digits(args) => {
            rasp_cli::format::run_digits(args, cli.json, &mut out)?;
            true
        }
        Commands::Format(args) => {
            rasp_cli::format::run_format(args, cli.json, &mut out)?;
            true
        }
        Commands::Validate(args) => rasp_cli::validate::run(args, cli.json, &mut out)?,
        Commands::Name(args) => {
            rasp_cli::name::run(args, &config, cli.json, &mut out)?;
            true
        }
        Commands::SuggestEmail(args) => {
            rasp_cli::suggest::run(args, &config, cli.json, &mut out)?;
            true
        }
        Commands::Password(args) => rasp_cli::password::run(args, &config, cli.json, &mut out)?,
        Commands::Customer(args) => {
            rasp_cli::customer::run(args, &config, &mut out)?;
            true
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
