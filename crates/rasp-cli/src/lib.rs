//! # rasp-cli — Input Normalization Command-Line Interface
//!
//! Thin clap front end over `rasp-core`, for support staff checking a
//! customer's document and for scripts that clean exported data.
//!
//! ## Subcommands
//!
//! - `digits`: strip everything but digits
//! - `format`: apply a CPF, CNPJ, phone or document mask
//! - `validate`: checksum/shape validation, exit status 1 when invalid
//! - `name`: capitalize a personal name
//! - `suggest-email`: complete the domain of a partial e-mail
//! - `password`: check a password against the policy
//! - `customer`: build the canonical customer payload as JSON
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from logic; each handler writes to a
//!   caller-supplied writer so it can be tested without a process.
//! - Handlers delegate to `rasp-core`; no normalization logic here.

pub mod config;
pub mod customer;
pub mod format;
pub mod name;
pub mod output;
pub mod password;
pub mod suggest;
pub mod validate;
