//! Report rendering shared by the subcommands.

use std::io::Write;

use serde::Serialize;

/// Write `report` as pretty JSON when `json` is set, otherwise as the
/// plain-text lines returned by `plain`.
pub fn emit<T, W>(out: &mut W, json: bool, report: &T, plain: impl FnOnce(&T) -> Vec<String>) -> anyhow::Result<()>
where
    T: Serialize,
    W: Write,
{
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
    } else {
        for line in plain(report) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}
