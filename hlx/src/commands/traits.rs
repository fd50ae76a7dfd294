//! Report trait shared by the hlx commands.
//!
//! Every command produces one report per input (or one overall report)
//! and renders it either as aligned text or as JSON.

use std::io::Write;

use serde::Serialize;

use super::common::OutputFormat;
use crate::error::Result;

/// A command result that can be printed in every output format.
pub trait Report: Serialize {
    /// Writes the human-readable rendering.
    fn write_text(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

/// Writes `reports` to `out` in the requested format.
///
/// JSON output is a single array so it can be piped into other tools.
pub fn emit<R: Report>(reports: &[R], format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                report.write_text(out)?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reports)?;
            writeln!(out)?;
        },
    }
    out.flush()?;
    Ok(())
}
