//! Report rendering for a queried zone.
//!
//! This module turns a [`Zone`] into the formats printed by the CLI:
//! - a sectioned plain-text report
//! - a pretty-printed JSON document

mod json;
mod text;

use std::io::Write;

use anyhow::{Context, Result};

use crate::config::OutputFormat;
use crate::zone::Zone;

pub use json::render_json;
pub use text::render_text;

/// Writes the report of `zone` in `format` to `writer`.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_report<W: Write>(zone: &Zone, format: OutputFormat, writer: &mut W) -> Result<()> {
    let rendered = match format {
        OutputFormat::Text => render_text(zone),
        OutputFormat::Json => render_json(zone)?,
    };
    writer
        .write_all(rendered.as_bytes())
        .context("Failed to write report")?;
    if !rendered.ends_with('\n') {
        writeln!(writer).context("Failed to write report")?;
    }
    writer.flush().context("Failed to flush report")?;
    Ok(())
}
