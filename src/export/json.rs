//! JSON report.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::zone::Zone;

/// Zone fields plus the email policies derived from its TXT records.
#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    zone: &'a Zone,
    spf: Option<&'a str>,
    dmarc: Option<&'a str>,
}

/// Renders `zone` as a pretty-printed JSON object.
///
/// Addresses are rendered as strings; `txt` and `cname` are objects with
/// sorted keys. `spf` and `dmarc` are `null` when not published.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(zone: &Zone) -> Result<String> {
    let report = JsonReport {
        zone,
        spf: zone.spf(),
        dmarc: zone.dmarc(),
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize zone to JSON")
}
