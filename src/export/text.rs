//! Plain-text report.

use std::fmt;

use crate::zone::{Ip, Zone};

const NONE: &str = "  (none)";

/// Renders `zone` as a sectioned plain-text report.
///
/// Sections appear in lookup order (A, MX, NS, TXT, CNAME) followed by an
/// email policy summary. Each address line shows the owner and reverse names.
pub fn render_text(zone: &Zone) -> String {
    TextReport(zone).to_string()
}

struct TextReport<'a>(&'a Zone);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zone = self.0;
        writeln!(f, "Zone: {}", zone.name)?;

        writeln!(f, "\nA")?;
        if zone.a.is_empty() {
            writeln!(f, "{NONE}")?;
        }
        for ip in &zone.a {
            write_ip(f, ip, "  ")?;
        }

        writeln!(f, "\nMX")?;
        if zone.mx.is_empty() {
            writeln!(f, "{NONE}")?;
        }
        for mx in &zone.mx {
            writeln!(f, "  {:>5}  {}", mx.priority, mx.host.name)?;
            for ip in &mx.host.ips {
                write_ip(f, ip, "         ")?;
            }
        }

        writeln!(f, "\nNS")?;
        if zone.ns.is_empty() {
            writeln!(f, "{NONE}")?;
        }
        for host in &zone.ns {
            writeln!(f, "  {}", host.name)?;
            for ip in &host.ips {
                write_ip(f, ip, "    ")?;
            }
        }

        writeln!(f, "\nTXT")?;
        if zone.txt.is_empty() {
            writeln!(f, "{NONE}")?;
        }
        for (name, records) in &zone.txt {
            writeln!(f, "  {name}")?;
            for record in records {
                writeln!(f, "    {record:?}")?;
            }
        }

        writeln!(f, "\nCNAME")?;
        if zone.cname.is_empty() {
            writeln!(f, "{NONE}")?;
        }
        for (label, target) in &zone.cname {
            writeln!(f, "  {label}.{} -> {target}", zone.name)?;
        }

        writeln!(f, "\nEmail policy")?;
        writeln!(
            f,
            "  SPF:   {}",
            zone.spf().unwrap_or("(not published)")
        )?;
        writeln!(
            f,
            "  DMARC: {}",
            zone.dmarc().unwrap_or("(not published)")
        )
    }
}

fn write_ip(f: &mut fmt::Formatter<'_>, ip: &Ip, indent: &str) -> fmt::Result {
    if ip.ptrs.is_empty() {
        writeln!(f, "{indent}{:<39}  {}", ip.addr.to_string(), ip.owner)
    } else {
        writeln!(
            f,
            "{indent}{:<39}  {}  ({})",
            ip.addr.to_string(),
            ip.owner,
            ip.ptrs.join(", ")
        )
    }
}
