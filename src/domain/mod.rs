//! Domain name normalization utilities.
//!
//! Key functions:
//! - `normalize_domain()` - Turns user input into the domain that gets queried
//! - `trim_hostname()` - Drops the trailing root dot from a resolved name

use anyhow::{bail, Result};

/// Strips the trailing root dot from a fully qualified name.
///
/// Only one dot is removed; `"example.com."` becomes `"example.com"` and names
/// without a trailing dot are returned unchanged.
pub fn trim_hostname(hostname: &str) -> String {
    hostname.strip_suffix('.').unwrap_or(hostname).to_string()
}

/// Normalizes a domain given on the command line.
///
/// Accepts bare names (`Example.COM.`) as well as URLs
/// (`https://example.com/path`): the scheme, path, port and one trailing dot are
/// removed and the result is lowercased.
///
/// # Errors
///
/// Returns an error if nothing is left after normalization, if the name
/// contains whitespace or empty labels, or if it is an IP address literal.
pub fn normalize_domain(input: &str) -> Result<String> {
    let trimmed = input.trim();

    // Drop a URL scheme and anything after the host
    let without_scheme = trimmed
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(trimmed);
    let host = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = strip_port(host);

    let name = trim_hostname(host).to_lowercase();

    if name.is_empty() {
        bail!("Domain '{}' is empty", input);
    }
    if name.parse::<std::net::IpAddr>().is_ok() {
        bail!("'{}' is an IP address, not a domain", input);
    }
    if name.chars().any(char::is_whitespace) {
        bail!("Domain '{}' contains whitespace", input);
    }
    if name.split('.').any(str::is_empty) {
        bail!("Domain '{}' contains an empty label", input);
    }

    Ok(name)
}

/// Removes a `:port` suffix, leaving bare IPv6 literals intact.
fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port))
            if !name.contains(':') && !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) =>
        {
            name
        }
        _ => host,
    }
}
