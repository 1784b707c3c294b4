//! Configuration constants.
//!
//! This module defines the constants used throughout the application: resolver
//! timeouts, the candidate record names probed for every domain, and the
//! registrar table used to classify address owners.

// Network operation timeouts
/// DNS query timeout in seconds (per lookup, enforced by the resolver)
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// Number of transport attempts the resolver makes per lookup
pub const DNS_ATTEMPTS: usize = 2;
/// Overall deadline for one zone query when run from the CLI
pub const QUERY_TIMEOUT_SECS: u64 = 60;
/// Default DNS port used when explicit nameservers are configured
pub const DNS_PORT: u16 = 53;

/// Version tag opening an SPF policy TXT record.
pub const SPF_VERSION_TAG: &str = "v=spf1";
/// Version tag opening a DMARC policy TXT record.
pub const DMARC_VERSION_TAG: &str = "v=DMARC1";

/// Owner reported when a reverse name matches no known provider.
pub const UNKNOWN_OWNER: &str = "Unknown";

/// Record name prefixes probed for TXT records.
///
/// The empty prefix stands for the bare domain; every other prefix is joined to
/// the domain with a dot (`_dmarc` -> `_dmarc.example.com`).
pub const COMMON_TXT_PREFIXES: &[&str] = &["", "_dmarc", "_amazonses", "google._domainkey"];

/// Subdomain labels probed for CNAME records, in lookup order.
pub const COMMON_CNAME_LABELS: &[&str] = &[
    "www",
    "mail",
    "beta",
    "dev",
    "alpha",
    "private",
    "developers",
    "www2",
    "www3",
];

/// Registrable zones of reverse names mapped to the organization operating them.
///
/// Only `.com` and `.net` zones are consulted. To recognize another provider,
/// add its zone here.
pub const KNOWN_OWNERS: &[(&str, &str)] = &[
    ("amazonaws.com", "Amazon.com, Inc."),
    ("1e100.net", "Google LLC"),
    ("domaincontrol.com", "GoDaddy"),
    ("cloudflare.com", "CloudFlare"),
];
