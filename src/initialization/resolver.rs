//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{
    LookupIpStrategy, NameServerConfigGroup, ResolverConfig, ResolverOpts,
};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::{Resolver, TokioResolver};

use crate::config::{DNS_ATTEMPTS, DNS_PORT, DNS_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Settings for the DNS resolver used by the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    /// Per-lookup timeout.
    pub timeout: Duration,
    /// Transport attempts per lookup.
    pub attempts: usize,
    /// Nameservers to query; empty means the system configuration.
    pub nameservers: Vec<IpAddr>,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DNS_TIMEOUT_SECS),
            attempts: DNS_ATTEMPTS,
            nameservers: Vec::new(),
        }
    }
}

/// Initializes the DNS resolver for hostname lookups.
///
/// Uses the system resolver configuration (`/etc/resolv.conf` or the platform
/// equivalent) unless explicit nameservers are given, in which case those are
/// queried over UDP with TCP fallback on port 53.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the system configuration
/// cannot be read.
pub fn init_resolver(settings: &ResolverSettings) -> Result<Arc<TokioResolver>, InitializationError> {
    let mut opts = ResolverOpts::default();
    opts.timeout = settings.timeout;
    opts.attempts = settings.attempts;
    // Set ndots to 0 to prevent search domain appending
    opts.ndots = 0;
    // Query A and AAAA together; dual-stack hosts report both families
    opts.ip_strategy = LookupIpStrategy::Ipv4AndIpv6;

    let builder = if settings.nameservers.is_empty() {
        TokioResolver::builder_tokio()
            .map_err(|e| InitializationError::DnsResolverError(e.to_string()))?
    } else {
        let group = NameServerConfigGroup::from_ips_clear(&settings.nameservers, DNS_PORT, true);
        Resolver::builder_with_config(
            ResolverConfig::from_parts(None, vec![], group),
            TokioConnectionProvider::default(),
        )
    };

    log::debug!(
        "DNS resolver ready (timeout {:?}, {} attempt(s), {})",
        settings.timeout,
        settings.attempts,
        if settings.nameservers.is_empty() {
            "system nameservers".to_string()
        } else {
            format!("{} explicit nameserver(s)", settings.nameservers.len())
        }
    );

    Ok(Arc::new(builder.with_options(opts).build()))
}
