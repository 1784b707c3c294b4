//! IP address resolution and reverse DNS lookup.
//!
//! This module provides functions to resolve hostnames to IP addresses
//! and perform reverse DNS lookups (PTR records).

use std::net::IpAddr;

use hickory_resolver::TokioResolver;

use super::classify;
use crate::error_handling::LookupError;

/// Resolves a hostname to all of its IP addresses.
///
/// # Arguments
///
/// * `host` - The hostname to resolve
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// The IPv4 and IPv6 addresses of the host, in the order the resolver returned
/// them. Both families are included when the resolver is built by
/// [`crate::initialization::init_resolver`].
///
/// # Errors
///
/// Returns `LookupError::NotFound` if the name has no addresses and
/// `LookupError::Failed` for any other resolver failure.
pub async fn resolve_host(host: &str, resolver: &TokioResolver) -> Result<Vec<IpAddr>, LookupError> {
    let response = resolver.lookup_ip(host).await.map_err(classify)?;
    let addrs: Vec<IpAddr> = response.iter().collect();
    if addrs.is_empty() {
        return Err(LookupError::NotFound);
    }
    Ok(addrs)
}

/// Performs a reverse DNS lookup (PTR record) for an IP address.
///
/// # Arguments
///
/// * `ip` - The IP address to look up
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// Every PTR name published for the address, in answer order.
pub async fn reverse_dns_lookup(
    ip: IpAddr,
    resolver: &TokioResolver,
) -> Result<Vec<String>, LookupError> {
    let response = resolver.reverse_lookup(ip).await.map_err(classify)?;
    Ok(response.iter().map(|name| name.to_utf8()).collect())
}
