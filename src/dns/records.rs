//! DNS record queries (NS, TXT, MX, CNAME).
//!
//! This module provides functions to query various DNS record types:
//! - Nameserver records (NS)
//! - Text records (TXT)
//! - Mail exchanger records (MX)
//! - Canonical names, read from an address lookup

use hickory_resolver::proto::rr::{RData, Record, RecordType};
use hickory_resolver::TokioResolver;

use super::classify;
use crate::error_handling::LookupError;

/// Queries NS (nameserver) records for a domain.
///
/// # Arguments
///
/// * `domain` - The domain to query
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// A vector of nameserver hostnames in answer order.
pub async fn lookup_ns_records(
    domain: &str,
    resolver: &TokioResolver,
) -> Result<Vec<String>, LookupError> {
    let lookup = resolver
        .lookup(domain, RecordType::NS)
        .await
        .map_err(classify)?;
    Ok(lookup
        .iter()
        .filter_map(|rdata| {
            if let RData::NS(ns) = rdata {
                Some(ns.to_utf8())
            } else {
                None
            }
        })
        .collect())
}

/// Queries TXT (text) records for a name.
///
/// # Arguments
///
/// * `name` - The fully qualified name to query
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// One string per TXT record, in answer order.
pub async fn lookup_txt_records(
    name: &str,
    resolver: &TokioResolver,
) -> Result<Vec<String>, LookupError> {
    let lookup = resolver
        .lookup(name, RecordType::TXT)
        .await
        .map_err(classify)?;
    Ok(lookup
        .iter()
        .filter_map(|rdata| {
            if let RData::TXT(txt) = rdata {
                // TXT records can contain multiple strings - join them
                Some(
                    txt.iter()
                        .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                        .collect::<Vec<String>>()
                        .join(""),
                )
            } else {
                None
            }
        })
        .collect())
}

/// Queries MX (mail exchanger) records for a domain.
///
/// # Arguments
///
/// * `domain` - The domain to query
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// A vector of (preference, exchange) tuples in answer order. Ordering is left
/// to the caller.
pub async fn lookup_mx_records(
    domain: &str,
    resolver: &TokioResolver,
) -> Result<Vec<(u16, String)>, LookupError> {
    let lookup = resolver
        .lookup(domain, RecordType::MX)
        .await
        .map_err(classify)?;
    Ok(lookup
        .iter()
        .filter_map(|rdata| {
            if let RData::MX(mx) = rdata {
                Some((mx.preference(), mx.exchange().to_utf8()))
            } else {
                None
            }
        })
        .collect())
}

/// Resolves the canonical name of a name.
///
/// The name is resolved as a host, and the canonical name is read from the
/// answer: the owner of the address records, or else the target of the last
/// alias in the chain. A name that is not an alias but has addresses is its
/// own canonical name.
///
/// # Errors
///
/// Returns `LookupError::NotFound` if the name does not resolve.
pub async fn lookup_cname_record(
    name: &str,
    resolver: &TokioResolver,
) -> Result<String, LookupError> {
    let response = resolver.lookup_ip(name).await.map_err(classify)?;
    canonical_name(response.as_lookup().records()).ok_or(LookupError::NotFound)
}

/// Picks the canonical name out of the records of an address lookup.
pub(super) fn canonical_name(records: &[Record]) -> Option<String> {
    let owner = records
        .iter()
        .find(|record| matches!(record.data(), RData::A(_) | RData::AAAA(_)))
        .map(|record| record.name().to_utf8());
    owner.or_else(|| {
        records
            .iter()
            .filter_map(|record| match record.data() {
                RData::CNAME(cname) => Some(cname.to_utf8()),
                _ => None,
            })
            .last()
    })
}
