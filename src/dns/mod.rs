//! DNS resolution capability.
//!
//! The zone builder never talks to the network itself; it calls a [`Resolve`]
//! implementation. This module defines that seam and provides the production
//! implementation backed by `hickory-resolver`:
//! - IP address resolution (A/AAAA records) and reverse lookups (PTR)
//! - Nameserver, mail exchanger, text and canonical name queries
//!
//! Names are returned as the resolver reports them, trailing dot included.
//! Normalization happens in the zone fetchers.

mod records;
mod resolution;

use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::{ResolveError, TokioResolver};

use crate::error_handling::LookupError;

// Re-export public API
pub use records::{lookup_cname_record, lookup_mx_records, lookup_ns_records, lookup_txt_records};
pub use resolution::{resolve_host, reverse_dns_lookup};

/// DNS lookups needed to build a zone.
///
/// Every method must report a missing record or missing name as
/// [`LookupError::NotFound`] and any other failure as
/// [`LookupError::Failed`]; fetchers treat the two differently.
#[async_trait]
pub trait Resolve: Send + Sync {
    /// Resolves a hostname to its addresses, in resolver order.
    async fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, LookupError>;

    /// Returns `(preference, exchange)` pairs for a domain.
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<(u16, String)>, LookupError>;

    /// Returns the nameserver hostnames of a domain.
    async fn lookup_ns(&self, domain: &str) -> Result<Vec<String>, LookupError>;

    /// Returns the TXT strings published at a name, one per record.
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError>;

    /// Returns the canonical name of a name: the end of its alias chain, or
    /// the name itself when it resolves without an alias. A name that does not
    /// resolve is [`LookupError::NotFound`].
    async fn lookup_cname(&self, name: &str) -> Result<String, LookupError>;

    /// Returns the PTR names of an address.
    async fn lookup_addr(&self, ip: IpAddr) -> Result<Vec<String>, LookupError>;
}

/// [`Resolve`] implementation backed by a shared hickory [`TokioResolver`].
#[derive(Clone)]
pub struct HickoryResolver {
    inner: Arc<TokioResolver>,
}

impl HickoryResolver {
    /// Wraps an initialized resolver (see [`crate::initialization::init_resolver`]).
    pub fn new(inner: Arc<TokioResolver>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Resolve for HickoryResolver {
    async fn lookup_host(&self, host: &str) -> Result<Vec<IpAddr>, LookupError> {
        resolve_host(host, &self.inner).await
    }

    async fn lookup_mx(&self, domain: &str) -> Result<Vec<(u16, String)>, LookupError> {
        lookup_mx_records(domain, &self.inner).await
    }

    async fn lookup_ns(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        lookup_ns_records(domain, &self.inner).await
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        lookup_txt_records(name, &self.inner).await
    }

    async fn lookup_cname(&self, name: &str) -> Result<String, LookupError> {
        lookup_cname_record(name, &self.inner).await
    }

    async fn lookup_addr(&self, ip: IpAddr) -> Result<Vec<String>, LookupError> {
        reverse_dns_lookup(ip, &self.inner).await
    }
}

/// Maps a hickory error onto the not-found / failed split.
///
/// hickory reports both NXDOMAIN and an empty answer as "no records found".
fn classify(err: ResolveError) -> LookupError {
    if err.is_no_records_found() {
        LookupError::NotFound
    } else {
        LookupError::Failed(err.into())
    }
}
