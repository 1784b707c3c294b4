//! Zone building: the aggregated record set of one domain.
//!
//! [`query`] runs a fixed sequence of lookups against a [`Resolve`]
//! implementation:
//! 1. A records of the domain (fatal on any error)
//! 2. MX records, each exchange resolved to its addresses
//! 3. NS records, each nameserver resolved to its addresses
//! 4. TXT records of a few well-known names (errors mean "absent")
//! 5. Canonical names of common subdomains (only "not found" is tolerated)
//!
//! Every resolved address is reverse-resolved and attributed to an owner with
//! [`get_owner`].

mod fetch;
mod owner;

use std::collections::BTreeMap;
use std::net::IpAddr;

use log::info;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::config::{DMARC_VERSION_TAG, SPF_VERSION_TAG, UNKNOWN_OWNER};
use crate::dns::Resolve;
use crate::error_handling::QueryError;

pub use owner::get_owner;

/// Records discovered for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Zone {
    /// Domain that was queried, as given.
    pub name: String,
    /// Addresses of the domain, in resolver order.
    pub a: Vec<Ip>,
    /// Mail exchangers, by ascending priority then name.
    pub mx: Vec<MxRecord>,
    /// Nameservers, by ascending name.
    pub ns: Vec<Host>,
    /// TXT strings keyed by the fully qualified name they were found at.
    pub txt: BTreeMap<String, Vec<String>>,
    /// Canonical names keyed by the subdomain label that aliases them.
    pub cname: BTreeMap<String, String>,
}

impl Zone {
    /// Creates an empty zone for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            a: Vec::new(),
            mx: Vec::new(),
            ns: Vec::new(),
            txt: BTreeMap::new(),
            cname: BTreeMap::new(),
        }
    }

    /// SPF policy published at the domain apex, if any.
    pub fn spf(&self) -> Option<&str> {
        self.policy(&self.name, SPF_VERSION_TAG)
    }

    /// DMARC policy published at `_dmarc.<domain>`, if any.
    pub fn dmarc(&self) -> Option<&str> {
        self.policy(&format!("_dmarc.{}", self.name), DMARC_VERSION_TAG)
    }

    /// First TXT value at `name` that opens with `tag`, surrounding whitespace
    /// removed. The tag match is case-sensitive.
    fn policy(&self, name: &str, tag: &str) -> Option<&str> {
        self.txt
            .get(name)?
            .iter()
            .map(|value| value.trim())
            .find(|value| value.starts_with(tag))
    }
}

/// One MX entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MxRecord {
    /// Preference value; lower is preferred.
    pub priority: u16,
    /// Mail server and its addresses.
    pub host: Host,
}

/// A named host and the addresses it resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Host {
    /// Hostname without the trailing root dot.
    pub name: String,
    /// Addresses in resolver order.
    pub ips: Vec<Ip>,
}

/// A resolved address with its reverse names and inferred owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ip {
    /// The address (IPv4 or IPv6).
    pub addr: IpAddr,
    /// Reverse DNS names without trailing dots; empty when the reverse lookup
    /// failed or returned nothing.
    pub ptrs: Vec<String>,
    /// Owner inferred from the first reverse name, or "Unknown".
    pub owner: &'static str,
}

impl Ip {
    /// An address with no reverse names and an unknown owner.
    pub fn unresolved(addr: IpAddr) -> Self {
        Self {
            addr,
            ptrs: Vec::new(),
            owner: UNKNOWN_OWNER,
        }
    }
}

/// Builds the [`Zone`] of `domain`.
///
/// Lookups run one at a time in the order A, MX, NS, TXT, CNAME. Each lookup is
/// abandoned as soon as `cancel` fires.
///
/// # Errors
///
/// Returns a [`QueryError`] on the first fatal lookup failure: any A lookup
/// error, an MX/NS/CNAME error other than "not found", or a cancellation seen
/// by one of those lookups. The error carries the zone as built up to that
/// point: MX, NS and CNAME entries completed before the failure are kept, and
/// later record sets are left empty.
///
/// # Example
///
/// ```no_run
/// use dnsdigger::dns::HickoryResolver;
/// use dnsdigger::initialization::{init_resolver, ResolverSettings};
/// use tokio_util::sync::CancellationToken;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let resolver = HickoryResolver::new(init_resolver(&ResolverSettings::default())?);
/// let zone = dnsdigger::query(&resolver, &CancellationToken::new(), "example.com").await?;
/// for ip in &zone.a {
///     println!("{} ({})", ip.addr, ip.owner);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn query<R>(
    resolver: &R,
    cancel: &CancellationToken,
    domain: &str,
) -> Result<Zone, QueryError>
where
    R: Resolve + ?Sized,
{
    info!("Querying zone {domain}");
    let mut zone = Zone::new(domain);

    zone.a = match fetch::fetch_a_records(resolver, cancel, domain).await {
        Ok(a) => a,
        Err(e) => return Err(QueryError::new(zone, e)),
    };
    if let Err(e) = fetch::fetch_mx_records(resolver, cancel, domain, &mut zone.mx).await {
        return Err(QueryError::new(zone, e));
    }
    if let Err(e) = fetch::fetch_ns_records(resolver, cancel, domain, &mut zone.ns).await {
        return Err(QueryError::new(zone, e));
    }
    zone.txt = fetch::fetch_txt_records(resolver, cancel, domain).await;
    if let Err(e) = fetch::fetch_cname_records(resolver, cancel, domain, &mut zone.cname).await {
        return Err(QueryError::new(zone, e));
    }

    info!(
        "Zone {domain}: {} A, {} MX, {} NS, {} TXT, {} CNAME",
        zone.a.len(),
        zone.mx.len(),
        zone.ns.len(),
        zone.txt.len(),
        zone.cname.len()
    );
    Ok(zone)
}
