//! Per-record-type fetchers.
//!
//! Each fetcher calls the resolver, applies its own error tolerance and strips
//! trailing dots from every name it stores.

use std::collections::BTreeMap;
use std::future::Future;
use std::net::IpAddr;

use hickory_resolver::proto::rr::RecordType;
use log::{debug, warn};
use tokio_util::sync::CancellationToken;

use super::{get_owner, Host, Ip, MxRecord};
use crate::config::{COMMON_CNAME_LABELS, COMMON_TXT_PREFIXES, UNKNOWN_OWNER};
use crate::dns::Resolve;
use crate::domain::trim_hostname;
use crate::error_handling::{FetchError, LookupError};

/// Runs one lookup, abandoning it when `cancel` fires.
async fn guarded<T, F>(cancel: &CancellationToken, lookup: F) -> Result<T, LookupError>
where
    F: Future<Output = Result<T, LookupError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(LookupError::Cancelled),
        result = lookup => result,
    }
}

/// Resolves `hostname` to its addresses and annotates each one.
///
/// Any lookup error is fatal, "not found" included.
pub(crate) async fn fetch_a_records<R>(
    resolver: &R,
    cancel: &CancellationToken,
    hostname: &str,
) -> Result<Vec<Ip>, FetchError>
where
    R: Resolve + ?Sized,
{
    debug!("Looking up A records for {hostname}");
    let addrs = guarded(cancel, resolver.lookup_host(hostname))
        .await
        .map_err(|e| FetchError::new(RecordType::A, hostname, e))?;

    let mut ips = Vec::with_capacity(addrs.len());
    for addr in addrs {
        ips.push(describe_ip(resolver, cancel, addr).await);
    }
    Ok(ips)
}

/// Reverse-resolves one address. Never fails: without PTR names the address
/// is kept with an unknown owner.
async fn describe_ip<R>(resolver: &R, cancel: &CancellationToken, addr: IpAddr) -> Ip
where
    R: Resolve + ?Sized,
{
    match guarded(cancel, resolver.lookup_addr(addr)).await {
        Ok(names) => {
            let owner = names
                .first()
                .map(|name| get_owner(name))
                .unwrap_or(UNKNOWN_OWNER);
            Ip {
                addr,
                ptrs: names.iter().map(|name| trim_hostname(name)).collect(),
                owner,
            }
        }
        Err(LookupError::Failed(e)) => {
            warn!("Reverse lookup for {addr} failed: {e}");
            Ip::unresolved(addr)
        }
        Err(e) => {
            debug!("No reverse name for {addr}: {e}");
            Ip::unresolved(addr)
        }
    }
}

/// Fetches the mail exchangers of `domain` with their addresses into `mx`.
///
/// "Not found" leaves `mx` empty; every other error is fatal, as is a failure
/// to resolve any exchange. Exchanges resolved before a failure stay in `mx`.
/// `mx` is sorted by priority, then name, in both cases.
pub(crate) async fn fetch_mx_records<R>(
    resolver: &R,
    cancel: &CancellationToken,
    domain: &str,
    mx: &mut Vec<MxRecord>,
) -> Result<(), FetchError>
where
    R: Resolve + ?Sized,
{
    debug!("Looking up MX records for {domain}");
    let entries = match guarded(cancel, resolver.lookup_mx(domain)).await {
        Ok(entries) => entries,
        Err(LookupError::NotFound) => {
            debug!("No MX records for {domain}");
            return Ok(());
        }
        Err(e) => return Err(FetchError::new(RecordType::MX, domain, e)),
    };

    let mut outcome = Ok(());
    for (priority, exchange) in entries {
        let name = trim_hostname(&exchange);
        match fetch_a_records(resolver, cancel, &name).await {
            Ok(ips) => mx.push(MxRecord {
                priority,
                host: Host { name, ips },
            }),
            Err(e) => {
                outcome = Err(e);
                break;
            }
        }
    }

    mx.sort_by(|a, b| {
        a.priority
            .cmp(&b.priority)
            .then_with(|| a.host.name.cmp(&b.host.name))
    });
    outcome
}

/// Fetches the nameservers of `domain` with their addresses into `ns`.
///
/// Same tolerance and partial-result rule as [`fetch_mx_records`]; sorted by
/// hostname.
pub(crate) async fn fetch_ns_records<R>(
    resolver: &R,
    cancel: &CancellationToken,
    domain: &str,
    ns: &mut Vec<Host>,
) -> Result<(), FetchError>
where
    R: Resolve + ?Sized,
{
    debug!("Looking up NS records for {domain}");
    let entries = match guarded(cancel, resolver.lookup_ns(domain)).await {
        Ok(entries) => entries,
        Err(LookupError::NotFound) => {
            debug!("No NS records for {domain}");
            return Ok(());
        }
        Err(e) => return Err(FetchError::new(RecordType::NS, domain, e)),
    };

    let mut outcome = Ok(());
    for entry in entries {
        let name = trim_hostname(&entry);
        match fetch_a_records(resolver, cancel, &name).await {
            Ok(ips) => ns.push(Host { name, ips }),
            Err(e) => {
                outcome = Err(e);
                break;
            }
        }
    }

    ns.sort_by(|a, b| a.name.cmp(&b.name));
    outcome
}

/// Probes the well-known TXT names of `domain`.
///
/// Errors of any kind mean the record is treated as absent.
pub(crate) async fn fetch_txt_records<R>(
    resolver: &R,
    cancel: &CancellationToken,
    domain: &str,
) -> BTreeMap<String, Vec<String>>
where
    R: Resolve + ?Sized,
{
    let mut txts = BTreeMap::new();
    for prefix in COMMON_TXT_PREFIXES {
        let name = if prefix.is_empty() {
            domain.to_string()
        } else {
            format!("{prefix}.{domain}")
        };

        debug!("Looking up TXT records for {name}");
        match guarded(cancel, resolver.lookup_txt(&name)).await {
            Ok(entries) if !entries.is_empty() => {
                txts.insert(name, entries);
            }
            Ok(_) => debug!("Empty TXT answer for {name}"),
            Err(LookupError::Failed(e)) => warn!("TXT lookup for {name} failed: {e}"),
            Err(e) => debug!("No TXT records for {name}: {e}"),
        }
    }
    txts
}

/// Probes the common CNAME labels of `domain`, inserting hits into `cnames`.
///
/// "Not found" skips the label. Any other error stops the probe; entries found
/// before it stay in `cnames`.
pub(crate) async fn fetch_cname_records<R>(
    resolver: &R,
    cancel: &CancellationToken,
    domain: &str,
    cnames: &mut BTreeMap<String, String>,
) -> Result<(), FetchError>
where
    R: Resolve + ?Sized,
{
    for label in COMMON_CNAME_LABELS {
        let name = format!("{label}.{domain}");
        debug!("Looking up CNAME record for {name}");
        match guarded(cancel, resolver.lookup_cname(&name)).await {
            Ok(target) => {
                let target = trim_hostname(&target);
                if !target.is_empty() {
                    cnames.insert((*label).to_string(), target);
                }
            }
            Err(LookupError::NotFound) => debug!("No CNAME record for {name}"),
            Err(e) => return Err(FetchError::new(RecordType::CNAME, name, e)),
        }
    }
    Ok(())
}
