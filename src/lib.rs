//! dnsdigger library: DNS record enumeration for a single domain
//!
//! This library looks up the A, MX, NS, TXT and CNAME records of a domain,
//! resolves every mail exchanger and nameserver to its addresses, and guesses
//! the hosting provider of each address from its reverse DNS name.
//!
//! # Example
//!
//! ```no_run
//! use dnsdigger::dns::HickoryResolver;
//! use dnsdigger::initialization::{init_resolver, ResolverSettings};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = HickoryResolver::new(init_resolver(&ResolverSettings::default())?);
//! let zone = dnsdigger::query(&resolver, &CancellationToken::new(), "example.com").await?;
//!
//! for mx in &zone.mx {
//!     println!("{} {}", mx.priority, mx.host.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! The hickory-backed resolver requires a Tokio runtime. Any other
//! [`dns::Resolve`] implementation can be plugged into [`query`].

#![warn(missing_docs)]

pub mod config;
pub mod dns;
pub mod domain;
pub mod error_handling;
pub mod export;
pub mod initialization;
mod zone;

// Re-export public API
pub use config::{LogFormat, LogLevel, Opt, OutputFormat};
pub use error_handling::{FetchError, LookupError, QueryError};
pub use zone::{get_owner, query, Host, Ip, MxRecord, Zone};
