//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::net::IpAddr;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS, QUERY_TIMEOUT_SECS};
use crate::initialization::ResolverSettings;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Sectioned plain-text report
    Text,
    /// Pretty-printed JSON document of the zone
    Json,
}

/// Command-line options.
///
/// # Examples
///
/// ```
/// use clap::Parser;
/// use dnsdigger::config::Opt;
///
/// let opt = Opt::parse_from(["dnsdigger", "example.com", "--format", "json"]);
/// assert_eq!(opt.domain, "example.com");
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dnsdigger",
    version,
    about = "Enumerates A, MX, NS, TXT and CNAME records of a domain and guesses who hosts each address"
)]
pub struct Opt {
    /// Domain to inspect (e.g. example.com)
    pub domain: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Overall deadline for the whole query in seconds
    #[arg(long, default_value_t = QUERY_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Per-lookup resolver timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_seconds: u64,

    /// Nameserver to query instead of the system configuration (repeatable)
    #[arg(long = "nameserver", value_name = "IP")]
    pub nameservers: Vec<IpAddr>,
}

impl Opt {
    /// Resolver settings derived from the command line.
    pub fn resolver_settings(&self) -> ResolverSettings {
        ResolverSettings {
            timeout: Duration::from_secs(self.dns_timeout_seconds),
            attempts: DNS_ATTEMPTS,
            nameservers: self.nameservers.clone(),
        }
    }

    /// Overall deadline for one query.
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
