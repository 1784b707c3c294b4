//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use hickory_resolver::proto::rr::RecordType;
use log::SetLoggerError;
use thiserror::Error;

use crate::zone::Zone;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Outcome of a single failed call into the resolution capability.
///
/// Fetchers apply different tolerance policies depending on whether the
/// record is simply absent (`NotFound`) or the lookup itself broke.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The name exists but has no records of the requested type, or the name
    /// does not exist at all.
    #[error("no records found")]
    NotFound,

    /// The lookup was abandoned because the query was cancelled.
    #[error("lookup cancelled")]
    Cancelled,

    /// Any other failure (timeout, network, malformed response).
    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

impl LookupError {
    /// Returns `true` if the record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound)
    }

    /// Returns `true` if the lookup was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, LookupError::Cancelled)
    }
}

/// A fatal record lookup failure.
///
/// Carries the record type and the name that was being looked up; the
/// underlying [`LookupError`] is available through `source()` or the `source`
/// field.
#[derive(Error, Debug)]
#[error("error occurred looking up {record_type} records for {name}")]
pub struct FetchError {
    /// Record type of the failed lookup.
    pub record_type: RecordType,
    /// Name that was queried.
    pub name: String,
    /// Underlying lookup failure.
    #[source]
    pub source: LookupError,
}

impl FetchError {
    pub(crate) fn new(record_type: RecordType, name: impl Into<String>, source: LookupError) -> Self {
        Self {
            record_type,
            name: name.into(),
            source,
        }
    }
}

/// A zone query that stopped at its first fatal lookup failure.
///
/// The records gathered before the failure are kept in [`QueryError::partial`];
/// record sets that were never fetched are empty.
#[derive(Error, Debug)]
#[error("zone query for {} failed", .partial.name)]
pub struct QueryError {
    /// Zone as far as it was built when the failure occurred.
    pub partial: Box<Zone>,
    /// The failure that ended the query.
    #[source]
    pub source: FetchError,
}

impl QueryError {
    pub(crate) fn new(partial: Zone, source: FetchError) -> Self {
        Self {
            partial: Box::new(partial),
            source,
        }
    }

    /// Record type whose lookup ended the query.
    pub fn record_type(&self) -> RecordType {
        self.source.record_type
    }

    /// Returns `true` if the query ended because it was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.source.source.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_fetch_error_message_names_record_and_host() {
        let err = FetchError::new(RecordType::MX, "example.com", LookupError::NotFound);
        assert_eq!(
            err.to_string(),
            "error occurred looking up MX records for example.com"
        );
        let source = err.source().expect("source should be preserved");
        assert_eq!(source.to_string(), "no records found");
    }

    #[test]
    fn test_failed_lookup_is_transparent() {
        let err = LookupError::from(anyhow::anyhow!("request timed out"));
        assert_eq!(err.to_string(), "request timed out");
        assert!(!err.is_not_found());
        assert!(!err.is_cancelled());
    }

    #[test]
    fn test_query_error_keeps_partial_zone() {
        let partial = Zone::new("example.com");
        let err = QueryError::new(
            partial,
            FetchError::new(RecordType::A, "example.com", LookupError::Cancelled),
        );
        assert_eq!(err.to_string(), "zone query for example.com failed");
        assert_eq!(err.partial.name, "example.com");
        assert_eq!(err.record_type(), RecordType::A);
        assert!(err.is_cancelled());
    }
}
