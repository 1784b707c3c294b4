//! Error types.
//!
//! Errors are split by layer:
//! - **Lookup errors**: what a single call into the resolution capability reports
//! - **Fetch errors**: fatal failures of a record fetcher, wrapped with the record
//!   type and name being looked up
//! - **Query errors**: a failed zone query, carrying the partially built zone
//! - **Initialization errors**: logger and resolver setup

mod types;

// Re-export public API
pub use types::{FetchError, InitializationError, LookupError, QueryError};
