//! Trace error types
//!
//! An unreachable destination is *not* an error here — [`trace_route`]
//! reports it as an absent plan. Only a nonexistent endpoint is.
//!
//! [`trace_route`]: crate::trace::trace_route

use thiserror::Error;

/// Errors raised by a route trace
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TraceError {
    /// One of the query endpoints names no known host
    #[error("Unknown host: {0}")]
    UnknownHost(String),
}

/// Result type for trace operations
pub type TraceResult<T> = Result<T, TraceError>;
