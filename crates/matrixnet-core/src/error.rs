//! Error types for MatrixNet

use thiserror::Error;

/// Top-level error type for MatrixNet
#[derive(Debug, Error)]
pub enum MatrixNetError {
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    #[error("Link error: {0}")]
    Link(#[from] LinkError),

    #[error("Breach simulation error: {0}")]
    Breach(#[from] BreachError),
}

/// Errors related to host identity and lifecycle
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("Invalid host id: {0}")]
    InvalidId(String),

    #[error("Host already exists: {0}")]
    Duplicate(String),

    #[error("Unknown host: {0}")]
    Unknown(String),
}

/// Errors related to backdoor lifecycle
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("Unknown endpoint: {0}")]
    UnknownEndpoint(String),

    #[error("Cannot link host {0} to itself")]
    SelfLink(String),

    #[error("Backdoor already exists between {0} and {1}")]
    Duplicate(String, String),

    #[error("No backdoor between {0} and {1}")]
    NotFound(String, String),
}

/// Errors related to breach simulation preconditions
///
/// A breach simulation is a read-only what-if query; these errors cover the
/// cases where the simulated target does not exist or cannot be breached
/// (an already-sealed backdoor carries no live traffic to sever).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BreachError {
    #[error("Unknown host: {0}")]
    UnknownHost(String),

    #[error("No backdoor between {0} and {1}")]
    LinkNotFound(String, String),

    #[error("Backdoor between {0} and {1} is already sealed")]
    LinkSealed(String, String),
}

/// Result type alias for MatrixNet operations
pub type MatrixNetResult<T> = Result<T, MatrixNetError>;
