//! # MatrixNet Core
//!
//! Core types and errors for the MatrixNet stack.
//!
//! This crate provides the data model shared by the topology graph, the
//! route tracer, and the operator console:
//!
//! - [`HostId`]: Validated host identifier (`[A-Z0-9_]+`)
//! - [`Host`]: A secure node with a clearance level
//! - [`Backdoor`]: An undirected, sealable tunnel between two hosts
//! - [`LinkKey`]: Order-independent lookup key for a backdoor
//!
//! Errors follow a per-concern taxonomy ([`HostError`], [`LinkError`],
//! [`BreachError`]) aggregated into [`MatrixNetError`].

pub mod error;
pub mod host;
pub mod link;

// Re-export main types
pub use error::*;
pub use host::*;
pub use link::*;
