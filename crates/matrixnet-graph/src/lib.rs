//! # MatrixNet Graph
//!
//! Topology graph for MatrixNet.
//!
//! This crate owns the network structure: the identifier-indexed host
//! registry, the backdoor link table with its adjacency lists, and the
//! structural queries that run over them.
//!
//! ## Core Components
//!
//! - [`HostRegistry`]: Maps host ids to dense integer indices (a bijection
//!   onto `[0, host_count)`) with O(1) lookup both ways
//! - [`Topology`]: Adjacency storage and link lifecycle; every backdoor is
//!   owned by a single link table slot and referenced from both endpoints
//!   through its [`LinkId`] handle
//! - [`Exclusion`]: What to pretend is absent during a resilience scan
//! - [`NetworkReport`]: Read-only aggregate over hosts and backdoors
//!
//! ## Seal Discipline
//!
//! Sealed backdoors stay in the adjacency lists; every traversal skips them
//! explicitly. Sealing is reversible and must not lose edge metadata, so
//! structural absence is never used to represent a sealed link.

pub mod registry;
pub mod report;
pub mod resilience;
pub mod topology;

// Re-export main types
pub use registry::{HostIndex, HostRegistry};
pub use report::NetworkReport;
pub use resilience::{BreachOutcome, Exclusion};
pub use topology::{AdjEntry, LinkId, Topology};
