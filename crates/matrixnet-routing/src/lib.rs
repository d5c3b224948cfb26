//! # MatrixNet Routing
//!
//! Route tracing for MatrixNet.
//!
//! Finds the optimal path between two hosts under a *step-dependent* cost
//! model: traversing a backdoor as the `k`-th hop costs
//! `base_latency + lambda * k`. Edge cost therefore depends on how many
//! hops the path has already taken, which ordinary Dijkstra does not
//! assume; see [`trace_route`] for the pruning rule this engine uses.
//!
//! ## Core Components
//!
//! - [`SearchState`]: Immutable, parent-linked node in the search space,
//!   ordered by total latency, then hop count, then host id
//! - [`Frontier`]: Binary min-heap of search states
//! - [`trace_route`]: The search itself, producing a [`RoutePlan`]
//!
//! ## Per-edge feasibility
//!
//! An edge is traversable only if it is unsealed, its bandwidth meets the
//! caller's minimum, and the clearance of the host being *departed from*
//! meets the edge's firewall level. The clearance check is asymmetric: it
//! applies to the departure side only, so a link can be passable in one
//! direction and not the other.

pub mod error;
pub mod frontier;
pub mod state;
pub mod trace;

// Re-export main types
pub use error::{TraceError, TraceResult};
pub use frontier::Frontier;
pub use state::SearchState;
pub use trace::{RoutePlan, trace_route};
