//! Search states for route tracing
//!
//! A [`SearchState`] is an immutable node in the search space: the host the
//! search is currently at, the latency accumulated to get there, and the
//! number of hops taken. States are never mutated after creation — a better
//! path produces a fresh state, and the winning state's parent chain is
//! walked backward to reconstruct the route.

use std::cmp::Ordering;
use std::rc::Rc;

use matrixnet_core::HostId;
use matrixnet_graph::HostIndex;

/// One node in the route search space
///
/// Ordering is the search's optimization criteria, smallest first:
///
/// 1. lower accumulated latency
/// 2. on a tie, fewer hops
/// 3. on a further tie, lexicographically smaller current host id
#[derive(Debug)]
pub struct SearchState {
    /// Dense index of the current host
    pub host: HostIndex,
    /// Accumulated step-dependent latency from the source
    pub latency: i64,
    /// Hops taken so far (drives the lambda surcharge of the next hop)
    pub steps: u32,
    /// Id of the current host, for the lexicographic tie-break
    pub id: HostId,
    /// State this one was expanded from; `None` for the origin
    pub parent: Option<Rc<SearchState>>,
}

impl SearchState {
    /// The origin state: at the source host, zero latency, zero hops
    pub fn origin(host: HostIndex, id: HostId) -> Rc<Self> {
        Rc::new(Self {
            host,
            latency: 0,
            steps: 0,
            id,
            parent: None,
        })
    }

    /// Expand a state across one edge with the given effective cost
    pub fn advance(parent: &Rc<Self>, host: HostIndex, id: HostId, edge_cost: i64) -> Rc<Self> {
        Rc::new(Self {
            host,
            latency: parent.latency + edge_cost,
            steps: parent.steps + 1,
            id,
            parent: Some(Rc::clone(parent)),
        })
    }

    fn key(&self) -> (i64, u32, &str) {
        (self.latency, self.steps, self.id.as_str())
    }
}

impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for SearchState {}

impl PartialOrd for SearchState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchState {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}
