//! Priority frontier for the route search
//!
//! A binary min-heap of [`SearchState`]s. States are immutable and
//! re-pushed rather than decreased in place, so no decrease-key is needed
//! (standard lazy-deletion Dijkstra); stale entries are discarded when
//! popped.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::rc::Rc;

use crate::state::SearchState;

/// Min-heap of search states, ordered by the state's own comparison rule
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<Rc<SearchState>>>,
}

impl Frontier {
    /// Create an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a state, O(log n) amortized
    pub fn push(&mut self, state: Rc<SearchState>) {
        self.heap.push(Reverse(state));
    }

    /// Pop the minimum state, O(log n); `None` when empty
    pub fn pop(&mut self) -> Option<Rc<SearchState>> {
        self.heap.pop().map(|Reverse(state)| state)
    }

    /// Whether the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued states, stale entries included
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
