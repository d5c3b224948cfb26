//! Structural resilience analysis
//!
//! One primitive underlies every resilience query: count connected
//! components, optionally pretending one host or one backdoor does not
//! exist. Articulation points and bridges fall out of comparing the
//! excluded count against the unexcluded baseline; cycle detection is a
//! separate parent-tracking DFS. All traversals run over dense host
//! indices with a flat visited array and skip sealed backdoors.

use std::collections::VecDeque;

use tracing::debug;

use matrixnet_core::{BreachError, HostId};

use crate::registry::HostIndex;
use crate::topology::{LinkId, Topology};

/// What to pretend is absent during a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Exclusion {
    /// Scan the topology as it is
    #[default]
    None,
    /// Skip one host (and thereby all its incident backdoors)
    Host(HostIndex),
    /// Skip one specific backdoor, matched by handle identity
    Link(LinkId),
}

/// Result of a breach simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreachOutcome {
    /// Whether removing the element increases the component count
    pub critical: bool,
    /// Component count with the element removed
    pub components: usize,
}

impl Topology {
    /// Count connected components, honoring an exclusion
    ///
    /// Sealed backdoors never contribute to connectivity. An excluded host
    /// is absent entirely: it is not counted as a component of its own and
    /// its incident backdoors are not traversed.
    pub fn component_count(&self, exclusion: Exclusion) -> usize {
        let n = self.host_count();
        let mut visited = vec![false; n];
        if let Exclusion::Host(h) = exclusion {
            visited[h] = true;
        }

        let mut count = 0;
        let mut queue = VecDeque::new();
        for start in 0..n {
            if visited[start] {
                continue;
            }
            count += 1;
            visited[start] = true;
            queue.push_back(start);

            while let Some(u) = queue.pop_front() {
                for entry in self.neighbors(u) {
                    if self.backdoor(entry.link).is_sealed() {
                        continue;
                    }
                    if exclusion == Exclusion::Link(entry.link) {
                        continue;
                    }
                    if !visited[entry.peer] {
                        visited[entry.peer] = true;
                        queue.push_back(entry.peer);
                    }
                }
            }
        }
        count
    }

    /// Whether the network is connected (at most one component)
    pub fn is_connected(&self) -> bool {
        self.component_count(Exclusion::None) <= 1
    }

    /// Simulate a breach of one host: is it an articulation point?
    ///
    /// A one-host network is never split by losing its only host, so the
    /// outcome there is always non-critical.
    pub fn host_breach(&self, id: &HostId) -> Result<BreachOutcome, BreachError> {
        let idx = self
            .registry()
            .index_of(id)
            .ok_or_else(|| BreachError::UnknownHost(id.to_string()))?;

        let before = self.component_count(Exclusion::None);
        let after = self.component_count(Exclusion::Host(idx));
        debug!(host = %id, before, after, "Simulated host breach");
        Ok(BreachOutcome {
            critical: after > before,
            components: after,
        })
    }

    /// Simulate a breach of one backdoor: is it a bridge?
    ///
    /// Only valid for an existing, currently unsealed backdoor. The edge is
    /// excluded by its [`LinkId`] handle, so the scan can never alias a
    /// different edge between the same pair.
    pub fn backdoor_breach(&self, a: &HostId, b: &HostId) -> Result<BreachOutcome, BreachError> {
        if self.registry().index_of(a).is_none() {
            return Err(BreachError::UnknownHost(a.to_string()));
        }
        if self.registry().index_of(b).is_none() {
            return Err(BreachError::UnknownHost(b.to_string()));
        }
        let link = self
            .find_link(a, b)
            .ok_or_else(|| BreachError::LinkNotFound(a.to_string(), b.to_string()))?;
        if self.backdoor(link).is_sealed() {
            return Err(BreachError::LinkSealed(a.to_string(), b.to_string()));
        }

        let before = self.component_count(Exclusion::None);
        let after = self.component_count(Exclusion::Link(link));
        debug!(a = %a, b = %b, link, before, after, "Simulated backdoor breach");
        Ok(BreachOutcome {
            critical: after > before,
            components: after,
        })
    }

    /// Whether the unsealed topology contains a cycle
    ///
    /// Depth-first per unvisited component, tracking the parent index so
    /// immediately backtracking over the arrival edge is not a false
    /// positive. Any other visited neighbor is a back-edge.
    pub fn has_cycles(&self) -> bool {
        let n = self.host_count();
        let mut visited = vec![false; n];
        let mut stack: Vec<(HostIndex, Option<HostIndex>)> = Vec::new();

        for root in 0..n {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            stack.push((root, None));

            while let Some((u, parent)) = stack.pop() {
                for entry in self.neighbors(u) {
                    if self.backdoor(entry.link).is_sealed() {
                        continue;
                    }
                    if Some(entry.peer) == parent {
                        continue;
                    }
                    if visited[entry.peer] {
                        return true;
                    }
                    visited[entry.peer] = true;
                    stack.push((entry.peer, Some(u)));
                }
            }
        }
        false
    }
}
