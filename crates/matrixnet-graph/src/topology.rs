//! Adjacency storage and backdoor lifecycle
//!
//! The [`Topology`] owns everything structural: the host registry, the link
//! table, and the per-host adjacency rows. Each backdoor lives in exactly
//! one link table slot; the two adjacency entries (one per endpoint) hold
//! the same [`LinkId`] handle into that table, so a seal toggle is
//! immediately visible from both directions. There is one mutable source of
//! truth per edge, never two copies.

use std::collections::HashMap;

use tracing::debug;

use matrixnet_core::{Backdoor, Host, HostError, HostId, LinkError, LinkKey};

use crate::registry::{HostIndex, HostRegistry};

/// Handle into the link table, stable for the lifetime of the topology
///
/// Resilience queries exclude a backdoor by this handle (object identity),
/// never by re-resolving its endpoint pair.
pub type LinkId = usize;

/// One adjacency row entry: the neighbor plus the shared backdoor handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjEntry {
    /// Dense index of the host on the other end
    pub peer: HostIndex,
    /// Handle to the shared backdoor in the link table
    pub link: LinkId,
}

/// The covert network topology
#[derive(Debug, Default)]
pub struct Topology {
    registry: HostRegistry,
    links: Vec<Backdoor>,
    link_index: HashMap<LinkKey, LinkId>,
    adjacency: Vec<Vec<AdjEntry>>,
}

impl Topology {
    /// Create an empty topology
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a new host with the given clearance level
    ///
    /// Assigns the next dense index and an empty adjacency row. Fails if the
    /// id is already taken.
    pub fn spawn(&mut self, id: HostId, clearance: i64) -> Result<HostIndex, HostError> {
        let idx = self.registry.insert(Host::new(id, clearance))?;
        self.adjacency.push(Vec::new());
        debug!(host = %self.registry.by_index(idx).id(), index = idx, clearance, "Spawned host");
        Ok(idx)
    }

    /// Link two hosts with a new backdoor
    ///
    /// Fails if either endpoint is unknown, the endpoints are the same host,
    /// or a backdoor already exists for the pair.
    pub fn link(
        &mut self,
        a: &HostId,
        b: &HostId,
        latency: i64,
        bandwidth: i64,
        firewall: i64,
    ) -> Result<LinkId, LinkError> {
        let ai = self
            .registry
            .index_of(a)
            .ok_or_else(|| LinkError::UnknownEndpoint(a.to_string()))?;
        let bi = self
            .registry
            .index_of(b)
            .ok_or_else(|| LinkError::UnknownEndpoint(b.to_string()))?;
        if ai == bi {
            return Err(LinkError::SelfLink(a.to_string()));
        }
        let key = LinkKey::new(a, b);
        if self.link_index.contains_key(&key) {
            return Err(LinkError::Duplicate(a.to_string(), b.to_string()));
        }

        let id = self.links.len();
        self.links.push(Backdoor::new(a, b, latency, bandwidth, firewall));
        self.link_index.insert(key, id);

        // Undirected: one adjacency entry per endpoint, same LinkId
        self.adjacency[ai].push(AdjEntry { peer: bi, link: id });
        self.adjacency[bi].push(AdjEntry { peer: ai, link: id });

        debug!(a = %a, b = %b, latency, bandwidth, firewall, link = id, "Linked backdoor");
        Ok(id)
    }

    /// Toggle the sealed flag on the backdoor between two hosts
    ///
    /// Returns the new sealed state. The backdoor stays in the adjacency
    /// lists either way; traversals skip sealed links explicitly.
    pub fn toggle_seal(&mut self, a: &HostId, b: &HostId) -> Result<bool, LinkError> {
        if self.registry.index_of(a).is_none() {
            return Err(LinkError::UnknownEndpoint(a.to_string()));
        }
        if self.registry.index_of(b).is_none() {
            return Err(LinkError::UnknownEndpoint(b.to_string()));
        }
        let id = self
            .find_link(a, b)
            .ok_or_else(|| LinkError::NotFound(a.to_string(), b.to_string()))?;
        let sealed = self.links[id].toggle_seal();
        debug!(a = %a, b = %b, link = id, sealed, "Toggled backdoor seal");
        Ok(sealed)
    }

    /// Look up the backdoor handle for an unordered host pair
    pub fn find_link(&self, a: &HostId, b: &HostId) -> Option<LinkId> {
        self.link_index.get(&LinkKey::new(a, b)).copied()
    }

    /// The backdoor behind a handle
    pub fn backdoor(&self, id: LinkId) -> &Backdoor {
        &self.links[id]
    }

    /// The host registry
    pub fn registry(&self) -> &HostRegistry {
        &self.registry
    }

    /// Host by dense index
    pub fn host(&self, idx: HostIndex) -> &Host {
        self.registry.by_index(idx)
    }

    /// Adjacency row for a host index
    pub fn neighbors(&self, idx: HostIndex) -> &[AdjEntry] {
        &self.adjacency[idx]
    }

    /// Number of hosts
    pub fn host_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of backdoors (sealed ones included)
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Iterate over all backdoors, sealed ones included
    pub fn backdoors(&self) -> impl Iterator<Item = &Backdoor> {
        self.links.iter()
    }
}
