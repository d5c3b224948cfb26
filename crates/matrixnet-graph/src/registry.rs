//! Identifier-indexed host store
//!
//! The [`HostRegistry`] maps string identifiers to [`Host`] objects in
//! expected O(1) and assigns every host a dense integer index at creation.
//! The index is the addressing scheme for adjacency rows and for the
//! fixed-size visited/best-steps arrays used by traversals; the mapping is
//! permanent and reverse lookup is a plain `Vec` index.

use std::collections::HashMap;

use matrixnet_core::{Host, HostError, HostId};

/// Dense integer index of a host, assigned monotonically at spawn
pub type HostIndex = usize;

/// Host store keyed by identifier, with a dense index bijection
#[derive(Debug, Default)]
pub struct HostRegistry {
    index: HashMap<HostId, HostIndex>,
    hosts: Vec<Host>,
}

impl HostRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a host, assigning it the next dense index
    ///
    /// Fails with [`HostError::Duplicate`] if the id is already registered.
    pub fn insert(&mut self, host: Host) -> Result<HostIndex, HostError> {
        if self.index.contains_key(host.id()) {
            return Err(HostError::Duplicate(host.id().to_string()));
        }
        let idx = self.hosts.len();
        self.index.insert(host.id().clone(), idx);
        self.hosts.push(host);
        Ok(idx)
    }

    /// Look up the dense index for an id
    pub fn index_of(&self, id: &HostId) -> Option<HostIndex> {
        self.index.get(id).copied()
    }

    /// Look up a host by id
    pub fn get(&self, id: &HostId) -> Option<&Host> {
        self.index_of(id).map(|idx| &self.hosts[idx])
    }

    /// Reverse lookup: host by dense index
    ///
    /// Indices are handed out by [`insert`](Self::insert) and never revoked,
    /// so any index observed from this registry stays valid.
    pub fn by_index(&self, idx: HostIndex) -> &Host {
        &self.hosts[idx]
    }

    /// Number of registered hosts
    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Iterate over all hosts in index order
    pub fn iter(&self) -> impl Iterator<Item = &Host> {
        self.hosts.iter()
    }
}
