//! Backdoor tunnels and their canonical lookup keys
//!
//! A [`Backdoor`] is an undirected edge carrying latency, bandwidth, and
//! firewall constraints plus a reversible sealed flag. At most one backdoor
//! exists per unordered host pair; [`LinkKey`] normalizes the pair so lookup
//! is order-independent.

use serde::{Deserialize, Serialize};

use crate::host::HostId;

/// Canonical unordered pair key for a backdoor
///
/// The two endpoint ids are stored sorted lexicographically, so
/// `LinkKey::new(a, b) == LinkKey::new(b, a)`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LinkKey(HostId, HostId);

impl LinkKey {
    /// Build the canonical key for an unordered host pair
    pub fn new(a: &HostId, b: &HostId) -> Self {
        if a <= b {
            Self(a.clone(), b.clone())
        } else {
            Self(b.clone(), a.clone())
        }
    }

    /// The lexicographically smaller endpoint
    pub fn first(&self) -> &HostId {
        &self.0
    }

    /// The lexicographically larger endpoint
    pub fn second(&self) -> &HostId {
        &self.1
    }
}

/// A bidirectional hidden tunnel (edge) between two hosts
///
/// Static link properties plus the mutable sealed state used as a routing
/// and connectivity constraint. Sealing is a toggle: sealing twice returns
/// the backdoor to the unsealed state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backdoor {
    endpoints: LinkKey,
    base_latency: i64,
    bandwidth: i64,
    firewall: i64,
    sealed: bool,
}

impl Backdoor {
    /// Create a new, initially unsealed backdoor
    pub fn new(a: &HostId, b: &HostId, base_latency: i64, bandwidth: i64, firewall: i64) -> Self {
        Self {
            endpoints: LinkKey::new(a, b),
            base_latency,
            bandwidth,
            firewall,
            sealed: false,
        }
    }

    /// The canonical endpoint pair
    pub fn endpoints(&self) -> &LinkKey {
        &self.endpoints
    }

    /// Base traversal latency in milliseconds
    pub fn base_latency(&self) -> i64 {
        self.base_latency
    }

    /// Bandwidth capacity in Mbps
    pub fn bandwidth(&self) -> i64 {
        self.bandwidth
    }

    /// Firewall clearance level required to depart through this backdoor
    pub fn firewall(&self) -> i64 {
        self.firewall
    }

    /// Whether the backdoor is currently sealed
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Flip the sealed flag, returning the new state
    pub fn toggle_seal(&mut self) -> bool {
        self.sealed = !self.sealed;
        self.sealed
    }
}
