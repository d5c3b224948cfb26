//! Aggregate network report
//!
//! A read-only pass over all hosts and backdoors. The averages stay
//! unrounded here; the console decides presentation.

use serde::{Deserialize, Serialize};

use crate::resilience::Exclusion;
use crate::topology::Topology;

/// Aggregate statistics over the whole topology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkReport {
    /// Total number of hosts ever spawned
    pub total_hosts: usize,
    /// Number of backdoors currently unsealed
    pub unsealed_backdoors: usize,
    /// Connected component count (sealed links excluded)
    pub components: usize,
    /// Whether the unsealed topology contains a cycle
    pub has_cycles: bool,
    /// Mean bandwidth over unsealed backdoors, 0 if there are none
    pub avg_bandwidth: f64,
    /// Mean clearance over all hosts, 0 if there are none
    pub avg_clearance: f64,
}

impl NetworkReport {
    /// Whether the network is connected (at most one component)
    pub fn is_connected(&self) -> bool {
        self.components <= 1
    }
}

impl Topology {
    /// Compute the aggregate report
    pub fn report(&self) -> NetworkReport {
        let total_hosts = self.host_count();

        let mut unsealed = 0usize;
        let mut bandwidth_sum = 0.0f64;
        for bd in self.backdoors() {
            if !bd.is_sealed() {
                unsealed += 1;
                bandwidth_sum += bd.bandwidth() as f64;
            }
        }

        let clearance_sum: f64 = self.registry().iter().map(|h| h.clearance() as f64).sum();

        NetworkReport {
            total_hosts,
            unsealed_backdoors: unsealed,
            components: self.component_count(Exclusion::None),
            has_cycles: self.has_cycles(),
            avg_bandwidth: if unsealed == 0 {
                0.0
            } else {
                bandwidth_sum / unsealed as f64
            },
            avg_clearance: if total_hosts == 0 {
                0.0
            } else {
                clearance_sum / total_hosts as f64
            },
        }
    }
}
