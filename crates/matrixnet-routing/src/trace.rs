//! The route search itself
//!
//! A Dijkstra variant over step-dependent edge costs. Because a backdoor's
//! effective latency grows with the hop count at which it is traversed,
//! classical optimality arguments do not hold. The search prunes on hop
//! count per host instead, which can discard a cheaper but longer path
//! through an intermediate host; callers rely on exactly this pruning
//! behavior, so it must not be swapped for a per-(host, steps) relaxation.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use matrixnet_core::HostId;
use matrixnet_graph::Topology;

use crate::error::{TraceError, TraceResult};
use crate::frontier::Frontier;
use crate::state::SearchState;

/// A traced route: the hop sequence and its total step-dependent latency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Host ids from source to destination inclusive
    pub hops: Vec<HostId>,
    /// Total accumulated latency in milliseconds
    pub total_latency: i64,
}

/// Trace the optimal route between two hosts
///
/// `min_bandwidth` filters out backdoors below the required capacity;
/// `lambda` is the per-hop latency surcharge coefficient, so the `k`-th hop
/// across a backdoor costs `base_latency + lambda * k` (`k` counted from 0).
///
/// Returns `Ok(None)` when no feasible route exists — a valid negative
/// result, not an error. A trace from a host to itself is the trivial
/// zero-latency plan and runs no search.
pub fn trace_route(
    topology: &Topology,
    source: &HostId,
    dest: &HostId,
    min_bandwidth: i64,
    lambda: i64,
) -> TraceResult<Option<RoutePlan>> {
    let src = topology
        .registry()
        .index_of(source)
        .ok_or_else(|| TraceError::UnknownHost(source.to_string()))?;
    let dst = topology
        .registry()
        .index_of(dest)
        .ok_or_else(|| TraceError::UnknownHost(dest.to_string()))?;

    if src == dst {
        return Ok(Some(RoutePlan {
            hops: vec![source.clone()],
            total_latency: 0,
        }));
    }

    debug!(source = %source, dest = %dest, min_bandwidth, lambda, "Tracing route");

    // Fewest hops seen per host when settled; a successor that cannot beat
    // the recorded count is dropped (the lambda surcharge makes longer
    // paths pay for every later hop).
    let mut best_steps = vec![u32::MAX; topology.host_count()];
    best_steps[src] = 0;

    let mut frontier = Frontier::new();
    frontier.push(SearchState::origin(src, source.clone()));

    let mut winner: Option<Rc<SearchState>> = None;
    while let Some(state) = frontier.pop() {
        // First pop of the destination wins, by the frontier's ordering
        if state.host == dst {
            winner = Some(state);
            break;
        }

        // Stale entry: a fewer-hop path to this host was already settled
        if state.steps > best_steps[state.host] {
            continue;
        }
        best_steps[state.host] = state.steps;

        let departing = topology.host(state.host);
        for entry in topology.neighbors(state.host) {
            let bd = topology.backdoor(entry.link);

            // Feasibility: unsealed, enough bandwidth, and the departing
            // host clears the firewall
            if bd.is_sealed()
                || bd.bandwidth() < min_bandwidth
                || departing.clearance() < bd.firewall()
            {
                continue;
            }

            let edge_cost = bd.base_latency() + lambda * i64::from(state.steps);
            let next_steps = state.steps + 1;
            if next_steps >= best_steps[entry.peer] {
                continue;
            }

            let peer_id = topology.host(entry.peer).id().clone();
            frontier.push(SearchState::advance(&state, entry.peer, peer_id, edge_cost));
        }
    }

    let Some(winner) = winner else {
        debug!(source = %source, dest = %dest, "No route found");
        return Ok(None);
    };

    // Walk the parent chain back to the source, then reverse
    let mut hops = Vec::with_capacity(winner.steps as usize + 1);
    let mut cursor: Option<&SearchState> = Some(&winner);
    while let Some(state) = cursor {
        hops.push(state.id.clone());
        cursor = state.parent.as_deref();
    }
    hops.reverse();

    debug!(source = %source, dest = %dest, hops = hops.len(), latency = winner.latency, "Route found");
    Ok(Some(RoutePlan {
        hops,
        total_latency: winner.latency,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_id(s: &str) -> HostId {
        HostId::new(s).unwrap()
    }

    /// A - B - C line: clearances 5, both links latency 10, bandwidth 100,
    /// firewall 1
    fn line_topology() -> Topology {
        let mut topo = Topology::new();
        for id in ["A", "B", "C"] {
            topo.spawn(make_id(id), 5).unwrap();
        }
        topo.link(&make_id("A"), &make_id("B"), 10, 100, 1).unwrap();
        topo.link(&make_id("B"), &make_id("C"), 10, 100, 1).unwrap();
        topo
    }

    fn hops(plan: &RoutePlan) -> Vec<&str> {
        plan.hops.iter().map(|h| h.as_str()).collect()
    }

    #[test]
    fn test_line_route_lambda_zero() {
        let topo = line_topology();
        let plan = trace_route(&topo, &make_id("A"), &make_id("C"), 50, 0)
            .unwrap()
            .unwrap();
        assert_eq!(hops(&plan), ["A", "B", "C"]);
        assert_eq!(plan.total_latency, 20);
    }

    #[test]
    fn test_lambda_surcharges_later_hops() {
        // Second hop departs after 1 step: 10 + 5*1 = 15, total 25
        let topo = line_topology();
        let plan = trace_route(&topo, &make_id("A"), &make_id("C"), 50, 5)
            .unwrap()
            .unwrap();
        assert_eq!(plan.total_latency, 25);
    }

    #[test]
    fn test_self_route_is_trivial() {
        let topo = line_topology();
        let plan = trace_route(&topo, &make_id("B"), &make_id("B"), 1000, 99)
            .unwrap()
            .unwrap();
        assert_eq!(hops(&plan), ["B"]);
        assert_eq!(plan.total_latency, 0);
    }

    #[test]
    fn test_sealed_link_blocks_route() {
        let mut topo = line_topology();
        topo.toggle_seal(&make_id("B"), &make_id("C")).unwrap();
        let plan = trace_route(&topo, &make_id("A"), &make_id("C"), 50, 0).unwrap();
        assert!(plan.is_none());
    }

    #[test]
    fn test_bandwidth_requirement_filters_edges() {
        let topo = line_topology();
        // Both links carry 100 Mbps; requiring more finds nothing
        let plan = trace_route(&topo, &make_id("A"), &make_id("C"), 101, 0).unwrap();
        assert!(plan.is_none());
    }

    #[test]
    fn test_unknown_host_is_an_error() {
        let topo = line_topology();
        assert_eq!(
            trace_route(&topo, &make_id("A"), &make_id("GHOST"), 0, 0).unwrap_err(),
            TraceError::UnknownHost("GHOST".to_string())
        );
    }

    #[test]
    fn test_clearance_checked_at_departure_side() {
        // LOW (clearance 1) -- HIGH (clearance 9), firewall 5 on the link.
        // Departing HIGH clears it; departing LOW does not.
        let mut topo = Topology::new();
        topo.spawn(make_id("LOW"), 1).unwrap();
        topo.spawn(make_id("HIGH"), 9).unwrap();
        topo.link(&make_id("LOW"), &make_id("HIGH"), 10, 100, 5).unwrap();

        let from_high = trace_route(&topo, &make_id("HIGH"), &make_id("LOW"), 0, 0).unwrap();
        assert!(from_high.is_some());

        let from_low = trace_route(&topo, &make_id("LOW"), &make_id("HIGH"), 0, 0).unwrap();
        assert!(from_low.is_none());
    }

    #[test]
    fn test_prefers_lower_latency_path() {
        // A-B-D costs 2+2=4; A-C-D costs 10+10=20
        let mut topo = Topology::new();
        for id in ["A", "B", "C", "D"] {
            topo.spawn(make_id(id), 5).unwrap();
        }
        topo.link(&make_id("A"), &make_id("B"), 2, 100, 1).unwrap();
        topo.link(&make_id("B"), &make_id("D"), 2, 100, 1).unwrap();
        topo.link(&make_id("A"), &make_id("C"), 10, 100, 1).unwrap();
        topo.link(&make_id("C"), &make_id("D"), 10, 100, 1).unwrap();

        let plan = trace_route(&topo, &make_id("A"), &make_id("D"), 0, 0)
            .unwrap()
            .unwrap();
        assert_eq!(hops(&plan), ["A", "B", "D"]);
        assert_eq!(plan.total_latency, 4);
    }

    #[test]
    fn test_direct_hop_beats_detour_under_lambda() {
        // Direct A-D at latency 30 vs A-B-D at 10+10. With lambda 0 the
        // detour wins (20); with a large lambda its second hop is
        // surcharged past the direct link.
        let mut topo = Topology::new();
        for id in ["A", "B", "D"] {
            topo.spawn(make_id(id), 5).unwrap();
        }
        topo.link(&make_id("A"), &make_id("D"), 30, 100, 1).unwrap();
        topo.link(&make_id("A"), &make_id("B"), 10, 100, 1).unwrap();
        topo.link(&make_id("B"), &make_id("D"), 10, 100, 1).unwrap();

        let cheap = trace_route(&topo, &make_id("A"), &make_id("D"), 0, 0)
            .unwrap()
            .unwrap();
        assert_eq!(hops(&cheap), ["A", "B", "D"]);
        assert_eq!(cheap.total_latency, 20);

        let surcharged = trace_route(&topo, &make_id("A"), &make_id("D"), 0, 25)
            .unwrap()
            .unwrap();
        assert_eq!(hops(&surcharged), ["A", "D"]);
        assert_eq!(surcharged.total_latency, 30);
    }

    #[test]
    fn test_disconnected_pair_has_no_route() {
        let mut topo = Topology::new();
        topo.spawn(make_id("A"), 5).unwrap();
        topo.spawn(make_id("B"), 5).unwrap();
        let plan = trace_route(&topo, &make_id("A"), &make_id("B"), 0, 0).unwrap();
        assert!(plan.is_none());
    }
}
