//! End-to-end console scenarios
//!
//! Each test feeds a full command script through one [`Console`] and checks
//! the complete reply transcript, the way an operator session would see it.

use matrixnet_console::Console;

/// Execute a script and collect one reply per non-blank line
fn transcript(script: &str) -> Vec<String> {
    let mut console = Console::new();
    script
        .lines()
        .filter_map(|line| console.execute(line))
        .collect()
}

#[test]
fn test_build_and_trace_session() {
    let replies = transcript(
        "spawn_host ZION 9\n\
         spawn_host NEBUCHADNEZZAR 7\n\
         spawn_host LOGOS 5\n\
         link_backdoor ZION NEBUCHADNEZZAR 10 100 3\n\
         link_backdoor NEBUCHADNEZZAR LOGOS 20 80 3\n\
         trace_route ZION LOGOS 50 0\n\
         trace_route ZION LOGOS 50 5",
    );
    assert_eq!(
        replies,
        vec![
            "Spawned host ZION with clearance level 9.",
            "Spawned host NEBUCHADNEZZAR with clearance level 7.",
            "Spawned host LOGOS with clearance level 5.",
            "Linked ZION <-> NEBUCHADNEZZAR with latency 10ms, bandwidth 100Mbps, firewall 3.",
            "Linked NEBUCHADNEZZAR <-> LOGOS with latency 20ms, bandwidth 80Mbps, firewall 3.",
            "Optimal route ZION -> LOGOS: ZION -> NEBUCHADNEZZAR -> LOGOS (Latency = 30ms)",
            "Optimal route ZION -> LOGOS: ZION -> NEBUCHADNEZZAR -> LOGOS (Latency = 35ms)",
        ]
    );
}

#[test]
fn test_sealing_reroutes_and_then_cuts_traffic() {
    let replies = transcript(
        "spawn_host A 5\n\
         spawn_host B 5\n\
         spawn_host C 5\n\
         link_backdoor A B 10 100 1\n\
         link_backdoor B C 10 100 1\n\
         link_backdoor A C 50 100 1\n\
         trace_route A C 50 0\n\
         seal_backdoor A B\n\
         trace_route A C 50 0\n\
         seal_backdoor A C\n\
         trace_route A C 50 0",
    );
    assert_eq!(
        &replies[6..],
        &[
            "Optimal route A -> C: A -> B -> C (Latency = 20ms)",
            "Backdoor A <-> B sealed.",
            "Optimal route A -> C: A -> C (Latency = 50ms)",
            "Backdoor A <-> C sealed.",
            "No route found from A to C",
        ]
    );
}

#[test]
fn test_firewall_makes_routes_directional() {
    // B's clearance clears A's firewall but not the reverse
    let replies = transcript(
        "spawn_host A 2\n\
         spawn_host B 5\n\
         link_backdoor A B 10 100 4\n\
         trace_route B A 50 0\n\
         trace_route A B 50 0",
    );
    assert_eq!(
        &replies[3..],
        &[
            "Optimal route B -> A: B -> A (Latency = 10ms)",
            "No route found from A to B",
        ]
    );
}

#[test]
fn test_bandwidth_floor_filters_links() {
    let replies = transcript(
        "spawn_host A 5\n\
         spawn_host B 5\n\
         link_backdoor A B 10 40 1\n\
         trace_route A B 50 0\n\
         trace_route A B 40 0",
    );
    assert_eq!(
        &replies[3..],
        &[
            "No route found from A to B",
            "Optimal route A -> B: A -> B (Latency = 10ms)",
        ]
    );
}

#[test]
fn test_breach_analysis_session() {
    let replies = transcript(
        "spawn_host A 5\n\
         spawn_host B 5\n\
         spawn_host C 5\n\
         spawn_host D 5\n\
         link_backdoor A B 10 100 1\n\
         link_backdoor B C 10 100 1\n\
         link_backdoor C A 10 100 1\n\
         link_backdoor C D 10 100 1\n\
         scan_connectivity\n\
         simulate_breach C\n\
         simulate_breach A\n\
         simulate_breach C D\n\
         simulate_breach A B",
    );
    assert_eq!(
        &replies[8..],
        &[
            "Network is fully connected.",
            "Host C IS an articulation point.\nFailure results in 2 disconnected components.",
            "Host A is NOT an articulation point. Network remains the same.",
            "Backdoor C <-> D IS a bridge.\nFailure results in 2 disconnected components.",
            "Backdoor A <-> B is NOT a bridge. Network remains the same.",
        ]
    );
}

#[test]
fn test_sealed_backdoors_carry_no_connectivity() {
    // A sealed backdoor keeps its metadata but carries nothing: it leaves
    // the unsealed count, the bandwidth average, and connectivity alike.
    let replies = transcript(
        "spawn_host A 5\n\
         spawn_host B 5\n\
         link_backdoor A B 10 100 1\n\
         seal_backdoor A B\n\
         scan_connectivity\n\
         oracle_report",
    );
    assert_eq!(replies[4], "Network has 2 disconnected components.");
    assert_eq!(
        replies[5],
        "--- Resistance Network Report ---\n\
         Total Hosts: 2\n\
         Total Unsealed Backdoors: 0\n\
         Network Connectivity: Disconnected\n\
         Connected Components: 2\n\
         Contains Cycles: No\n\
         Average Bandwidth: 0Mbps\n\
         Average Clearance Level: 5.0"
    );
}

#[test]
fn test_full_report_with_cycle() {
    let replies = transcript(
        "spawn_host A 3\n\
         spawn_host B 4\n\
         spawn_host C 8\n\
         link_backdoor A B 10 60 1\n\
         link_backdoor B C 10 90 1\n\
         link_backdoor C A 10 75 1\n\
         oracle_report",
    );
    assert_eq!(
        replies[6],
        "--- Resistance Network Report ---\n\
         Total Hosts: 3\n\
         Total Unsealed Backdoors: 3\n\
         Network Connectivity: Connected\n\
         Connected Components: 1\n\
         Contains Cycles: Yes\n\
         Average Bandwidth: 75.0Mbps\n\
         Average Clearance Level: 5.0"
    );
}

#[test]
fn test_error_lines_do_not_stop_the_session() {
    let replies = transcript(
        "spawn_host A 5\n\
         spawn_host A 5\n\
         warp_drive ON\n\
         spawn_host B\n\
         \n\
         spawn_host B 5",
    );
    assert_eq!(
        replies,
        vec![
            "Spawned host A with clearance level 5.",
            "Some error occurred in spawn_host.",
            "Unknown command: warp_drive",
            "Error processing command: spawn_host B",
            "Spawned host B with clearance level 5.",
        ]
    );
}
