//! Command dispatch and line rendering
//!
//! The [`Console`] owns the topology for the lifetime of the run and turns
//! each parsed command into exactly one rendered reply. Failure replies are
//! generic per command; the underlying error is logged, never surfaced in
//! the output stream.

use tracing::debug;

use matrixnet_core::{HostId, MatrixNetError};
use matrixnet_graph::Topology;
use matrixnet_routing::trace_route;

use crate::command::{Command, ParseError, parse};

/// The operator console: one engine instance, one reply per command
#[derive(Debug, Default)]
pub struct Console {
    topology: Topology,
}

impl Console {
    /// Create a console over an empty topology
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute one input line, returning its reply
    ///
    /// Blank lines produce no reply. Everything else produces exactly one,
    /// error cases included.
    pub fn execute(&mut self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        Some(match parse(line) {
            Ok(command) => self.dispatch(command),
            Err(ParseError::UnknownCommand(name)) => format!("Unknown command: {name}"),
            Err(ParseError::Malformed) => format!("Error processing command: {line}"),
        })
    }

    fn dispatch(&mut self, command: Command) -> String {
        match command {
            Command::SpawnHost { id, clearance } => self.spawn_host(&id, clearance),
            Command::LinkBackdoor {
                a,
                b,
                latency,
                bandwidth,
                firewall,
            } => self.link_backdoor(&a, &b, latency, bandwidth, firewall),
            Command::SealBackdoor { a, b } => self.seal_backdoor(&a, &b),
            Command::TraceRoute {
                source,
                dest,
                min_bandwidth,
                lambda,
            } => self.trace_route(&source, &dest, min_bandwidth, lambda),
            Command::ScanConnectivity => self.scan_connectivity(),
            Command::SimulateHostBreach { id } => self.simulate_host_breach(&id),
            Command::SimulateLinkBreach { a, b } => self.simulate_link_breach(&a, &b),
            Command::OracleReport => self.oracle_report(),
        }
    }

    fn spawn_host(&mut self, id: &str, clearance: i64) -> String {
        let outcome: Result<(), MatrixNetError> = HostId::new(id)
            .map_err(MatrixNetError::from)
            .and_then(|host| {
                self.topology
                    .spawn(host, clearance)
                    .map(|_| ())
                    .map_err(MatrixNetError::from)
            });
        match outcome {
            Ok(()) => format!("Spawned host {id} with clearance level {clearance}."),
            Err(err) => {
                debug!(error = %err, "spawn_host rejected");
                "Some error occurred in spawn_host.".to_string()
            }
        }
    }

    fn link_backdoor(&mut self, a: &str, b: &str, latency: i64, bandwidth: i64, firewall: i64) -> String {
        let outcome: Result<(), MatrixNetError> = (|| {
            let ha = HostId::new(a)?;
            let hb = HostId::new(b)?;
            self.topology.link(&ha, &hb, latency, bandwidth, firewall)?;
            Ok(())
        })();
        match outcome {
            Ok(()) => format!(
                "Linked {a} <-> {b} with latency {latency}ms, bandwidth {bandwidth}Mbps, firewall {firewall}."
            ),
            Err(err) => {
                debug!(error = %err, "link_backdoor rejected");
                "Some error occurred in link_backdoor.".to_string()
            }
        }
    }

    fn seal_backdoor(&mut self, a: &str, b: &str) -> String {
        let outcome: Result<bool, MatrixNetError> = (|| {
            let ha = HostId::new(a)?;
            let hb = HostId::new(b)?;
            Ok(self.topology.toggle_seal(&ha, &hb)?)
        })();
        match outcome {
            Ok(true) => format!("Backdoor {a} <-> {b} sealed."),
            Ok(false) => format!("Backdoor {a} <-> {b} unsealed."),
            Err(err) => {
                debug!(error = %err, "seal_backdoor rejected");
                "Some error occurred in seal_backdoor.".to_string()
            }
        }
    }

    fn trace_route(&mut self, source: &str, dest: &str, min_bandwidth: i64, lambda: i64) -> String {
        let ids = HostId::new(source).and_then(|s| HostId::new(dest).map(|d| (s, d)));
        let plan = match ids {
            Ok((s, d)) => trace_route(&self.topology, &s, &d, min_bandwidth, lambda),
            Err(err) => {
                debug!(error = %err, "trace_route rejected");
                return "Some error occurred in trace_route.".to_string();
            }
        };
        match plan {
            Ok(Some(plan)) => {
                let path: Vec<&str> = plan.hops.iter().map(|h| h.as_str()).collect();
                format!(
                    "Optimal route {source} -> {dest}: {} (Latency = {}ms)",
                    path.join(" -> "),
                    plan.total_latency
                )
            }
            Ok(None) => format!("No route found from {source} to {dest}"),
            Err(err) => {
                debug!(error = %err, "trace_route rejected");
                "Some error occurred in trace_route.".to_string()
            }
        }
    }

    fn scan_connectivity(&self) -> String {
        let components = self
            .topology
            .component_count(matrixnet_graph::Exclusion::None);
        if components <= 1 {
            "Network is fully connected.".to_string()
        } else {
            format!("Network has {components} disconnected components.")
        }
    }

    fn simulate_host_breach(&self, id: &str) -> String {
        let outcome = HostId::new(id)
            .map_err(MatrixNetError::from)
            .and_then(|host| Ok(self.topology.host_breach(&host)?));
        match outcome {
            Ok(outcome) if outcome.critical => format!(
                "Host {id} IS an articulation point.\nFailure results in {} disconnected components.",
                outcome.components
            ),
            Ok(_) => format!("Host {id} is NOT an articulation point. Network remains the same."),
            Err(err) => {
                debug!(error = %err, "simulate_breach rejected");
                "Some error occurred in simulate_breach.".to_string()
            }
        }
    }

    fn simulate_link_breach(&self, a: &str, b: &str) -> String {
        let outcome = (|| -> Result<_, MatrixNetError> {
            let ha = HostId::new(a)?;
            let hb = HostId::new(b)?;
            Ok(self.topology.backdoor_breach(&ha, &hb)?)
        })();
        match outcome {
            Ok(outcome) if outcome.critical => format!(
                "Backdoor {a} <-> {b} IS a bridge.\nFailure results in {} disconnected components.",
                outcome.components
            ),
            Ok(_) => format!("Backdoor {a} <-> {b} is NOT a bridge. Network remains the same."),
            Err(err) => {
                debug!(error = %err, "simulate_breach rejected");
                "Some error occurred in simulate_breach.".to_string()
            }
        }
    }

    fn oracle_report(&self) -> String {
        let report = self.topology.report();
        format!(
            "--- Resistance Network Report ---\n\
             Total Hosts: {}\n\
             Total Unsealed Backdoors: {}\n\
             Network Connectivity: {}\n\
             Connected Components: {}\n\
             Contains Cycles: {}\n\
             Average Bandwidth: {}Mbps\n\
             Average Clearance Level: {}",
            report.total_hosts,
            report.unsealed_backdoors,
            if report.is_connected() { "Connected" } else { "Disconnected" },
            report.components,
            if report.has_cycles { "Yes" } else { "No" },
            format_average(report.avg_bandwidth, report.unsealed_backdoors),
            format_average(report.avg_clearance, report.total_hosts),
        )
    }
}

/// Round half-up to one decimal; a zero-denominator average renders as `0`
fn format_average(value: f64, samples: usize) -> String {
    if samples == 0 {
        "0".to_string()
    } else {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    }
}
