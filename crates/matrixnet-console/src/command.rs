//! Command grammar
//!
//! Commands arrive one per line, whitespace-delimited, first token naming
//! the operation. Arguments are taken positionally; surplus tokens are
//! ignored. `simulate_breach` is disambiguated by argument count: one id
//! simulates a host breach, two a backdoor breach.
//!
//! Identifiers are kept as raw strings here — validation happens when the
//! console hands them to the engine, so an invalid id surfaces as that
//! command's failure line rather than a parse error.

use thiserror::Error;

/// A parsed operator command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SpawnHost {
        id: String,
        clearance: i64,
    },
    LinkBackdoor {
        a: String,
        b: String,
        latency: i64,
        bandwidth: i64,
        firewall: i64,
    },
    SealBackdoor {
        a: String,
        b: String,
    },
    TraceRoute {
        source: String,
        dest: String,
        min_bandwidth: i64,
        lambda: i64,
    },
    ScanConnectivity,
    SimulateHostBreach {
        id: String,
    },
    SimulateLinkBreach {
        a: String,
        b: String,
    },
    OracleReport,
}

/// Why a line failed to parse
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// First token names no known operation
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Known operation with missing or non-numeric arguments
    #[error("Malformed arguments")]
    Malformed,
}

/// Parse one non-empty command line
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (name, args) = tokens.split_first().ok_or(ParseError::Malformed)?;

    match *name {
        "spawn_host" => Ok(Command::SpawnHost {
            id: arg(args, 0)?.to_string(),
            clearance: int(args, 1)?,
        }),
        "link_backdoor" => Ok(Command::LinkBackdoor {
            a: arg(args, 0)?.to_string(),
            b: arg(args, 1)?.to_string(),
            latency: int(args, 2)?,
            bandwidth: int(args, 3)?,
            firewall: int(args, 4)?,
        }),
        "seal_backdoor" => Ok(Command::SealBackdoor {
            a: arg(args, 0)?.to_string(),
            b: arg(args, 1)?.to_string(),
        }),
        "trace_route" => Ok(Command::TraceRoute {
            source: arg(args, 0)?.to_string(),
            dest: arg(args, 1)?.to_string(),
            min_bandwidth: int(args, 2)?,
            lambda: int(args, 3)?,
        }),
        "scan_connectivity" => Ok(Command::ScanConnectivity),
        "simulate_breach" => {
            if args.len() == 1 {
                Ok(Command::SimulateHostBreach {
                    id: args[0].to_string(),
                })
            } else {
                Ok(Command::SimulateLinkBreach {
                    a: arg(args, 0)?.to_string(),
                    b: arg(args, 1)?.to_string(),
                })
            }
        }
        "oracle_report" => Ok(Command::OracleReport),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

fn arg<'a>(args: &[&'a str], idx: usize) -> Result<&'a str, ParseError> {
    args.get(idx).copied().ok_or(ParseError::Malformed)
}

fn int(args: &[&str], idx: usize) -> Result<i64, ParseError> {
    arg(args, idx)?.parse().map_err(|_| ParseError::Malformed)
}
