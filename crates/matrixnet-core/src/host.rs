//! Host identity and node model
//!
//! A [`HostId`] is a validated string identifier restricted to uppercase
//! letters, digits, and underscore. A [`Host`] pairs an identity with its
//! security clearance level; hosts are immutable once spawned and are never
//! deleted (breach queries only *simulate* removal).

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::error::HostError;

/// Validated host identifier
///
/// Only `[A-Z0-9_]+` is accepted; everything else is rejected at
/// construction, so a `HostId` in circulation is always well-formed.
/// Ordering is lexicographic, which is what canonical link keys and
/// routing tie-breaks rely on.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HostId(String);

impl HostId {
    /// Create a new host id, validating the character set
    pub fn new(id: impl Into<String>) -> Result<Self, HostError> {
        let id = id.into();
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
        if valid {
            Ok(Self(id))
        } else {
            Err(HostError::InvalidId(id))
        }
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A secure access point (node) in the network
///
/// Stores identity and the clearance level used for firewall checks when
/// departing the host during route tracing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    id: HostId,
    clearance: i64,
}

impl Host {
    /// Create a new host
    pub fn new(id: HostId, clearance: i64) -> Self {
        Self { id, clearance }
    }

    /// The host's identifier
    pub fn id(&self) -> &HostId {
        &self.id
    }

    /// The host's security clearance level
    pub fn clearance(&self) -> i64 {
        self.clearance
    }
}
