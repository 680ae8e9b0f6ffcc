//! Guest status of a pawn toward the controlling faction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Relationship state between a pawn and the faction hosting it.
///
/// Mirrors the host engine's guest-status enum. A pawn with no guest
/// tracker at all is represented as `Option<GuestStatus>::None` on the
/// snapshot, which is distinct from any of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestStatus {
    /// Temporarily joined the faction; not a prisoner, slave, or colonist
    Guest,
    /// Held captive by the faction
    Prisoner,
    /// Enslaved by the faction
    Slave,
}

impl GuestStatus {
    /// Get a display name for log lines
    pub fn display_name(&self) -> &'static str {
        match self {
            GuestStatus::Guest => "Guest",
            GuestStatus::Prisoner => "Prisoner",
            GuestStatus::Slave => "Slave",
        }
    }

    /// Returns true only for the temporarily-joined guest state
    #[inline]
    pub fn is_guest(self) -> bool {
        matches!(self, Self::Guest)
    }
}

impl fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for GuestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "guest" => Ok(GuestStatus::Guest),
            "prisoner" => Ok(GuestStatus::Prisoner),
            "slave" => Ok(GuestStatus::Slave),
            _ => Err(DomainError::parse(format!("Unknown guest status: {}", s))),
        }
    }
}
