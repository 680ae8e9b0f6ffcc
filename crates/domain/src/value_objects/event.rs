//! Originating-event payload for guest-status transitions.

use serde::{Deserialize, Serialize};

use crate::ids::FactionId;
use crate::value_objects::GuestStatus;

/// Values extracted from an upstream guest-status-change notification.
///
/// The collaborator layer observes the transition at the call site it does
/// not own and forwards whatever arguments it could identify. Either field
/// may be absent; the evaluator then falls back to the live value on the
/// snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestStatusChange {
    pub guest_status: Option<GuestStatus>,
    pub host_faction: Option<FactionId>,
}

impl GuestStatusChange {
    pub fn new(guest_status: Option<GuestStatus>, host_faction: Option<FactionId>) -> Self {
        Self {
            guest_status,
            host_faction,
        }
    }
}

/// Which trigger invoked an evaluation, carried through log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSource {
    /// Synchronous callback on a guest-status transition
    GuestStatusChanged,
    /// Periodic catch-all sweep over spawned pawns
    PeriodicScan,
}

impl TriggerSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerSource::GuestStatusChanged => "SetGuestStatus",
            TriggerSource::PeriodicScan => "PeriodicScan",
        }
    }
}

impl std::fmt::Display for TriggerSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
