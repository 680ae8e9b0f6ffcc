//! Point-in-time view of a pawn, as handed over by the host-engine
//! collaborators at decision time.

use serde::{Deserialize, Serialize};

use crate::ids::{FactionId, PawnId};
use crate::value_objects::GuestStatus;

/// Captivity flags read off the pawn's guest-tracker sub-object.
///
/// The pawn's own status flags and the tracker's can disagree in edge
/// cases (mid-transition, modded trackers); either source saying
/// prisoner/slave disqualifies. Absence of the tracker maps to all-false
/// rather than an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptivityFlags {
    pub is_prisoner: bool,
    pub is_slave: bool,
}

/// Read-only view of one pawn at decision time.
///
/// Collaborators must fill this from current engine truth at call time;
/// the core never caches snapshot data across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PawnSnapshot {
    /// Stable host-engine id
    pub id: PawnId,
    /// Short label, for log lines only
    pub label: String,
    pub dead: bool,
    pub spawned: bool,
    /// Pawn is placed on a currently-active map
    pub on_active_map: bool,
    pub humanlike: bool,
    pub is_colonist: bool,
    pub is_prisoner: bool,
    pub is_slave: bool,
    /// Flags from the captivity-tracking sub-object, when reachable
    pub captivity: Option<CaptivityFlags>,
    /// Live guest status; `None` when the pawn has no guest tracker
    pub guest_status: Option<GuestStatus>,
    /// Faction currently hosting the pawn, if any
    pub host_faction: Option<FactionId>,
    /// The player's faction, for identity comparison
    pub player_faction: FactionId,
    /// Whether an emotional-state subsystem is reachable on this pawn
    pub has_mood_tracker: bool,
    /// Diagnostic only: pawn is downed
    pub downed: bool,
    /// Diagnostic only: current mood level, when a tracker exists
    pub mood_level: Option<f32>,
}

impl PawnSnapshot {
    /// A spawned, living, humanlike pawn with no faction relationship yet.
    /// Callers layer the relevant state on with the `with_` combinators.
    pub fn new(id: PawnId, label: impl Into<String>, player_faction: FactionId) -> Self {
        Self {
            id,
            label: label.into(),
            dead: false,
            spawned: true,
            on_active_map: true,
            humanlike: true,
            is_colonist: false,
            is_prisoner: false,
            is_slave: false,
            captivity: None,
            guest_status: None,
            host_faction: None,
            player_faction,
            has_mood_tracker: true,
            downed: false,
            mood_level: None,
        }
    }

    pub fn with_guest_status(mut self, status: GuestStatus) -> Self {
        self.guest_status = Some(status);
        self
    }

    pub fn with_host_faction(mut self, faction: FactionId) -> Self {
        self.host_faction = Some(faction);
        self
    }

    pub fn with_captivity(mut self, flags: CaptivityFlags) -> Self {
        self.captivity = Some(flags);
        self
    }

    /// True when either the pawn's own flags or the captivity tracker
    /// report prisoner or slave status.
    pub fn is_prisoner_or_slave(&self) -> bool {
        if self.is_prisoner || self.is_slave {
            return true;
        }
        match self.captivity {
            Some(flags) => flags.is_prisoner || flags.is_slave,
            None => false,
        }
    }

    /// One-line description for the pawn-detection log.
    pub fn describe(&self) -> String {
        format!(
            "name={} id={} guestStatus={} hostFaction={} isColonist={} isPrisoner={} isSlave={} downed={} dead={} spawned={} humanlike={} moodPresent={} moodLevel={}",
            self.label,
            self.id,
            self.guest_status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "<no guest tracker>".to_string()),
            self.host_faction
                .map(|f| f.to_string())
                .unwrap_or_else(|| "<null>".to_string()),
            self.is_colonist,
            self.is_prisoner,
            self.is_slave,
            self.downed,
            self.dead,
            self.spawned,
            self.humanlike,
            self.has_mood_tracker,
            self.mood_level
                .map(|m| format!("{:.2}", m))
                .unwrap_or_else(|| "<no mood>".to_string()),
        )
    }
}
