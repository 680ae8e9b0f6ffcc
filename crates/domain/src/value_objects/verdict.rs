//! Evaluation verdict and skip reasons.

use std::fmt;

use crate::value_objects::{AppliedKey, GuestStatus};

/// Outcome of one eligibility evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Effect was granted and the key committed to the ledger
    Applied(AppliedKey),
    /// No grant; reason says which gate failed
    Ineligible(SkipReason),
}

impl Verdict {
    pub fn is_applied(&self) -> bool {
        matches!(self, Verdict::Applied(_))
    }
}

/// Which gate disqualified the pawn.
///
/// Most of these are ordinary ineligibility, not errors. `MissingEffectDef`
/// is a content-integrity problem and `MoodUnavailable` a pawn-state
/// problem; both still yield a quiet negative verdict, never a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Dead,
    NotSpawned,
    NotHumanlike,
    Colonist,
    PrisonerOrSlave,
    /// Effective guest status was not `Guest`; carries the observed status
    NotGuest(Option<GuestStatus>),
    /// Effective host faction was absent or not the player faction
    WrongFaction,
    /// No quest resolved, or its type did not match; carries what resolved
    QuestMismatch(Option<String>),
    /// Ledger already holds the key
    AlreadyApplied,
    /// Effect definition absent from the content registry
    MissingEffectDef,
    /// No reachable emotional-state subsystem on the pawn
    MoodUnavailable,
    /// The mood subsystem already records the effect
    EffectAlreadyPresent,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Dead => write!(f, "pawn is dead"),
            SkipReason::NotSpawned => write!(f, "not spawned / not on map"),
            SkipReason::NotHumanlike => write!(f, "not humanlike"),
            SkipReason::Colonist => write!(f, "pawn is colonist"),
            SkipReason::PrisonerOrSlave => write!(f, "pawn is prisoner / slave"),
            SkipReason::NotGuest(status) => write!(
                f,
                "pawn is not guest (status={})",
                status
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "<null>".to_string())
            ),
            SkipReason::WrongFaction => write!(f, "host faction not the player faction"),
            SkipReason::QuestMismatch(actual) => write!(
                f,
                "quest mismatch (actual={})",
                actual.as_deref().unwrap_or("<null>")
            ),
            SkipReason::AlreadyApplied => write!(f, "already applied"),
            SkipReason::MissingEffectDef => write!(f, "missing effect def"),
            SkipReason::MoodUnavailable => write!(f, "pawn cannot receive memories"),
            SkipReason::EffectAlreadyPresent => write!(f, "effect already present"),
        }
    }
}
