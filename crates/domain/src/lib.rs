//! Gratitude domain crate.
//!
//! Snapshot and value types for the "taken in" gratitude effect, plus the
//! applied-set ledger that makes the grant at-most-once per (pawn, quest)
//! pair. No I/O and no host-engine types live here; collaborators hand in
//! pre-validated snapshots.

pub mod error;
pub mod ids;
pub mod ledger;
pub mod value_objects;

pub use error::DomainError;
pub use ids::{FactionId, PawnId, QuestId};
pub use ledger::AppliedLedger;
pub use value_objects::{
    AppliedKey, CaptivityFlags, EffectDef, GuestStatus, GuestStatusChange, PawnSnapshot,
    QuestDefInfo, QuestRef, SkipReason, TriggerSource, Verdict,
};
