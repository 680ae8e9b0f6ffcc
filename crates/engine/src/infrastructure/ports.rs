//! Collaborator port traits.
//!
//! The host engine's object graph never crosses into this crate; adapters
//! in the collaborator layer implement these narrow capability interfaces
//! over whatever reflection or caching they need. All ports are
//! synchronous: evaluation happens on the host's single simulation thread.

use gratitude_domain::{EffectDef, GuestStatusChange, PawnId, PawnSnapshot, QuestDefInfo, QuestRef};

/// Resolves the quest that brought a pawn into guest status.
#[cfg_attr(test, mockall::automock)]
pub trait QuestLookupPort: Send + Sync {
    /// Best-effort resolution: direct lookup first, then tag-based
    /// fallback. Returns `None` on any failure; no error from a
    /// resolution strategy may escape this boundary.
    fn quest_for_pawn(&self, pawn: PawnId) -> Option<QuestRef>;
}

/// Read access to the content-definitions registry.
#[cfg_attr(test, mockall::automock)]
pub trait DefsPort: Send + Sync {
    /// Look up a mental-effect definition by def name. `None` means the
    /// content is missing or misconfigured, not a fault.
    fn effect_def(&self, def_name: &str) -> Option<EffectDef>;

    /// All quest script definitions, for startup discovery diagnostics.
    fn quest_defs(&self) -> Vec<QuestDefInfo>;
}

/// Access to a pawn's emotional-state subsystem.
#[cfg_attr(test, mockall::automock)]
pub trait MoodPort: Send + Sync {
    /// Whether the subsystem already records an instance of the effect.
    fn has_memory_of(&self, pawn: PawnId, def_name: &str) -> bool;

    /// Grant one instance of the effect to the pawn.
    fn gain_memory(&self, pawn: PawnId, def: &EffectDef);
}

/// Enumerates pawns for the periodic sweep.
#[cfg_attr(test, mockall::automock)]
pub trait WorldScanPort: Send + Sync {
    /// Snapshots of every pawn currently spawned on any active map.
    fn spawned_pawns(&self) -> Vec<PawnSnapshot>;
}

/// Handler for guest-status transitions.
///
/// The collaborator layer owns the interception of the engine's status
/// setter and calls this synchronously at the moment of change; the core
/// only supplies the handler.
pub trait GuestStatusHook {
    fn on_guest_status_changed(&mut self, snapshot: &PawnSnapshot, change: &GuestStatusChange);
}
