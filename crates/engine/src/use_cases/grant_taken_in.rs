//! Grant "taken in" use case - the eligibility evaluator.
//!
//! Decides whether a pawn qualifies for the one-time gratitude effect
//! after being granted guest status by the player faction, deduplicates
//! against the ledger, and applies the effect. All gates short-circuit;
//! order matters only for diagnostic clarity, since every predicate must
//! hold.

use std::sync::Arc;

use gratitude_domain::{
    AppliedKey, AppliedLedger, GuestStatus, GuestStatusChange, PawnSnapshot, SkipReason,
    TriggerSource, Verdict,
};

use crate::infrastructure::ports::{DefsPort, MoodPort, QuestLookupPort};
use crate::infrastructure::settings::GrantPolicy;

/// Def name of the quest that must have brought the pawn here.
pub const REFUGEE_QUEST_DEF_NAME: &str = "Hospitality_Refugee";

/// Def name of the mental effect granted on success.
pub const TAKEN_IN_THOUGHT_DEF_NAME: &str = "GratefulRefugees_TakenIn";

/// Evaluates one pawn against the gratitude rules and, on a fresh pass,
/// grants the effect and commits the dedup key.
pub struct GrantTakenIn {
    quests: Arc<dyn QuestLookupPort>,
    defs: Arc<dyn DefsPort>,
    mood: Arc<dyn MoodPort>,
    policy: GrantPolicy,
}

impl GrantTakenIn {
    pub fn new(
        quests: Arc<dyn QuestLookupPort>,
        defs: Arc<dyn DefsPort>,
        mood: Arc<dyn MoodPort>,
        policy: GrantPolicy,
    ) -> Self {
        Self {
            quests,
            defs,
            mood,
            policy,
        }
    }

    /// Evaluate a pawn and apply the effect if every gate passes.
    ///
    /// `change` carries values extracted from the originating status-change
    /// notification; when absent (periodic sweep) the live snapshot values
    /// are used. Side effects on success are exactly: one ledger entry and
    /// one memory instance. No outcome here is a fault; the worst case is
    /// a quiet `Ineligible`.
    pub fn execute(
        &self,
        ledger: &mut AppliedLedger,
        snapshot: &PawnSnapshot,
        change: Option<&GuestStatusChange>,
        source: TriggerSource,
    ) -> Verdict {
        tracing::debug!(
            pawn = %snapshot.id,
            label = %snapshot.label,
            source = %source,
            "Apply attempt"
        );

        if snapshot.dead {
            return self.skip(snapshot, source, SkipReason::Dead);
        }
        if !snapshot.spawned || !snapshot.on_active_map {
            return self.skip(snapshot, source, SkipReason::NotSpawned);
        }
        if !snapshot.humanlike {
            return self.skip(snapshot, source, SkipReason::NotHumanlike);
        }
        if snapshot.is_colonist {
            return self.skip(snapshot, source, SkipReason::Colonist);
        }
        if snapshot.is_prisoner_or_slave() {
            return self.skip(snapshot, source, SkipReason::PrisonerOrSlave);
        }

        let guest_status = change
            .and_then(|c| c.guest_status)
            .or(snapshot.guest_status);
        if guest_status != Some(GuestStatus::Guest) {
            return self.skip(snapshot, source, SkipReason::NotGuest(guest_status));
        }

        let host_faction = change
            .and_then(|c| c.host_faction)
            .or(snapshot.host_faction);
        if host_faction != Some(snapshot.player_faction) {
            return self.skip(snapshot, source, SkipReason::WrongFaction);
        }

        let quest = match self.quests.quest_for_pawn(snapshot.id) {
            Some(quest) => quest,
            None => return self.skip(snapshot, source, SkipReason::QuestMismatch(None)),
        };
        if quest.def_name != REFUGEE_QUEST_DEF_NAME {
            return self.skip(
                snapshot,
                source,
                SkipReason::QuestMismatch(Some(quest.def_name)),
            );
        }

        let key = AppliedKey::new(snapshot.id, quest.dedup_id());
        match self.policy {
            // Legacy ordering: the mark doubles as the membership
            // check, so a failed late gate leaves the key committed.
            GrantPolicy::LegacyMarkBeforeVerify => {
                if !ledger.mark_if_absent(&key) {
                    return self.skip(snapshot, source, SkipReason::AlreadyApplied);
                }
            }
            GrantPolicy::Corrected => {
                if ledger.contains(&key) {
                    return self.skip(snapshot, source, SkipReason::AlreadyApplied);
                }
            }
        }

        let def = match self.defs.effect_def(TAKEN_IN_THOUGHT_DEF_NAME) {
            Some(def) => def,
            None => {
                tracing::warn!(
                    pawn = %snapshot.id,
                    def_name = TAKEN_IN_THOUGHT_DEF_NAME,
                    "Failed: missing thought def"
                );
                return Verdict::Ineligible(SkipReason::MissingEffectDef);
            }
        };

        if !snapshot.has_mood_tracker {
            tracing::warn!(
                pawn = %snapshot.id,
                "Failed: pawn has no mood tracker / cannot receive memories"
            );
            return Verdict::Ineligible(SkipReason::MoodUnavailable);
        }

        if self.mood.has_memory_of(snapshot.id, &def.def_name) {
            return self.skip(snapshot, source, SkipReason::EffectAlreadyPresent);
        }

        // Ledger commit and memory grant belong to the same logical step.
        if self.policy == GrantPolicy::Corrected {
            ledger.mark_if_absent(&key);
        }
        self.mood.gain_memory(snapshot.id, &def);

        tracing::info!(
            pawn = %snapshot.id,
            label = %snapshot.label,
            key = %key,
            mood_offset = def.mood_offset,
            duration_ticks = def.duration_ticks,
            "Applied TakenIn thought"
        );
        Verdict::Applied(key)
    }

    fn skip(&self, snapshot: &PawnSnapshot, source: TriggerSource, reason: SkipReason) -> Verdict {
        tracing::debug!(
            pawn = %snapshot.id,
            source = %source,
            "Skip: {}",
            reason
        );
        Verdict::Ineligible(reason)
    }
}
