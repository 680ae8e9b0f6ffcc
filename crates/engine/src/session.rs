//! Session component: owns the ledger, reacts to both triggers, and
//! handles the save/load round-trip.
//!
//! Created at session start, destroyed with the session. Both triggers
//! run on the host's single simulation thread, so the ledger needs no
//! locking; `mark_if_absent` is the sole gate against double-application.

use std::sync::Arc;

use gratitude_domain::{AppliedLedger, GuestStatusChange, PawnSnapshot, TriggerSource, Verdict};

use crate::infrastructure::persistence::SessionSave;
use crate::infrastructure::ports::{GuestStatusHook, WorldScanPort};
use crate::infrastructure::settings::ModSettings;
use crate::use_cases::GrantTakenIn;

pub struct GratitudeComponent {
    ledger: AppliedLedger,
    grant: Arc<GrantTakenIn>,
    settings: ModSettings,
}

impl GratitudeComponent {
    pub fn new(grant: Arc<GrantTakenIn>, settings: ModSettings) -> Self {
        Self {
            ledger: AppliedLedger::new(),
            grant,
            settings,
        }
    }

    pub fn ledger(&self) -> &AppliedLedger {
        &self.ledger
    }

    /// Periodic catch-all sweep for transitions the event hook missed.
    /// Runs every `sweep_interval_ticks`; other ticks are no-ops.
    pub fn tick(&mut self, ticks_game: u64, world: &dyn WorldScanPort) {
        let interval = self.settings.sweep_interval_ticks.max(1);
        if ticks_game % interval != 0 {
            return;
        }

        for snapshot in world.spawned_pawns() {
            self.grant.execute(
                &mut self.ledger,
                &snapshot,
                None,
                TriggerSource::PeriodicScan,
            );
        }
    }

    /// Rebuild the ledger from a loaded save document. Must run before
    /// the first evaluation of the session.
    pub fn load(&mut self, save: SessionSave) {
        self.ledger = save.into_ledger();
        tracing::debug!(applied_keys = self.ledger.len(), "Ledger restored");
    }

    /// Snapshot the ledger for the session save document.
    pub fn to_save(&self) -> SessionSave {
        SessionSave::from_ledger(&self.ledger)
    }
}

impl GuestStatusHook for GratitudeComponent {
    fn on_guest_status_changed(&mut self, snapshot: &PawnSnapshot, change: &GuestStatusChange) {
        if self.settings.verbose_logging {
            tracing::debug!("Pawn detected: {}", snapshot.describe());
        }
        let _: Verdict = self.grant.execute(
            &mut self.ledger,
            snapshot,
            Some(change),
            TriggerSource::GuestStatusChanged,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        MockDefsPort, MockMoodPort, MockQuestLookupPort, MockWorldScanPort,
    };
    use crate::infrastructure::settings::GrantPolicy;
    use crate::use_cases::{REFUGEE_QUEST_DEF_NAME, TAKEN_IN_THOUGHT_DEF_NAME};
    use gratitude_domain::{
        AppliedKey, EffectDef, FactionId, GuestStatus, PawnId, QuestId, QuestRef,
    };

    const PLAYER: FactionId = FactionId::new(1);

    fn guest_snapshot(pawn: i32) -> PawnSnapshot {
        PawnSnapshot::new(PawnId::new(pawn), "Sasha", PLAYER)
            .with_guest_status(GuestStatus::Guest)
            .with_host_faction(PLAYER)
    }

    fn grant_with_eligible_ports(expected_grants: usize) -> Arc<GrantTakenIn> {
        let mut quests = MockQuestLookupPort::new();
        quests
            .expect_quest_for_pawn()
            .returning(|_| Some(QuestRef::new(Some(QuestId::new(42)), REFUGEE_QUEST_DEF_NAME)));
        let mut defs = MockDefsPort::new();
        defs.expect_effect_def()
            .returning(|_| Some(EffectDef::new(TAKEN_IN_THOUGHT_DEF_NAME, 30.0, 60_000)));
        let mut mood = MockMoodPort::new();
        mood.expect_has_memory_of().returning(|_, _| false);
        mood.expect_gain_memory()
            .times(expected_grants)
            .returning(|_, _| ());

        Arc::new(GrantTakenIn::new(
            Arc::new(quests),
            Arc::new(defs),
            Arc::new(mood),
            GrantPolicy::Corrected,
        ))
    }

    #[test]
    fn event_hook_grants_and_records_the_key() {
        let mut component =
            GratitudeComponent::new(grant_with_eligible_ports(1), ModSettings::default());

        let snapshot = guest_snapshot(7);
        let change = GuestStatusChange::new(Some(GuestStatus::Guest), Some(PLAYER));
        component.on_guest_status_changed(&snapshot, &change);

        assert!(component
            .ledger()
            .contains(&AppliedKey::new(PawnId::new(7), QuestId::new(42))));
    }

    #[test]
    fn sweep_only_runs_on_the_interval() {
        let mut component =
            GratitudeComponent::new(grant_with_eligible_ports(0), ModSettings::default());

        let mut world = MockWorldScanPort::new();
        world.expect_spawned_pawns().never();

        component.tick(1, &world);
        component.tick(249, &world);
        component.tick(251, &world);
    }

    #[test]
    fn sweep_evaluates_every_spawned_pawn() {
        let mut component =
            GratitudeComponent::new(grant_with_eligible_ports(2), ModSettings::default());

        let mut world = MockWorldScanPort::new();
        world
            .expect_spawned_pawns()
            .times(1)
            .returning(|| vec![guest_snapshot(7), guest_snapshot(9)]);

        component.tick(250, &world);
        assert_eq!(component.ledger().len(), 2);
    }

    #[test]
    fn event_then_sweep_grants_only_once() {
        let mut component =
            GratitudeComponent::new(grant_with_eligible_ports(1), ModSettings::default());

        let snapshot = guest_snapshot(7);
        let change = GuestStatusChange::default();
        component.on_guest_status_changed(&snapshot, &change);

        let mut world = MockWorldScanPort::new();
        world
            .expect_spawned_pawns()
            .returning(|| vec![guest_snapshot(7)]);
        component.tick(500, &world);

        assert_eq!(component.ledger().len(), 1);
    }

    #[test]
    fn save_and_load_keep_the_dedup_gate_closed() {
        let mut component =
            GratitudeComponent::new(grant_with_eligible_ports(1), ModSettings::default());
        component.on_guest_status_changed(&guest_snapshot(7), &GuestStatusChange::default());

        let save = component.to_save();

        // Fresh session, as after a game load.
        let mut restored =
            GratitudeComponent::new(grant_with_eligible_ports(0), ModSettings::default());
        restored.load(save);
        restored.on_guest_status_changed(&guest_snapshot(7), &GuestStatusChange::default());

        assert_eq!(restored.ledger().len(), 1);
    }
}
