//! Mod settings.
//!
//! Settings carry serde derives because they are stored with the rest of
//! the host's config surface and may be edited by hand; unknown or absent
//! fields fall back to defaults.

use serde::{Deserialize, Serialize};

/// Ordering of the ledger commit relative to the late verification gates
/// (effect-def lookup, mood-tracker reachability, duplicate-memory check).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GrantPolicy {
    /// Commit the key only immediately before the memory grant, so a
    /// missing effect def never poisons the key against a future retry.
    #[default]
    Corrected,
    /// Historical behavior: mark the key before the late gates. If those
    /// fail, the key stays marked and the effect is never granted for
    /// that (pawn, quest) pair for the rest of the session.
    LegacyMarkBeforeVerify,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModSettings {
    /// Gates the per-pawn detection logging and startup diagnostics
    #[serde(default = "default_verbose_logging")]
    pub verbose_logging: bool,

    #[serde(default)]
    pub grant_policy: GrantPolicy,

    /// Sweep period, in simulation ticks
    #[serde(default = "default_sweep_interval_ticks")]
    pub sweep_interval_ticks: u64,
}

fn default_verbose_logging() -> bool {
    true
}

fn default_sweep_interval_ticks() -> u64 {
    250
}

impl Default for ModSettings {
    fn default() -> Self {
        Self {
            verbose_logging: default_verbose_logging(),
            grant_policy: GrantPolicy::default(),
            sweep_interval_ticks: default_sweep_interval_ticks(),
        }
    }
}
