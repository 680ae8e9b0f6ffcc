//! Gratitude engine crate.
//!
//! Wires the domain rules to the host engine through narrow collaborator
//! ports: the eligibility evaluator, the session component that reacts to
//! guest-status changes and runs the periodic sweep, settings, and the
//! save-document round-trip.

pub mod infrastructure;
pub mod session;
pub mod use_cases;

pub use infrastructure::diagnostics::log_quest_def_discovery;
pub use infrastructure::persistence::{SaveError, SessionSave};
pub use infrastructure::ports::{
    DefsPort, GuestStatusHook, MoodPort, QuestLookupPort, WorldScanPort,
};
pub use infrastructure::settings::{GrantPolicy, ModSettings};
pub use session::GratitudeComponent;
pub use use_cases::{GrantTakenIn, REFUGEE_QUEST_DEF_NAME, TAKEN_IN_THOUGHT_DEF_NAME};
