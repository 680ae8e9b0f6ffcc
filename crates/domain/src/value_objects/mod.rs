mod effect;
mod event;
mod guest_status;
mod quest;
mod snapshot;
mod verdict;

pub use effect::{EffectDef, QuestDefInfo};
pub use event::{GuestStatusChange, TriggerSource};
pub use guest_status::GuestStatus;
pub use quest::{AppliedKey, QuestRef};
pub use snapshot::{CaptivityFlags, PawnSnapshot};
pub use verdict::{SkipReason, Verdict};
