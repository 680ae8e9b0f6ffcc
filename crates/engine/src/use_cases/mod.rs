mod grant_taken_in;

pub use grant_taken_in::{GrantTakenIn, REFUGEE_QUEST_DEF_NAME, TAKEN_IN_THOUGHT_DEF_NAME};
