//! Quest provenance reference and the applied-set dedup key.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::ids::{PawnId, QuestId};

/// Reference to the quest that brought a pawn into guest status.
///
/// Resolved best-effort by the quest-lookup collaborator. `id` may be
/// unresolvable on some engine versions; the dedup key then falls back to
/// a deterministic hash of the def name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestRef {
    pub id: Option<QuestId>,
    /// Quest-type identifier (the quest script's def name)
    pub def_name: String,
}

impl QuestRef {
    pub fn new(id: Option<QuestId>, def_name: impl Into<String>) -> Self {
        Self {
            id,
            def_name: def_name.into(),
        }
    }

    /// Numeric id used as the second half of the dedup key.
    ///
    /// When the engine exposes no id for the quest, a FNV-1a hash of the
    /// def name stands in. The key is persisted across sessions, so the
    /// fallback must be stable across process restarts; a seeded runtime
    /// hash would not be.
    pub fn dedup_id(&self) -> QuestId {
        match self.id {
            Some(id) => id,
            None => QuestId::new(fnv1a_32(self.def_name.as_bytes()) as i32),
        }
    }
}

/// 32-bit FNV-1a over a byte slice.
fn fnv1a_32(bytes: &[u8]) -> u32 {
    const OFFSET_BASIS: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;

    let mut hash = OFFSET_BASIS;
    for &b in bytes {
        hash ^= u32::from(b);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

/// Composite (pawn id, quest id) key, unique within the ledger.
///
/// Wire encoding is `"<pawnId>:<questId>"` and must round-trip exactly;
/// it is the persisted save-file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppliedKey {
    pub pawn: PawnId,
    pub quest: QuestId,
}

impl AppliedKey {
    pub fn new(pawn: PawnId, quest: QuestId) -> Self {
        Self { pawn, quest }
    }
}

impl fmt::Display for AppliedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.pawn, self.quest)
    }
}

impl std::str::FromStr for AppliedKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (pawn, quest) = s
            .split_once(':')
            .ok_or_else(|| DomainError::parse(format!("Applied key missing ':': {}", s)))?;
        let pawn: i32 = pawn
            .parse()
            .map_err(|_| DomainError::parse(format!("Bad pawn id in applied key: {}", s)))?;
        let quest: i32 = quest
            .parse()
            .map_err(|_| DomainError::parse(format!("Bad quest id in applied key: {}", s)))?;
        Ok(AppliedKey::new(PawnId::new(pawn), QuestId::new(quest)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_encoding_round_trips_exactly() {
        let key = AppliedKey::new(PawnId::new(7), QuestId::new(42));
        assert_eq!(key.to_string(), "7:42");
        assert_eq!("7:42".parse::<AppliedKey>().unwrap(), key);
    }

    #[test]
    fn negative_ids_survive_the_round_trip() {
        let key = AppliedKey::new(PawnId::new(7), QuestId::new(-1));
        assert_eq!(key.to_string(), "7:-1");
        assert_eq!("7:-1".parse::<AppliedKey>().unwrap(), key);
    }

    #[test]
    fn malformed_keys_fail_to_parse() {
        assert!("7".parse::<AppliedKey>().is_err());
        assert!("seven:42".parse::<AppliedKey>().is_err());
        assert!("7:".parse::<AppliedKey>().is_err());
    }

    #[test]
    fn resolved_id_wins_over_fallback() {
        let quest = QuestRef::new(Some(QuestId::new(42)), "Hospitality_Refugee");
        assert_eq!(quest.dedup_id(), QuestId::new(42));
    }

    #[test]
    fn fallback_id_is_deterministic() {
        let a = QuestRef::new(None, "Hospitality_Refugee");
        let b = QuestRef::new(None, "Hospitality_Refugee");
        assert_eq!(a.dedup_id(), b.dedup_id());

        let other = QuestRef::new(None, "Hospitality_Beggars");
        assert_ne!(a.dedup_id(), other.dedup_id());
    }
}
