//! Applied-set ledger: the persisted dedup record.
//!
//! Owns the set of (pawn, quest) keys that have already received the
//! effect. The ordered backing vector is the persisted form (insertion
//! order is kept for storage-format stability, not semantics); the hash
//! set answers membership. Keys are never removed.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::value_objects::AppliedKey;

/// Persisted set of previously-processed (pawn, quest) keys.
///
/// Serializes as a plain ordered sequence of `"<pawnId>:<questId>"`
/// strings; deserializing an empty or absent sequence yields an empty
/// ledger, never an error. Unparseable entries are preserved verbatim in
/// the backing vector (they round-trip) and still count for membership as
/// raw strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AppliedLedger {
    keys: Vec<String>,
    lookup: HashSet<String>,
}

impl AppliedLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from its persisted key sequence.
    pub fn from_keys(keys: Vec<String>) -> Self {
        let lookup = keys.iter().cloned().collect();
        Self { keys, lookup }
    }

    /// Insert the key if absent. Returns true on first insertion, false
    /// (no mutation) when the key is already present.
    pub fn mark_if_absent(&mut self, key: &AppliedKey) -> bool {
        let encoded = key.to_string();
        if self.lookup.contains(&encoded) {
            return false;
        }
        self.lookup.insert(encoded.clone());
        self.keys.push(encoded);
        true
    }

    pub fn contains(&self, key: &AppliedKey) -> bool {
        self.lookup.contains(&key.to_string())
    }

    /// Ordered persisted view of the key strings.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl From<Vec<String>> for AppliedLedger {
    fn from(keys: Vec<String>) -> Self {
        Self::from_keys(keys)
    }
}

impl From<AppliedLedger> for Vec<String> {
    fn from(ledger: AppliedLedger) -> Self {
        ledger.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{PawnId, QuestId};

    fn key(pawn: i32, quest: i32) -> AppliedKey {
        AppliedKey::new(PawnId::new(pawn), QuestId::new(quest))
    }

    #[test]
    fn mark_if_absent_is_idempotent_after_first_success() {
        let mut ledger = AppliedLedger::new();
        let k = key(7, 42);

        assert!(ledger.mark_if_absent(&k));
        assert!(!ledger.mark_if_absent(&k));
        assert_eq!(ledger.len(), 1);
        assert!(ledger.contains(&k));
    }

    #[test]
    fn empty_ledger_contains_nothing() {
        let ledger = AppliedLedger::new();
        assert!(ledger.is_empty());
        assert!(!ledger.contains(&key(7, 42)));
    }

    #[test]
    fn from_empty_keys_yields_empty_ledger() {
        let ledger = AppliedLedger::from_keys(Vec::new());
        assert!(ledger.is_empty());
    }

    #[test]
    fn serde_round_trip_preserves_membership_and_order() {
        let mut ledger = AppliedLedger::new();
        ledger.mark_if_absent(&key(7, 42));
        ledger.mark_if_absent(&key(9, 42));
        ledger.mark_if_absent(&key(7, 43));

        let json = serde_json::to_string(&ledger).unwrap();
        assert_eq!(json, r#"["7:42","9:42","7:43"]"#);

        let restored: AppliedLedger = serde_json::from_str(&json).unwrap();
        assert!(restored.contains(&key(7, 42)));
        assert!(restored.contains(&key(9, 42)));
        assert!(restored.contains(&key(7, 43)));
        assert!(!restored.contains(&key(8, 42)));
        assert_eq!(restored.keys(), ledger.keys());
    }

    #[test]
    fn restored_ledger_still_deduplicates() {
        let mut ledger = AppliedLedger::from_keys(vec!["7:42".to_string()]);
        assert!(!ledger.mark_if_absent(&key(7, 42)));
        assert!(ledger.mark_if_absent(&key(8, 42)));
    }

    #[test]
    fn unparseable_persisted_entries_round_trip_verbatim() {
        let ledger = AppliedLedger::from_keys(vec!["garbage".to_string(), "7:42".to_string()]);
        let json = serde_json::to_string(&ledger).unwrap();
        assert_eq!(json, r#"["garbage","7:42"]"#);
        let restored: AppliedLedger = serde_json::from_str(&json).unwrap();
        assert!(restored.contains(&key(7, 42)));
    }
}
