//! Startup discovery diagnostics.
//!
//! Logs which quest script definitions look like the refugee-hospitality
//! quest, so a missing or renamed def is visible in the log before the
//! first evaluation ever runs.

use gratitude_domain::QuestDefInfo;

use crate::infrastructure::ports::DefsPort;

const REFUGEE_NAME_FRAGMENT: &str = "refugee";
const REFUGEE_LABEL_FRAGMENT: &str = "refugees seek shelter";

/// Log quest-def candidates by name and by label.
///
/// Returns the candidates so the startup caller can surface them in its
/// own UI if it wants to.
pub fn log_quest_def_discovery(defs: &dyn DefsPort) -> Vec<QuestDefInfo> {
    let all = defs.quest_defs();
    let mut candidates = Vec::new();

    for def in &all {
        if def.def_name.to_lowercase().contains(REFUGEE_NAME_FRAGMENT) {
            tracing::debug!(
                def_name = %def.def_name,
                label = def.label.as_deref().unwrap_or("<null>"),
                "Quest def candidate by name"
            );
            candidates.push(def.clone());
            continue;
        }

        let label_matches = def
            .label
            .as_deref()
            .is_some_and(|label| label.to_lowercase().contains(REFUGEE_LABEL_FRAGMENT));
        if label_matches {
            tracing::debug!(
                def_name = %def.def_name,
                label = def.label.as_deref().unwrap_or("<null>"),
                "Quest def candidate by label match"
            );
            candidates.push(def.clone());
        }
    }

    if candidates.is_empty() {
        tracing::debug!("No matching refugee quest defs found at startup");
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockDefsPort;

    #[test]
    fn finds_candidates_by_name_and_label() {
        let mut defs = MockDefsPort::new();
        defs.expect_quest_defs().returning(|| {
            vec![
                QuestDefInfo::new("Hospitality_Refugee", Some("Refugees seek shelter".into())),
                QuestDefInfo::new("ShuttleCrash", Some("Shuttle crash".into())),
                QuestDefInfo::new("Oddball", Some("Refugees Seek Shelter (modded)".into())),
            ]
        });

        let candidates = log_quest_def_discovery(&defs);
        let names: Vec<&str> = candidates.iter().map(|c| c.def_name.as_str()).collect();
        assert_eq!(names, vec!["Hospitality_Refugee", "Oddball"]);
    }

    #[test]
    fn no_candidates_is_not_an_error() {
        let mut defs = MockDefsPort::new();
        defs.expect_quest_defs().returning(Vec::new);
        assert!(log_quest_def_discovery(&defs).is_empty());
    }
}
