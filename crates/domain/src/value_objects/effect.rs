//! Mental-effect definition, as resolved from the content registry.

use serde::{Deserialize, Serialize};

/// A mental-effect ("thought") definition looked up by def name.
///
/// `mood_offset` and `duration_ticks` are content metadata carried along
/// for logging on a successful grant; the core never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectDef {
    pub def_name: String,
    pub mood_offset: f32,
    pub duration_ticks: i32,
}

impl EffectDef {
    pub fn new(def_name: impl Into<String>, mood_offset: f32, duration_ticks: i32) -> Self {
        Self {
            def_name: def_name.into(),
            mood_offset,
            duration_ticks,
        }
    }
}

/// Summary of a quest script definition, used only by the startup
/// discovery diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestDefInfo {
    pub def_name: String,
    pub label: Option<String>,
}

impl QuestDefInfo {
    pub fn new(def_name: impl Into<String>, label: Option<String>) -> Self {
        Self {
            def_name: def_name.into(),
            label,
        }
    }
}
