//! Session save document.
//!
//! The ledger's ordered key sequence rides inside the host's larger save
//! document under the fixed `appliedKeys` field. An absent or empty field
//! loads as an empty ledger; loading never fails on missing data, only on
//! a document that cannot be read at all.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use gratitude_domain::AppliedLedger;

/// Save-file errors with operation context.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Save read error: {0}")]
    Read(#[source] serde_json::Error),

    #[error("Save write error: {0}")]
    Write(#[source] serde_json::Error),
}

/// The slice of the session save document this mod owns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSave {
    #[serde(rename = "appliedKeys", default)]
    pub applied_keys: Vec<String>,
}

impl SessionSave {
    pub fn from_ledger(ledger: &AppliedLedger) -> Self {
        Self {
            applied_keys: ledger.keys().to_vec(),
        }
    }

    pub fn into_ledger(self) -> AppliedLedger {
        AppliedLedger::from_keys(self.applied_keys)
    }

    pub fn write_to(&self, writer: impl Write) -> Result<(), SaveError> {
        serde_json::to_writer(writer, self).map_err(SaveError::Write)
    }

    pub fn read_from(reader: impl Read) -> Result<Self, SaveError> {
        serde_json::from_reader(reader).map_err(SaveError::Read)
    }
}
