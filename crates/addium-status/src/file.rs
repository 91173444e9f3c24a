// SPDX-FileCopyrightText: 2026 Addium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persisted status document format.
//!
//! The current format is a TOML document with repeated `[[addin]]` records:
//!
//! ```toml
//! [[addin]]
//! id = "TextEditor.Spell"
//! enabled = false
//!
//! [[addin]]
//! id = "TextEditor.Vim,0.3"
//! enabled = false
//! uninstalled = true
//! files = ["/opt/addins/vim/vim.so"]
//! ```
//!
//! An omitted `enabled` flag means enabled. For backward compatibility a
//! legacy document listing bare identifiers is still readable:
//!
//! ```toml
//! disabled = ["TextEditor.Spell", "TextEditor.Vim"]
//! ```
//!
//! each identifier meaning a family-scope disable. When the legacy
//! container is present it is parsed exclusively and `[[addin]]` records
//! in the same document are ignored. Writing always produces the current
//! format and never emits session overrides.

use std::path::Path;
use std::sync::Arc;

use addium_core::{AddiumError, FamilyResolver};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entry::AddinStatus;
use crate::store::StatusStore;

/// Top-level structure of a status document.
#[derive(Debug, Serialize, Deserialize)]
struct StatusDocument {
    /// Legacy container: bare identifiers, each a family-scope disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    disabled: Option<Vec<String>>,
    #[serde(default, rename = "addin")]
    addins: Vec<AddinRecord>,
}

/// One `[[addin]]` record.
#[derive(Debug, Serialize, Deserialize)]
struct AddinRecord {
    id: String,
    #[serde(default = "default_enabled")]
    enabled: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    uninstalled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    files: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

/// Parses a status document from TOML content.
pub fn parse_status_str(
    content: &str,
    family: Arc<dyn FamilyResolver>,
) -> Result<StatusStore, AddiumError> {
    let doc: StatusDocument = toml::from_str(content).map_err(|e| AddiumError::Format {
        message: format!("failed to parse status document: {e}"),
        source: Some(Box::new(e)),
    })?;

    let mut store = StatusStore::new(family);

    if let Some(ids) = doc.disabled {
        // Legacy mode is exclusive: any [[addin]] records are ignored.
        for id in ids {
            store.set_enabled(&id, false, true, false, false);
        }
        return Ok(store);
    }

    for record in doc.addins {
        let mut entry = AddinStatus::new(record.id, record.enabled);
        entry.uninstalled = record.uninstalled;
        entry.files = record.files;
        store.insert(entry);
    }
    Ok(store)
}

/// Loads and parses a status document from a file path.
///
/// A missing or unreadable file is an error here; callers that treat
/// absence as "no defaults" check for the file themselves.
pub fn parse_status_file(
    path: &Path,
    family: Arc<dyn FamilyResolver>,
) -> Result<StatusStore, AddiumError> {
    let content = std::fs::read_to_string(path).map_err(|e| AddiumError::Io {
        message: format!("failed to read status file '{}': {e}", path.display()),
        source: e,
    })?;
    let store = parse_status_str(&content, family)?;
    debug!(path = %path.display(), entries = store.len(), "status file loaded");
    Ok(store)
}

/// Writes the store's persisted state to `path` in the current format.
///
/// Session overrides are transient and never written. Records are sorted
/// by identifier so repeated writes of the same state produce identical
/// files. The write is plain blocking I/O with no atomicity guarantee; a
/// crash mid-write can truncate the file.
pub fn write_status_file(store: &StatusStore, path: &Path) -> Result<(), AddiumError> {
    let mut records: Vec<AddinRecord> = store
        .iter()
        .map(|entry| AddinRecord {
            id: entry.id.clone(),
            enabled: entry.config_enabled,
            uninstalled: entry.uninstalled,
            files: entry.files.clone(),
        })
        .collect();
    records.sort_by(|a, b| a.id.cmp(&b.id));

    let doc = StatusDocument {
        disabled: None,
        addins: records,
    };
    let content = toml::to_string_pretty(&doc).map_err(|e| AddiumError::Format {
        message: format!("failed to serialize status document: {e}"),
        source: Some(Box::new(e)),
    })?;
    std::fs::write(path, content).map_err(|e| AddiumError::Io {
        message: format!("failed to write status file '{}': {e}", path.display()),
        source: e,
    })?;
    debug!(path = %path.display(), entries = store.len(), "status file written");
    Ok(())
}
