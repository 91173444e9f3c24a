// SPDX-FileCopyrightText: 2026 Addium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-identifier status record held by the status store.

/// Status of a single add-in identifier, either family-scope or
/// exact-version-scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddinStatus {
    /// The identifier this entry is keyed by.
    pub id: String,
    /// Durable enable flag, written to the user-scope status file.
    pub config_enabled: bool,
    /// Transient per-session override. Takes precedence over
    /// `config_enabled` while present and is never persisted.
    pub session_enabled: Option<bool>,
    /// True once the add-in has been staged for removal.
    pub uninstalled: bool,
    /// File paths to delete when the uninstall completes. Order is
    /// preserved; meaningful only while `uninstalled` is true.
    pub files: Vec<String>,
}

impl AddinStatus {
    /// Creates a fresh entry with the given baseline enable flag, no
    /// session override, and no pending uninstall.
    pub fn new(id: impl Into<String>, config_enabled: bool) -> Self {
        Self {
            id: id.into(),
            config_enabled,
            session_enabled: None,
            uninstalled: false,
            files: Vec::new(),
        }
    }

    /// The enable flag callers observe: the session override when one is
    /// set, otherwise the persisted flag.
    pub fn enabled(&self) -> bool {
        self.session_enabled.unwrap_or(self.config_enabled)
    }
}
