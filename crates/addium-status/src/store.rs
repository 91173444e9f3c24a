// SPDX-FileCopyrightText: 2026 Addium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory status store for add-in enable/disable and uninstall state.
//!
//! The store maps identifier strings to [`AddinStatus`] entries. A family
//! identifier and one or more exact identifiers of the same add-in may all
//! hold entries at the same time; resolution always consults the family
//! entry first, because a disabled family vetoes every version under it.

use std::collections::HashMap;
use std::sync::Arc;

use addium_core::FamilyResolver;
use tracing::debug;

use crate::entry::AddinStatus;

/// Mapping from add-in identifier to status entry.
///
/// Mutations are synchronous and unsynchronized; a host using the store
/// from several threads must serialize access itself.
pub struct StatusStore {
    entries: HashMap<String, AddinStatus>,
    family: Arc<dyn FamilyResolver>,
}

impl std::fmt::Debug for StatusStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusStore")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

impl StatusStore {
    /// Creates an empty store using the given family resolver.
    pub fn new(family: Arc<dyn FamilyResolver>) -> Self {
        Self {
            entries: HashMap::new(),
            family,
        }
    }

    /// Resolves the effective enable flag for `id`.
    ///
    /// A disabled family entry vetoes the whole family and short-circuits.
    /// Otherwise the identifier's own entry decides (a staged uninstall
    /// counts as disabled), and an identifier with no entry at all falls
    /// back to `default_value`: absence means "no explicit preference",
    /// never an error.
    pub fn is_enabled(&self, id: &str, default_value: bool) -> bool {
        let family = self.family.family_of(id);
        if let Some(entry) = self.entries.get(&family) {
            if !entry.enabled() {
                return false;
            }
        }

        match self.entries.get(id) {
            Some(entry) => entry.enabled() && !entry.uninstalled,
            None => default_value,
        }
    }

    /// Records an enable/disable preference for `id`.
    ///
    /// With `exact_version_match` the preference is keyed by `id` itself,
    /// otherwise by its family identifier. `session_only` sets the
    /// transient override and leaves the persisted flag alone; a persisted
    /// set clears any override. A freshly created entry starts from
    /// `default_value`, so a session-only change on an unknown identifier
    /// does not invent a persisted preference.
    ///
    /// Calls for an identifier staged for uninstall are silent no-ops.
    pub fn set_enabled(
        &mut self,
        id: &str,
        enabled: bool,
        default_value: bool,
        exact_version_match: bool,
        session_only: bool,
    ) {
        if self.is_registered_for_uninstall(id) {
            debug!(id = %id, "ignoring enable change for add-in staged for uninstall");
            return;
        }

        let key = if exact_version_match {
            id.to_string()
        } else {
            self.family.family_of(id)
        };
        self.apply_enabled(key, enabled, default_value, session_only);

        // Enabling one specific version must also lift the family-wide
        // veto, or the version would stay masked. Family identifiers map
        // to themselves, so one extra step always suffices.
        if enabled && exact_version_match {
            let family = self.family.family_of(id);
            self.apply_enabled(family, true, default_value, session_only);
        }
    }

    fn apply_enabled(&mut self, key: String, enabled: bool, default_value: bool, session_only: bool) {
        let entry = self
            .entries
            .entry(key)
            .or_insert_with_key(|k| AddinStatus::new(k.clone(), default_value));
        if session_only {
            entry.session_enabled = Some(enabled);
        } else {
            entry.config_enabled = enabled;
            entry.session_enabled = None;
        }
    }

    /// Stages `id` for removal: disables it, marks it uninstalled, and
    /// snapshots the files to delete when the uninstall completes.
    ///
    /// The entry is overwritten unconditionally; any prior enable state or
    /// session override for `id` is discarded. Once staged, the identifier
    /// rejects further [`set_enabled`](Self::set_enabled) calls until
    /// [`unregister_for_uninstall`](Self::unregister_for_uninstall).
    pub fn register_for_uninstall<I, S>(&mut self, id: &str, files: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entry = AddinStatus::new(id, false);
        entry.uninstalled = true;
        entry.files = files.into_iter().map(Into::into).collect();
        debug!(id = %id, files = entry.files.len(), "add-in staged for uninstall");
        self.entries.insert(id.to_string(), entry);
    }

    /// Removes the entry for `id` entirely, erasing both the uninstall
    /// staging and any enable/disable memory the entry held. The next
    /// [`is_enabled`](Self::is_enabled) falls back to its default.
    pub fn unregister_for_uninstall(&mut self, id: &str) {
        self.entries.remove(id);
    }

    /// True iff `id` has an entry staged for uninstall.
    pub fn is_registered_for_uninstall(&self, id: &str) -> bool {
        self.entries.get(id).is_some_and(|e| e.uninstalled)
    }

    /// True iff any entry is staged for uninstall.
    pub fn has_pending_uninstalls(&self) -> bool {
        self.entries.values().any(|e| e.uninstalled)
    }

    /// All entries staged for uninstall, in no particular order.
    pub fn pending_uninstalls(&self) -> Vec<&AddinStatus> {
        self.entries.values().filter(|e| e.uninstalled).collect()
    }

    /// The entry recorded for `id`, if any.
    pub fn get(&self, id: &str) -> Option<&AddinStatus> {
        self.entries.get(id)
    }

    /// Iterates over all entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &AddinStatus> {
        self.entries.values()
    }

    /// Returns the number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn insert(&mut self, entry: AddinStatus) {
        self.entries.insert(entry.id.clone(), entry);
    }
}

/// Merges two stores by key: entries from `overrides` replace entries in
/// `base`, and base entries without an override survive unchanged. Used to
/// layer the user-scope file over installation-wide defaults.
pub fn merge(mut base: StatusStore, overrides: StatusStore) -> StatusStore {
    for (key, entry) in overrides.entries {
        base.entries.insert(key, entry);
    }
    base
}
