// SPDX-FileCopyrightText: 2026 Addium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Two-tier status loading.
//!
//! An installation can ship a read-only status file next to the host's
//! install root to disable add-ins by default; the user's own status file
//! overrides it per identifier. The loader parses both and merges them
//! with the user's entries winning. Only the user-scope file is ever
//! written back.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use addium_core::{AddiumError, FamilyResolver};
use tracing::debug;

use crate::file::parse_status_file;
use crate::store::{merge, StatusStore};

/// Fixed filename of the installation-scope status file, resolved against
/// the directory the host supplies via
/// [`StatusLoader::with_install_dir`].
pub const INSTALL_STATUS_FILE: &str = "addins-status.toml";

/// Loads status stores from the user-scope file, layered over optional
/// installation-wide defaults.
///
/// The installation-scope path is injected explicitly by the host; the
/// loader never locates it from the running executable.
pub struct StatusLoader {
    family: Arc<dyn FamilyResolver>,
    install_path: Option<PathBuf>,
}

impl std::fmt::Debug for StatusLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusLoader")
            .field("install_path", &self.install_path)
            .finish_non_exhaustive()
    }
}

impl StatusLoader {
    /// Creates a loader with no installation-scope defaults.
    pub fn new(family: Arc<dyn FamilyResolver>) -> Self {
        Self {
            family,
            install_path: None,
        }
    }

    /// Sets the installation-scope status file path explicitly.
    pub fn with_install_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.install_path = Some(path.into());
        self
    }

    /// Looks for the installation-scope file under `dir` with its fixed
    /// name [`INSTALL_STATUS_FILE`].
    pub fn with_install_dir(self, dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(INSTALL_STATUS_FILE);
        self.with_install_path(path)
    }

    /// Loads the user-scope file at `user_path` merged over the
    /// installation-scope defaults.
    ///
    /// A missing or malformed user file is fatal and propagates. A missing
    /// installation file is expected and yields empty defaults; a present
    /// but malformed one propagates like the user file.
    pub fn load(&self, user_path: &Path) -> Result<StatusStore, AddiumError> {
        let user = parse_status_file(user_path, self.family.clone())?;

        let base = match &self.install_path {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "loading installation-scope status defaults");
                parse_status_file(path, self.family.clone())?
            }
            Some(path) => {
                debug!(path = %path.display(), "no installation-scope status file");
                StatusStore::new(self.family.clone())
            }
            None => StatusStore::new(self.family.clone()),
        };

        Ok(merge(base, user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addium_core::CommaFamilyResolver;

    fn resolver() -> Arc<dyn FamilyResolver> {
        Arc::new(CommaFamilyResolver)
    }

    #[test]
    fn load_without_install_scope() {
        let tmp = tempfile::tempdir().unwrap();
        let user = tmp.path().join("user.toml");
        std::fs::write(&user, "[[addin]]\nid = \"Spell\"\nenabled = false\n").unwrap();

        let store = StatusLoader::new(resolver()).load(&user).unwrap();
        assert!(!store.is_enabled("Spell", true));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn user_entries_override_install_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let install = tmp.path().join(INSTALL_STATUS_FILE);
        let user = tmp.path().join("user.toml");

        // Installation disables both; the user re-enables one.
        std::fs::write(
            &install,
            "[[addin]]\nid = \"A\"\nenabled = false\n\n[[addin]]\nid = \"B\"\nenabled = false\n",
        )
        .unwrap();
        std::fs::write(&user, "[[addin]]\nid = \"B\"\nenabled = true\n").unwrap();

        let store = StatusLoader::new(resolver())
            .with_install_dir(tmp.path())
            .load(&user)
            .unwrap();

        assert!(!store.is_enabled("A", true));
        assert!(store.is_enabled("B", true));
    }

    #[test]
    fn missing_install_file_is_not_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let user = tmp.path().join("user.toml");
        std::fs::write(&user, "").unwrap();

        let store = StatusLoader::new(resolver())
            .with_install_dir(tmp.path())
            .load(&user)
            .unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn missing_user_file_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let result = StatusLoader::new(resolver()).load(&tmp.path().join("absent.toml"));
        assert!(matches!(result, Err(AddiumError::Io { .. })));
    }

    #[test]
    fn malformed_user_file_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let user = tmp.path().join("user.toml");
        std::fs::write(&user, "not toml at all [").unwrap();

        let result = StatusLoader::new(resolver()).load(&user);
        assert!(matches!(result, Err(AddiumError::Format { .. })));
    }

    #[test]
    fn malformed_install_file_propagates() {
        let tmp = tempfile::tempdir().unwrap();
        let install = tmp.path().join(INSTALL_STATUS_FILE);
        let user = tmp.path().join("user.toml");
        std::fs::write(&install, "disabled = [unclosed").unwrap();
        std::fs::write(&user, "").unwrap();

        let result = StatusLoader::new(resolver())
            .with_install_dir(tmp.path())
            .load(&user);
        assert!(result.is_err());
    }

    #[test]
    fn legacy_user_file_overrides_install_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let install = tmp.path().join(INSTALL_STATUS_FILE);
        let user = tmp.path().join("user.toml");

        std::fs::write(&install, "[[addin]]\nid = \"X\"\nenabled = true\n").unwrap();
        std::fs::write(&user, "disabled = [\"X\"]\n").unwrap();

        let store = StatusLoader::new(resolver())
            .with_install_dir(tmp.path())
            .load(&user)
            .unwrap();
        assert!(!store.is_enabled("X", true));
        assert!(!store.is_enabled("X,1.0", true));
    }

    #[test]
    fn install_only_entries_survive_the_merge() {
        let tmp = tempfile::tempdir().unwrap();
        let install = tmp.path().join(INSTALL_STATUS_FILE);
        let user = tmp.path().join("user.toml");

        std::fs::write(&install, "[[addin]]\nid = \"A\"\nenabled = false\n").unwrap();
        std::fs::write(&user, "").unwrap();

        let store = StatusLoader::new(resolver())
            .with_install_dir(tmp.path())
            .load(&user)
            .unwrap();
        assert!(!store.is_enabled("A", true));
    }
}
