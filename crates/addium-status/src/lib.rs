// SPDX-FileCopyrightText: 2026 Addium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Add-in status tracking for the Addium host framework.
//!
//! Tracks which add-ins are enabled, disabled, or staged for uninstall,
//! persists that state in the user-scope status file, and layers it over
//! installation-wide defaults at load time. The host asks the store
//! questions like "is this add-in enabled?" and records preference
//! changes; discovery, loading, and manifest handling live elsewhere and
//! only call into this crate.
//!
//! Status resolution is two-level: a disabled family identifier vetoes
//! every exact version under it, while enabling a family merely lifts the
//! veto without forcing individual versions on. Session-only overrides
//! shadow the persisted flag for the current process run and are never
//! written out.

pub mod entry;
pub mod file;
pub mod loader;
pub mod store;

pub use entry::AddinStatus;
pub use file::{parse_status_file, parse_status_str, write_status_file};
pub use loader::{StatusLoader, INSTALL_STATUS_FILE};
pub use store::{merge, StatusStore};
