// SPDX-FileCopyrightText: 2026 Addium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Addium add-in host framework.
//!
//! This crate provides the error type shared across the Addium workspace and
//! the [`FamilyResolver`] seam through which the host supplies its mapping
//! from versioned add-in identifiers to version-agnostic family identifiers.

pub mod error;
pub mod family;

// Re-export key items at crate root for ergonomic imports.
pub use error::AddiumError;
pub use family::{CommaFamilyResolver, FamilyResolver};
