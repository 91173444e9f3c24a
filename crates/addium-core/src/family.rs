// SPDX-FileCopyrightText: 2026 Addium Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The host-supplied mapping from versioned add-in identifiers to their
//! version-agnostic family identifiers.
//!
//! An exact identifier names one specific version of an add-in (for example
//! `"TextEditor.Spell,1.2"`), while the family identifier groups every
//! version of that add-in (`"TextEditor.Spell"`). The status store never
//! derives families itself; the host injects a [`FamilyResolver`] at
//! construction time.

/// Maps a full (possibly versioned) add-in identifier to its family
/// identifier.
///
/// Implementations must be pure and must map family identifiers to
/// themselves: `family_of(family_of(id)) == family_of(id)`. The status
/// store relies on this fixpoint when it promotes a version-specific
/// enable to the family level.
pub trait FamilyResolver: Send + Sync {
    /// Returns the family identifier for `id`.
    fn family_of(&self, id: &str) -> String;
}

impl<F> FamilyResolver for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn family_of(&self, id: &str) -> String {
        self(id)
    }
}

/// The default identifier convention: `"Name,Version"`.
///
/// Everything before the first comma is the family identifier; an
/// identifier without a comma is already a family identifier and maps to
/// itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommaFamilyResolver;

impl FamilyResolver for CommaFamilyResolver {
    fn family_of(&self, id: &str) -> String {
        match id.split_once(',') {
            Some((name, _version)) => name.to_string(),
            None => id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versioned_id_maps_to_name() {
        let r = CommaFamilyResolver;
        assert_eq!(r.family_of("TextEditor.Spell,1.2"), "TextEditor.Spell");
    }

    #[test]
    fn family_id_is_a_fixpoint() {
        let r = CommaFamilyResolver;
        assert_eq!(r.family_of("TextEditor.Spell"), "TextEditor.Spell");
        let once = r.family_of("TextEditor.Spell,1.2");
        assert_eq!(r.family_of(&once), once);
    }

    #[test]
    fn only_first_comma_splits() {
        let r = CommaFamilyResolver;
        assert_eq!(r.family_of("A,1.0,beta"), "A");
    }

    #[test]
    fn closures_implement_family_resolver() {
        let upper = |id: &str| id.to_uppercase();
        assert_eq!(upper.family_of("spell"), "SPELL");
    }
}
