// src/services/resolver.rs
//! Lexicon resolver: locale base dictionary + per-engine edits -> effective lexicon.

use std::collections::{BTreeMap, BTreeSet};

use lexicon::{Lexicon, LexiconError, LocaleRegistry, Tier};

/// Per-engine overlay on top of a locale dictionary.
///
/// `additions` override same-named locale entries. `removed` holds
/// tombstones: a tombstoned word is absent from the effective lexicon even
/// when the locale dictionary still lists it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomDictionary {
    additions: BTreeMap<String, Tier>,
    removed: BTreeSet<String>,
}

impl CustomDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or retier `word`, clearing any earlier removal. Empty words are
    /// ignored: they would occur in every fragment.
    pub fn add(&mut self, word: impl Into<String>, tier: Tier) {
        let word = word.into();
        if word.is_empty() {
            return;
        }
        self.removed.remove(&word);
        self.additions.insert(word, tier);
    }

    /// Drop any addition for `word` and tombstone it.
    pub fn remove(&mut self, word: impl Into<String>) {
        let word = word.into();
        self.additions.remove(&word);
        self.removed.insert(word);
    }

    pub fn get(&self, word: &str) -> Option<Tier> {
        self.additions.get(word).copied()
    }

    pub fn is_removed(&self, word: &str) -> bool {
        self.removed.contains(word)
    }

    pub fn additions(&self) -> &BTreeMap<String, Tier> {
        &self.additions
    }

    pub fn removed(&self) -> &BTreeSet<String> {
        &self.removed
    }
}

/// Build a fresh effective lexicon for `locale`.
///
/// # Errors
/// * `LexiconError::UnknownLocale` if `registry` has no dictionary for `locale`.
pub fn effective_lexicon(
    locale: &str,
    custom: &CustomDictionary,
    registry: &LocaleRegistry,
) -> Result<Lexicon, LexiconError> {
    let base = registry
        .lookup(locale)
        .ok_or_else(|| LexiconError::UnknownLocale(locale.to_string()))?;
    Ok(overlay(base.iter(), custom))
}

/// Merge `custom` over `base`; custom wins, tombstones are dropped.
pub fn overlay<'a>(
    base: impl IntoIterator<Item = (&'a str, Tier)>,
    custom: &CustomDictionary,
) -> Lexicon {
    let mut merged: Lexicon = base
        .into_iter()
        .filter(|(w, _)| !custom.is_removed(w))
        .map(|(w, t)| (w.to_string(), t))
        .collect();
    for (w, t) in &custom.additions {
        merged.insert(w.clone(), *t);
    }
    merged
}
