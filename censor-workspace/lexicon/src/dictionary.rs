use serde::Deserialize;
use std::collections::BTreeMap;

use crate::error::{LexiconError, Result};
use crate::types::Tier;

/// Word -> tier mapping, as consumed by the matcher.
pub type Lexicon = BTreeMap<String, Tier>;

/// Immutable base dictionary for one locale.
///
/// Words are stored exactly as supplied; lookups happen against normalized
/// text, so entries are expected to be lowercase and free of obfuscation.
/// Empty words are dropped on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleDictionary {
    words: Lexicon,
}

#[derive(Debug, Deserialize)]
struct DictionaryFile {
    #[serde(default)]
    words: Lexicon,
}

impl LocaleDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the `[words]` table of a dictionary file. `locale` only labels errors.
    pub fn from_toml_str(locale: &str, text: &str) -> Result<Self> {
        let file: DictionaryFile = toml::from_str(text).map_err(|source| LexiconError::Dictionary {
            locale: locale.to_string(),
            source,
        })?;
        Ok(Self::from(file.words))
    }

    pub fn get(&self, word: &str) -> Option<Tier> {
        self.words.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Tier)> {
        self.words.iter().map(|(w, t)| (w.as_str(), *t))
    }

    pub fn words(&self) -> &Lexicon {
        &self.words
    }
}

impl From<Lexicon> for LocaleDictionary {
    fn from(mut words: Lexicon) -> Self {
        words.remove("");
        Self { words }
    }
}

impl<W: Into<String>> FromIterator<(W, Tier)> for LocaleDictionary {
    fn from_iter<I: IntoIterator<Item = (W, Tier)>>(iter: I) -> Self {
        let words: Lexicon = iter.into_iter().map(|(w, t)| (w.into(), t)).collect();
        Self::from(words)
    }
}
