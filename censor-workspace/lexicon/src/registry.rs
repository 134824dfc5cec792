use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::assets;
use crate::dictionary::LocaleDictionary;

/// Shared table of locale dictionaries.
///
/// Cloning the handle shares the table: a locale registered through one
/// clone is visible to every engine holding another. Dictionaries are handed
/// out as `Arc`s so matching never runs under the lock.
#[derive(Debug, Clone, Default)]
pub struct LocaleRegistry {
    inner: Arc<RwLock<HashMap<String, Arc<LocaleDictionary>>>>,
}

impl LocaleRegistry {
    /// Empty registry; no locale is available until one is registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with every embedded locale (currently `"en"`).
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        for name in assets::BUILTIN_LOCALES {
            if let Some(dict) = assets::builtin_dictionary(name) {
                registry.insert_shared(name, dict);
            }
        }
        registry
    }

    /// Store `dict` under `locale`, silently replacing any previous entry.
    pub fn register(&self, locale: impl Into<String>, dict: LocaleDictionary) {
        self.insert_shared(locale, Arc::new(dict));
    }

    fn insert_shared(&self, locale: impl Into<String>, dict: Arc<LocaleDictionary>) {
        let locale = locale.into();
        tracing::debug!(locale = %locale, words = dict.len(), "registering locale");
        if self.inner.write().insert(locale.clone(), dict).is_some() {
            tracing::debug!(locale = %locale, "replaced existing locale");
        }
    }

    pub fn lookup(&self, locale: &str) -> Option<Arc<LocaleDictionary>> {
        self.inner.read().get(locale).cloned()
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.inner.read().contains_key(locale)
    }

    /// Registered locale ids, sorted.
    pub fn locales(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.inner.read().keys().cloned().collect();
        ids.sort();
        ids
    }
}
