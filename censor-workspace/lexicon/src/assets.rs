use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use std::{fs, path::Path, sync::Arc};

use crate::dictionary::LocaleDictionary;

/// === Embedded locale dictionaries ===
pub const EN_LOCALE: &str = "en";
pub const EN_TOML: &str = include_str!("../assets/en.toml");

pub const BUILTIN_LOCALES: [&str; 1] = [EN_LOCALE];

static EN_DICTIONARY: Lazy<Arc<LocaleDictionary>> = Lazy::new(|| {
    Arc::new(
        LocaleDictionary::from_toml_str(EN_LOCALE, EN_TOML)
            .expect("embedded en dictionary must parse"),
    )
});

/// Return the embedded TOML for a known locale, if any.
pub fn builtin_locale_text(name: &str) -> Option<&'static str> {
    match name {
        EN_LOCALE => Some(EN_TOML),
        _ => None,
    }
}

/// Parsed embedded dictionary for `name`. Parsed once per process.
pub fn builtin_dictionary(name: &str) -> Option<Arc<LocaleDictionary>> {
    match name {
        EN_LOCALE => Some(Arc::clone(&EN_DICTIONARY)),
        _ => None,
    }
}

/// Read a dictionary file from disk. `locale` labels parse errors.
pub fn load_dictionary_file(locale: &str, path: &Path) -> Result<LocaleDictionary> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading dictionary for `{locale}` from {}", path.display()))?;
    LocaleDictionary::from_toml_str(locale, &text)
        .with_context(|| format!("parsing dictionary {}", path.display()))
}
