//! src/engine.rs
//! `CensorSensor`: the public facade. Owns locale selection, custom words,
//! tier gate, and masking strategy; composes resolver, matcher, and redactor.

use std::fmt;

use anyhow::{Context, Result};
use lexicon::{
    load_dictionary_file, normalize, Lexicon, LexiconError, LocaleDictionary, LocaleRegistry,
    Tier, EN_LOCALE,
};

use crate::config::CensorConfig;
use crate::services::{
    effective_lexicon, matcher, redactor, resolver, CustomDictionary, FixedMask, Mask, Redaction,
    TierGate,
};

pub struct CensorSensor {
    registry: LocaleRegistry,
    locale: String,
    custom: CustomDictionary,
    gate: TierGate,
    custom_mask: Option<Box<dyn Mask>>,
    default_mask: FixedMask,
}

impl CensorSensor {
    /// Engine over a fresh registry holding the built-in locales, with `"en"` active.
    pub fn new() -> Self {
        Self::build(LocaleRegistry::with_builtins(), EN_LOCALE.to_string())
    }

    /// Engine over a (possibly shared) registry.
    ///
    /// # Errors
    /// * `LexiconError::UnknownLocale` if `locale` is not registered.
    pub fn with_registry(registry: LocaleRegistry, locale: &str) -> Result<Self, LexiconError> {
        if !registry.contains(locale) {
            return Err(LexiconError::UnknownLocale(locale.to_string()));
        }
        Ok(Self::build(registry, locale.to_string()))
    }

    fn build(registry: LocaleRegistry, locale: String) -> Self {
        Self {
            registry,
            locale,
            custom: CustomDictionary::new(),
            gate: TierGate::new(),
            custom_mask: None,
            default_mask: FixedMask::default(),
        }
    }

    /// Build an engine from a loaded config: extra locales are registered in
    /// `registry`, then locale, word edits, disabled tiers, and mask apply.
    pub fn from_config(cfg: &CensorConfig, registry: LocaleRegistry) -> Result<Self> {
        for (id, path) in &cfg.locales {
            let dict = load_dictionary_file(id, path)?;
            registry.register(id.clone(), dict);
        }

        let mut engine = Self::with_registry(registry, &cfg.engine.locale)
            .with_context(|| format!("selecting locale `{}` from config", cfg.engine.locale))?;

        for tier in &cfg.engine.disabled_tiers {
            engine.disable_tier(*tier);
        }
        for (word, tier) in &cfg.words.add {
            engine.add_word(word.clone(), *tier);
        }
        for word in &cfg.words.remove {
            engine.remove_word(word.clone());
        }
        if let Some(text) = &cfg.masking.mask {
            engine.set_clean_function(FixedMask::new(text.clone()));
        }

        tracing::info!(
            locale = %engine.locale,
            added = cfg.words.add.len(),
            removed = cfg.words.remove.len(),
            disabled_tiers = ?engine.gate.disabled(),
            "censor engine configured"
        );
        Ok(engine)
    }

    // ---- locales ----

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Switch the active locale. Tier gate and custom words are kept.
    pub fn set_locale(&mut self, locale: &str) -> Result<(), LexiconError> {
        if !self.registry.contains(locale) {
            return Err(LexiconError::UnknownLocale(locale.to_string()));
        }
        tracing::debug!(from = %self.locale, to = locale, "switching locale");
        self.locale = locale.to_string();
        Ok(())
    }

    /// Register `dict` in the shared registry; every engine on it sees the change.
    pub fn add_locale(&self, locale: impl Into<String>, dict: LocaleDictionary) {
        self.registry.register(locale, dict);
    }

    // ---- tiers ----

    pub fn enable_tier(&mut self, tier: Tier) {
        tracing::debug!(%tier, "enabling tier");
        self.gate.enable(tier);
    }

    pub fn disable_tier(&mut self, tier: Tier) {
        tracing::debug!(%tier, "disabling tier");
        self.gate.disable(tier);
    }

    pub fn is_tier_enabled(&self, tier: Tier) -> bool {
        self.gate.is_enabled(tier)
    }

    pub fn tier_gate(&self) -> &TierGate {
        &self.gate
    }

    // ---- custom words ----

    /// Add `word` (stored as given; lookups are against normalized text, so
    /// pass it lowercase) and clear any earlier removal.
    pub fn add_word(&mut self, word: impl Into<String>, tier: Tier) {
        let word = word.into();
        tracing::debug!(word = %word, %tier, "adding custom word");
        self.custom.add(word, tier);
    }

    /// `add_word` with `Tier::UserAdded`.
    pub fn add_user_word(&mut self, word: impl Into<String>) {
        self.add_word(word, Tier::UserAdded);
    }

    /// Remove `word` from the custom additions and suppress it in the locale
    /// dictionary as well, until it is added again.
    pub fn remove_word(&mut self, word: impl Into<String>) {
        let word = word.into();
        tracing::debug!(word = %word, "removing word");
        self.custom.remove(word);
    }

    pub fn custom_dictionary(&self) -> &CustomDictionary {
        &self.custom
    }

    /// Fresh snapshot of locale words merged with custom edits.
    ///
    /// The active locale is validated on every switch, so the fallback only
    /// triggers if the registry was built without it; matching then runs on
    /// the custom additions alone.
    pub fn effective_lexicon(&self) -> Lexicon {
        match effective_lexicon(&self.locale, &self.custom, &self.registry) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                tracing::warn!(error = %e, "falling back to custom words only");
                resolver::overlay(std::iter::empty::<(&str, Tier)>(), &self.custom)
            }
        }
    }

    // ---- detection ----

    /// Exact mode: any space-separated token of the normalized phrase is an enabled word.
    pub fn is_profane(&self, phrase: &str) -> bool {
        matcher::is_profane(&normalize(phrase), &self.effective_lexicon(), &self.gate)
    }

    /// Substring mode: any enabled word occurs anywhere in the normalized phrase.
    pub fn is_profane_ish(&self, phrase: &str) -> bool {
        matcher::is_profane_ish(&normalize(phrase), &self.effective_lexicon(), &self.gate)
    }

    /// One copy of `original` per enabled word found in `phrase`.
    ///
    /// `phrase` is normalized here; normalization is idempotent, so passing an
    /// already-normalized fragment gives the same result.
    pub fn profane_ish_words(&self, phrase: &str, original: &str) -> Vec<String> {
        matcher::profane_ish_words(
            &normalize(phrase),
            &self.effective_lexicon(),
            &self.gate,
            original,
        )
    }

    /// Enabled words found in the normalized phrase, with their tiers.
    pub fn ish_hits(&self, phrase: &str) -> Vec<(String, Tier)> {
        let lexicon = self.effective_lexicon();
        matcher::ish_hits(&normalize(phrase), &lexicon, &self.gate)
            .into_iter()
            .map(|hit| (hit.term.to_string(), hit.tier))
            .collect()
    }

    /// The replacements `clean_profanity_ish` would perform, in order.
    pub fn redactions(&self, phrase: &str) -> Vec<Redaction> {
        redactor::plan_ish(phrase, &self.effective_lexicon(), &self.gate)
    }

    // ---- redaction ----

    pub fn clean_profanity(&self, phrase: &str) -> String {
        redactor::clean_exact(phrase, &self.effective_lexicon(), &self.gate, self.mask())
    }

    pub fn clean_profanity_ish(&self, phrase: &str) -> String {
        redactor::clean_ish(phrase, &self.effective_lexicon(), &self.gate, self.mask())
    }

    // ---- masking ----

    pub fn set_clean_function(&mut self, mask: impl Mask + 'static) {
        self.custom_mask = Some(Box::new(mask));
    }

    pub fn reset_clean_function(&mut self) {
        self.custom_mask = None;
    }

    pub fn has_custom_clean_function(&self) -> bool {
        self.custom_mask.is_some()
    }

    fn mask(&self) -> &dyn Mask {
        match &self.custom_mask {
            Some(mask) => mask.as_ref(),
            None => &self.default_mask,
        }
    }
}

impl Default for CensorSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CensorSensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CensorSensor")
            .field("locale", &self.locale)
            .field("custom", &self.custom)
            .field("gate", &self.gate)
            .field("custom_mask", &self.custom_mask.is_some())
            .finish()
    }
}
