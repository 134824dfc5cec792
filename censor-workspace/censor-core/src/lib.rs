//! censor-core: tier-gated profanity detection and redaction.
//!
//! [`CensorSensor`] is the entry point. Locale dictionaries, tiers, and the
//! normalizer come from the `censor-lexicon` crate and are re-exported here.

pub mod config;
pub mod engine;
pub mod services;

pub use config::CensorConfig;
pub use engine::CensorSensor;
pub use lexicon::{normalize, Lexicon, LexiconError, LocaleDictionary, LocaleRegistry, Tier};
pub use services::{FixedMask, Mask, Redaction, DEFAULT_MASK};
