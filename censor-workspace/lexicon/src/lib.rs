//! Locale dictionaries, severity tiers, and matching normalization for
//! censor-sensor. Everything here is data or pure functions; the engine
//! lives in `censor-core`.

pub mod assets;
pub mod dictionary;
pub mod error;
pub mod normalize;
pub mod registry;
pub mod types;

pub use assets::{builtin_dictionary, builtin_locale_text, load_dictionary_file, EN_LOCALE};
pub use dictionary::{Lexicon, LocaleDictionary};
pub use error::{LexiconError, Result};
pub use normalize::for_matching as normalize;
pub use registry::LocaleRegistry;
pub use types::Tier;
