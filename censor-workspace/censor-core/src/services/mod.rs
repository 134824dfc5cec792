// src/services/mod.rs

pub mod gate;       // per-tier enable flags
pub mod masking;    // replacement strategies
pub mod matcher;    // exact + substring lookups over a normalized phrase
pub mod redactor;   // rewrites the original text
pub mod resolver;   // locale dictionary + custom edits -> effective lexicon

// Public API
pub use gate::TierGate;
pub use masking::{FixedMask, Mask, DEFAULT_MASK};
pub use matcher::IshHit;
pub use redactor::Redaction;
pub use resolver::{effective_lexicon, CustomDictionary};
