// src/services/masking.rs
//! Masking strategies: how a matched term is rendered in cleaned text.

/// Literal used by the default strategy, whatever the matched word.
pub const DEFAULT_MASK: &str = "****";

/// Renders one matched term into its replacement text.
pub trait Mask: Send + Sync {
    fn mask(&self, word: &str) -> String;
}

/// Any `Fn(&str) -> String` closure is a strategy.
impl<F> Mask for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn mask(&self, word: &str) -> String {
        self(word)
    }
}

/// Replaces every match with the same text. `FixedMask::default()` is the
/// engine's default strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedMask(pub String);

impl FixedMask {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl Default for FixedMask {
    fn default() -> Self {
        Self(DEFAULT_MASK.to_string())
    }
}

impl Mask for FixedMask {
    fn mask(&self, _word: &str) -> String {
        self.0.clone()
    }
}
