// src/services/matcher.rs
//! Exact-token and substring ("ish") matching against an effective lexicon.
//!
//! Every function here expects `phrase` to be normalized already; the
//! engine owns normalization so that callers and the redactor agree on it.

use lexicon::{Lexicon, Tier};

use crate::services::gate::TierGate;

/// A lexicon key found inside a normalized phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IshHit<'a> {
    pub term: &'a str,
    pub tier: Tier,
}

/// True iff `token` is a lexicon key whose tier is enabled.
pub fn is_profane_token(token: &str, lexicon: &Lexicon, gate: &TierGate) -> bool {
    lexicon
        .get(token)
        .is_some_and(|tier| gate.is_enabled(*tier))
}

/// Exact mode: split on single spaces and test each token.
pub fn is_profane(phrase: &str, lexicon: &Lexicon, gate: &TierGate) -> bool {
    phrase
        .split(' ')
        .any(|token| is_profane_token(token, lexicon, gate))
}

/// Every enabled lexicon key that occurs in `phrase`, in lexicon order.
pub fn ish_hits<'a>(phrase: &str, lexicon: &'a Lexicon, gate: &TierGate) -> Vec<IshHit<'a>> {
    lexicon
        .iter()
        .filter(|(term, tier)| gate.is_enabled(**tier) && phrase.contains(term.as_str()))
        .map(|(term, tier)| IshHit { term, tier: *tier })
        .collect()
}

/// Substring mode: first enabled lexicon key contained in `phrase` wins.
pub fn is_profane_ish(phrase: &str, lexicon: &Lexicon, gate: &TierGate) -> bool {
    lexicon
        .iter()
        .any(|(term, tier)| gate.is_enabled(*tier) && phrase.contains(term.as_str()))
}

/// One copy of `original` per enabled lexicon key found in `phrase`.
///
/// Duplicates are intentional: the redactor runs one replace pass per copy.
pub fn profane_ish_words(
    phrase: &str,
    lexicon: &Lexicon,
    gate: &TierGate,
    original: &str,
) -> Vec<String> {
    ish_hits(phrase, lexicon, gate)
        .into_iter()
        .map(|_| original.to_string())
        .collect()
}
