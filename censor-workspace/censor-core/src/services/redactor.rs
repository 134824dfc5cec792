// src/services/redactor.rs
//! Redactor: rewrites matched spans of the original (non-normalized) text.

use serde::Serialize;

use lexicon::{normalize, Lexicon, Tier};

use crate::services::gate::TierGate;
use crate::services::masking::Mask;
use crate::services::matcher;

/// One planned substring-mode replacement: `fragment` (original case, as
/// split from the input) is masked because `term` was found in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redaction {
    pub fragment: String,
    pub term: String,
    pub tier: Tier,
}

/// Exact mode. Tokens are only lowercased (not normalized) before lookup;
/// the mask receives the original-case token.
pub fn clean_exact(phrase: &str, lexicon: &Lexicon, gate: &TierGate, mask: &dyn Mask) -> String {
    phrase
        .split(' ')
        .map(|token| {
            if matcher::is_profane_token(&token.to_lowercase(), lexicon, gate) {
                mask.mask(token)
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Substring-mode plan: for each space-separated fragment of `phrase`, one
/// entry per enabled lexicon key found in the normalized fragment.
pub fn plan_ish(phrase: &str, lexicon: &Lexicon, gate: &TierGate) -> Vec<Redaction> {
    let mut plan = Vec::new();
    for fragment in phrase.split(' ').filter(|f| !f.is_empty()) {
        let normalized = normalize(fragment);
        for hit in matcher::ish_hits(&normalized, lexicon, gate) {
            plan.push(Redaction {
                fragment: fragment.to_string(),
                term: hit.term.to_string(),
                tier: hit.tier,
            });
        }
    }
    plan
}

/// Fold `plan` over `phrase`: each entry masks every case-insensitive
/// occurrence of its fragment in the running text, so later entries see
/// earlier replacements.
pub fn apply_plan(phrase: &str, plan: &[Redaction], mask: &dyn Mask) -> String {
    let mut out = phrase.to_string();
    for entry in plan {
        let replacement = mask.mask(&entry.fragment);
        out = replace_all_ci(&out, &entry.fragment, &replacement);
    }
    out
}

/// Substring mode end to end: plan, then fold.
pub fn clean_ish(phrase: &str, lexicon: &Lexicon, gate: &TierGate, mask: &dyn Mask) -> String {
    let plan = plan_ish(phrase, lexicon, gate);
    tracing::debug!(replacements = plan.len(), "cleaning phrase");
    apply_plan(phrase, &plan, mask)
}

/// Replace every case-insensitive occurrence of `needle` in `haystack`,
/// left to right and without overlaps. The replacement is inserted as is.
pub fn replace_all_ci(haystack: &str, needle: &str, replacement: &str) -> String {
    let (pattern, _) = fold_with_offsets(needle);
    if pattern.is_empty() {
        return haystack.to_string();
    }
    let (folded, offsets) = fold_with_offsets(haystack);

    let mut out = String::with_capacity(haystack.len());
    let mut copied = 0usize;
    let mut from = 0usize;
    while let Some(pos) = folded[from..].find(&pattern) {
        let start = from + pos;
        let end = start + pattern.len();
        match (offsets[start], offsets[end]) {
            (Some(s), Some(e)) => {
                out.push_str(&haystack[copied..s]);
                out.push_str(replacement);
                copied = e;
                from = end;
            }
            // Match begins or ends inside one character's lowercase expansion.
            _ => from = start + folded[start..].chars().next().map_or(1, char::len_utf8),
        }
    }
    out.push_str(&haystack[copied..]);
    out
}

/// Lowercase `s` char by char. `offsets[i]` is the byte offset in `s` of the
/// character whose expansion starts at folded byte `i`, `None` inside an
/// expansion; the final slot maps the end of the folded text to `s.len()`.
fn fold_with_offsets(s: &str) -> (String, Vec<Option<usize>>) {
    let mut folded = String::with_capacity(s.len());
    let mut offsets = Vec::with_capacity(s.len() + 1);
    for (at, ch) in s.char_indices() {
        offsets.push(Some(at));
        folded.extend(ch.to_lowercase());
        offsets.resize(folded.len(), None);
    }
    offsets.push(Some(s.len()));
    (folded, offsets)
}
