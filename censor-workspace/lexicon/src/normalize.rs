//! Text normalization used before any dictionary lookup.
//!
//! Policy:
//! - Unicode-aware lowercasing of the whole input.
//! - Fixed, ordered leetspeak substitutions applied anywhere in the string.
//!
//! There is no word-boundary awareness: a clean word containing `3` or `5`
//! is rewritten too. Keep this logic single-sourced so matching and
//! redaction never disagree.

/// Multi-character rewrites, applied in order after lowercasing.
///
/// `"xX"` sits here for parity with the published substitution table; after
/// lowercasing an upper-case `X` cannot remain, so it never fires.
const SEQUENCES: [(&str, &str); 3] = [("0rz", "ers"), ("0t", "er"), ("xX", "ck")];

/// Single-character rewrites, applied in order after [`SEQUENCES`].
const CHARS: [(char, char); 6] = [
    ('0', 'o'),
    ('!', 'i'),
    ('1', 'i'),
    ('3', 'e'),
    ('4', 'a'),
    ('5', 's'),
];

/// Canonicalize `s` for matching.
pub fn for_matching(s: &str) -> String {
    let mut out = s.to_lowercase();
    for (from, to) in SEQUENCES {
        if out.contains(from) {
            out = out.replace(from, to);
        }
    }
    for (from, to) in CHARS {
        if out.contains(from) {
            out = out.replace(from, &to.to_string());
        }
    }
    out
}
