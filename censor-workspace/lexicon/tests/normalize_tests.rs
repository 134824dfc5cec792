use censor_lexicon::normalize;

#[test]
fn lowercases_before_substituting() {
    assert_eq!(normalize("HeLLo World"), "hello world");
}

#[test]
fn sequence_rules_run_before_single_digits() {
    // "0rz" must win over the bare 0 -> o rule.
    assert_eq!(normalize("h4x0rz"), "haxers");
    // "0t" likewise.
    assert_eq!(normalize("b0t"), "ber");
    assert_eq!(normalize("b00t"), "boer");
}

#[test]
fn single_character_substitutions() {
    assert_eq!(normalize("5h!7"), "shi7");
    assert_eq!(normalize("Sh1t happens"), "shit happens");
    assert_eq!(normalize("l33t"), "leet");
    assert_eq!(normalize("4ss"), "ass");
    assert_eq!(normalize("c00l"), "cool");
}

#[test]
fn upper_case_xx_is_lowercased_first() {
    // Lowercasing runs first, so the "xX" rule never sees an upper-case X.
    assert_eq!(normalize("suxXor"), "suxxor");
}

#[test]
fn substitutions_ignore_word_boundaries() {
    assert_eq!(normalize("route 53 is 4 me"), "route se is a me");
}

#[test]
fn empty_and_whitespace_pass_through() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("  \t "), "  \t ");
}

#[test]
fn normalization_is_idempotent() {
    let samples = [
        "Sh1t happens",
        "h4x0rz 0wn3d y0u!",
        "0t0rz",
        "PLAIN text",
        "MiXeD xX 5!3",
        "ÄÖÜ 000",
    ];
    for s in samples {
        let once = normalize(s);
        assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
    }
}
