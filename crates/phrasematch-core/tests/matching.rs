//! End-to-end matching behaviour through the public API

use phrasematch_core::{FuzzyMatcher, Matcher, NOT_FOUND};
use pretty_assertions::assert_eq;

/// Helper to compile a single reference sentence
fn single(sentence: &str) -> FuzzyMatcher {
    FuzzyMatcher::new(Matcher::new([sentence]).unwrap())
}

fn trees_and_bananas() -> FuzzyMatcher {
    FuzzyMatcher::new(
        Matcher::new(["I love trees", "bananas are the best fruit", "banana"]).unwrap(),
    )
}

#[test]
fn test_should_match() {
    let cases = [
        ("banana", "banana"),
        ("banana", "banan"),
        ("banana", "banaana"),
        ("banana", "bananas"),
        ("banana", "i want a banana"),
        ("some thing", "thing some"),
        ("says pet", "i love food says the pet"),
        ("love i", "i love food says the pet"),
        ("bananen lekker", "ik vind bananen erg lekker"),
        ("bananen lekker", "bananen lekkere"),
        (
            "this is a very long sentence",
            "another sentence that contains the other sentence \"this is a very long sentence\" so there should be a match",
        ),
    ];

    for (reference, input) in cases {
        assert_eq!(
            single(reference).match_index(input),
            0,
            "expected {reference:?} to match {input:?}"
        );
    }
}

#[test]
fn test_should_not_match() {
    let cases = [
        ("somewhere over the rainbow", "somewhere"),
        ("banana", "apple"),
        ("bananen lekker", "bananen zijn vies"),
        ("bananen lekker", "bananen"),
        ("bananen lekker", "lekker"),
        ("bananen lekker", "compleet andere string"),
        // two errors in a four letter word
        ("tree", "trxy"),
    ];

    for (reference, input) in cases {
        assert_eq!(
            single(reference).match_index(input),
            NOT_FOUND,
            "expected {reference:?} not to match {input:?}"
        );
    }
}

#[test]
fn test_multi_sentence_precedence() {
    let mut matcher = trees_and_bananas();

    let cases = [
        (NOT_FOUND, "nothing"),
        (0, "i love trees"),
        (2, "bananas are the best fruit"),
        (2, "banana"),
        (0, "do you also love trees? i do."),
        (2, "on a sunday afternoon i like to eat a banana"),
    ];

    for (expected, input) in cases {
        assert_eq!(matcher.match_index(input), expected, "{input}");
    }
}

#[test]
fn test_idempotent_queries() {
    let mut matcher = trees_and_bananas();
    let inputs = [
        "bananas are the best fruit",
        "do you also love trees? i do.",
        "nothing",
    ];

    for input in inputs {
        let first = matcher.match_index(input);
        let second = matcher.match_index(input);
        assert_eq!(first, second, "{input}");
    }
}

#[test]
fn test_self_match() {
    let sentences = [
        "I love trees",
        "bananas are the best fruit",
        "ik vind bananen erg lekker",
        "The quick brown fox jumps over the lazy dog",
        "Het coördinatieteam vergadert woensdag",
        "naïve café owners prefer crème brûlée",
        "пример предложения на русском",
    ];

    for sentence in sentences {
        assert_eq!(single(sentence).match_index(sentence), 0, "{sentence}");
    }

    let mut all = FuzzyMatcher::new(Matcher::new(sentences).unwrap());
    for (idx, sentence) in sentences.iter().enumerate() {
        assert_eq!(all.find(sentence), Some(idx), "{sentence}");
    }
}

#[test]
fn test_diacritics_and_case() {
    assert_eq!(single("coordinator").match_index("coördinator"), 0);
    assert_eq!(single("coördinator").match_index("coordinator"), 0);
    assert_eq!(single("Crème Brûlée").match_index("CREME BRULEE"), 0);
    // decomposed accents: base letter followed by a combining mark
    assert_eq!(single("crème brûlée").match_index("cre\u{300}me bru\u{302}le\u{301}e"), 0);
}

#[test]
fn test_typographic_noise() {
    let mut matcher = single("says pet");
    assert_eq!(matcher.match_index("“says”\u{2009}the\u{2009}‹pet›"), NOT_FOUND);
    assert_eq!(matcher.match_index("“says” the ‹pet›"), 0);
}

#[test]
fn test_bytes_and_text_agree() {
    let mut matcher = trees_and_bananas();
    let inputs = [
        "nothing",
        "i love trees",
        "bananas are the best fruit",
        "do you also love trees? i do.",
        "coördinator",
    ];

    for input in inputs {
        let text = matcher.find(input);
        assert_eq!(matcher.find_bytes(input.as_bytes()), text, "{input}");
    }
}

#[test]
fn test_ties_go_to_lowest_registration() {
    let cases: [(&[&str], &str, Option<usize>); 4] = [
        // both complete on the final letter
        (&["love trees", "trees love"], "love trees", Some(0)),
        (&["trees love", "love trees"], "love trees", Some(0)),
        // the shorter word completes mid-word first
        (&["banan", "banana"], "banana x", Some(0)),
        (&["nnaab", "eaee", "nab"], "nabnnan", Some(0)),
    ];

    for (sentences, input, expected) in cases {
        let mut matcher = FuzzyMatcher::new(Matcher::new(sentences).unwrap());
        assert_eq!(matcher.find(input), expected, "{sentences:?} {input:?}");
    }
}
