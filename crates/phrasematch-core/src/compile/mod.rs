//! Reference sentence compiler
//!
//! Turns raw sentences into lowercase [`Word`]s, each carrying a
//! length-scaled tolerance, a transition table of acceptable next letters
//! and its fuzzy first letters.

mod sentence;
mod word;

pub use sentence::{Sentence, MAX_WORDS};
pub use word::{allowed_offset, Transition, Word, TRANSITION_WIDTH};

use crate::normalize::{classify, Unit};

/// Split `text` into normalized words, dropping fragments shorter than two letters
pub fn split_words(text: &str) -> Vec<Vec<char>> {
    let mut words = Vec::new();
    let mut current = Vec::new();

    for c in text.chars() {
        match classify(c) {
            Unit::Letter(letter) => current.push(letter),
            Unit::Skip => {}
            Unit::Separator => commit(&mut words, &mut current),
        }
    }
    commit(&mut words, &mut current);

    words
}

fn commit(words: &mut Vec<Vec<char>>, current: &mut Vec<char>) {
    if current.len() > 1 {
        words.push(std::mem::take(current));
    } else {
        current.clear();
    }
}
