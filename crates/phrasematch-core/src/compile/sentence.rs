//! Sentence compilation

use super::split_words;
use super::word::Word;
use crate::error::{CompileError, CompileResult};

/// Hard ceiling on usable words per sentence, one bit each in a `u64`
pub const MAX_WORDS: usize = u64::BITS as usize;

/// A compiled reference sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    words: Vec<Word>,
    index_sum: u64,
    input_position: usize,
    letter_len: usize,
}

impl Sentence {
    /// Compile the sentence found at `input_position` of the caller's list.
    ///
    /// Returns `Ok(None)` when nothing usable remains after tokenization.
    pub fn compile(input_position: usize, text: &str) -> CompileResult<Option<Self>> {
        let fragments = split_words(text);
        if fragments.is_empty() {
            return Ok(None);
        }
        if fragments.len() > MAX_WORDS {
            return Err(CompileError::TooManyWords {
                position: input_position,
                words: fragments.len(),
                limit: MAX_WORDS,
            });
        }

        let words: Vec<Word> = fragments
            .into_iter()
            .enumerate()
            .map(|(idx, letters)| Word::new(letters, 1 << idx))
            .collect();

        let index_sum = words.iter().fold(0, |sum, word| sum | word.bit());
        // letters plus one separator between neighbouring words
        let letter_len = words.iter().map(Word::len).sum::<usize>() + words.len() - 1;

        Ok(Some(Self {
            words,
            index_sum,
            input_position,
            letter_len,
        }))
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// OR of every word bit; a query found the sentence once its bits add up to this
    pub fn index_sum(&self) -> u64 {
        self.index_sum
    }

    /// Position of this sentence in the list handed to the matcher
    pub fn input_position(&self) -> usize {
        self.input_position
    }

    /// Length of the normalized sentence, words joined by single spaces
    pub fn letter_len(&self) -> usize {
        self.letter_len
    }

    /// The normalized sentence, words joined by single spaces
    pub fn text(&self) -> String {
        let mut text = String::with_capacity(self.letter_len);
        for (idx, word) in self.words.iter().enumerate() {
            if idx > 0 {
                text.push(' ');
            }
            text.extend(word.letters());
        }
        text
    }
}
