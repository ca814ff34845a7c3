//! Path index: starting letter to candidate word entry points
//!
//! ASCII letters resolve through a flat array; multi-byte letters go through
//! a hash map that is only consulted when at least one path needs it.

use std::collections::HashMap;

use crate::compile::Sentence;

const ASCII_SLOTS: usize = 128;

/// One way into a word: start on `letter`, resume the transition table at `offset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Path {
    pub letter: char,
    pub sentence: usize,
    pub word: usize,
    /// Transition-table offset to resume from, also the errors already spent
    pub offset: usize,
    /// Input bytes that must still follow for the word to be reachable
    pub must_remaining_chars: usize,
}

/// Lookup from starting letter to the paths that begin with it
#[derive(Debug, Clone)]
pub struct PathIndex {
    ascii: [Vec<Path>; ASCII_SLOTS],
    wide: HashMap<char, Vec<Path>, ahash::RandomState>,
    len: usize,
}

impl PathIndex {
    /// Emit every path of every sentence, in registration order
    pub fn build(sentences: &[Sentence]) -> Self {
        let mut index = Self {
            ascii: std::array::from_fn(|_| Vec::new()),
            wide: HashMap::default(),
            len: 0,
        };

        for (sentence_idx, sentence) in sentences.iter().enumerate() {
            for (word_idx, word) in sentence.words().iter().enumerate() {
                for (offset, letter) in word.first_letters() {
                    index.insert(Path {
                        letter,
                        sentence: sentence_idx,
                        word: word_idx,
                        offset,
                        must_remaining_chars: word.must_remaining_chars(),
                    });
                }
            }
        }

        index
    }

    fn insert(&mut self, path: Path) {
        self.len += 1;
        if path.letter.is_ascii() {
            self.ascii[path.letter as usize].push(path);
        } else {
            self.wide.entry(path.letter).or_default().push(path);
        }
    }

    /// Paths starting on `letter`
    #[inline]
    pub fn paths(&self, letter: char) -> &[Path] {
        if letter.is_ascii() {
            return &self.ascii[letter as usize];
        }
        if !self.has_wide_paths() {
            return &[];
        }
        match self.wide.get(&letter) {
            Some(paths) => paths,
            None => &[],
        }
    }

    /// Whether any reference word starts on a multi-byte letter
    #[inline]
    pub fn has_wide_paths(&self) -> bool {
        !self.wide.is_empty()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
