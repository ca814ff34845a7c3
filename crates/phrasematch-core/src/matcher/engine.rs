//! Single-pass match engine
//!
//! The input is scanned once, left to right. At every word start the path
//! index seeds candidates; mid-word, each candidate walks its word's
//! transition table, spending its error budget on skipped or unexpected
//! letters. A word that completes sets its bit in the sentence accumulator,
//! and the first sentence whose accumulator equals its `index_sum` wins.

use super::Matcher;
use crate::compile::{Sentence, Word};
use crate::normalize::{classify, classify_ascii, Unit};

/// A word being matched, alive until the end of the current input word
#[derive(Debug, Clone, Copy)]
struct InProgress {
    sentence: usize,
    word: usize,
    offset: usize,
    skipped: usize,
}

enum Progress {
    Continue,
    Complete,
    Dropped,
}

impl InProgress {
    fn consume(&mut self, word: &Word, letter: char) -> Progress {
        let allowed = word.allowed_offset();
        let transition = &word.transitions()[self.offset];

        for (ahead, candidate) in transition.iter().enumerate() {
            let Some(candidate) = *candidate else {
                break;
            };
            if candidate != letter || self.skipped + ahead > allowed {
                continue;
            }

            self.offset += ahead + 1;
            self.skipped += ahead;
            return if self.offset >= word.transitions().len() {
                Progress::Complete
            } else {
                Progress::Continue
            };
        }

        // tolerate one inserted or substituted letter
        if self.skipped < allowed {
            self.skipped += 1;
            Progress::Continue
        } else {
            Progress::Dropped
        }
    }
}

/// Reusable per-query state.
///
/// Cleared at the start of every query and never shrunk, so once warmed up
/// queries run without allocating. A scratch is not tied to one matcher; it
/// is resized to whichever matcher uses it.
#[derive(Debug, Clone, Default)]
pub struct Scratch {
    live: Vec<InProgress>,
    found: Vec<u64>,
}

impl Scratch {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn for_sentences(sentences: usize) -> Self {
        Self {
            live: Vec::with_capacity(16),
            found: vec![0; sentences],
        }
    }

    fn reset(&mut self, sentences: usize) {
        self.live.clear();
        self.found.clear();
        self.found.resize(sentences, 0);
    }
}

/// Set the word's bit; returns the sentence index once all its bits are in
#[inline]
fn record(sentences: &[Sentence], found: &mut [u64], sentence: usize, bit: u64) -> Option<usize> {
    found[sentence] |= bit;
    (found[sentence] == sentences[sentence].index_sum()).then_some(sentence)
}

struct Scan<'a> {
    matcher: &'a Matcher,
    scratch: &'a mut Scratch,
    begin_word: bool,
    total_len: usize,
}

impl<'a> Scan<'a> {
    fn new(matcher: &'a Matcher, scratch: &'a mut Scratch, total_len: usize) -> Self {
        scratch.reset(matcher.sentences.len());
        Self {
            matcher,
            scratch,
            begin_word: true,
            total_len,
        }
    }

    /// Scan `text`, which sits at byte `base` of the whole input
    fn feed(&mut self, text: &str, base: usize) -> Option<usize> {
        let bytes = text.as_bytes();
        let mut pos = 0;

        while pos < bytes.len() {
            let byte = bytes[pos];
            if byte.is_ascii() {
                pos += 1;
                if let Some(hit) = self.step(classify_ascii(byte), base + pos) {
                    return Some(hit);
                }
                continue;
            }

            // mid-word with nothing alive: only an ASCII separator can change state
            if !self.begin_word && self.scratch.live.is_empty() {
                pos += 1;
                continue;
            }

            let Some(c) = text.get(pos..).and_then(|rest| rest.chars().next()) else {
                pos += 1;
                continue;
            };
            pos += c.len_utf8();
            if let Some(hit) = self.step(classify(c), base + pos) {
                return Some(hit);
            }
        }

        None
    }

    /// Handle one character ending at byte `end` of the whole input
    #[inline]
    fn step(&mut self, unit: Unit, end: usize) -> Option<usize> {
        match unit {
            Unit::Skip => None,
            Unit::Separator => {
                let hit = self.complete_tails();
                self.begin_word = true;
                hit
            }
            Unit::Letter(letter) if self.begin_word => {
                self.begin_word = false;
                self.start(letter, self.total_len - end);
                None
            }
            Unit::Letter(letter) => self.advance(letter),
        }
    }

    fn start(&mut self, letter: char, remaining: usize) {
        let sentences = &self.matcher.sentences;
        let Scratch { live, found } = &mut *self.scratch;

        for path in self.matcher.index().paths(letter) {
            if remaining < path.must_remaining_chars {
                continue;
            }
            let word = &sentences[path.sentence].words()[path.word];
            if found[path.sentence] & word.bit() != 0 {
                // already located during this query
                continue;
            }
            live.push(InProgress {
                sentence: path.sentence,
                word: path.word,
                offset: path.offset,
                skipped: path.offset,
            });
        }
    }

    fn advance(&mut self, letter: char) -> Option<usize> {
        let sentences = &self.matcher.sentences;
        let Scratch { live, found } = &mut *self.scratch;
        let mut hit = None;

        live.retain_mut(|entry| {
            if hit.is_some() {
                return true;
            }
            let word = &sentences[entry.sentence].words()[entry.word];
            match entry.consume(word, letter) {
                Progress::Continue => true,
                Progress::Complete => {
                    hit = record(sentences, found, entry.sentence, word.bit());
                    false
                }
                Progress::Dropped => false,
            }
        });

        hit
    }

    /// Word boundary: accept candidates whose unmatched tail fits the remaining budget
    fn complete_tails(&mut self) -> Option<usize> {
        let sentences = &self.matcher.sentences;
        let Scratch { live, found } = &mut *self.scratch;

        for entry in live.iter() {
            let word = &sentences[entry.sentence].words()[entry.word];
            if !word.tail_tolerated(entry.offset, entry.skipped) {
                continue;
            }
            if let Some(hit) = record(sentences, found, entry.sentence, word.bit()) {
                return Some(hit);
            }
        }

        live.clear();
        None
    }

    /// End of input, which may fall in the middle of a word
    fn finish(mut self) -> Option<usize> {
        self.complete_tails()
    }
}

impl Matcher {
    /// Find the first reference sentence whose words all occur in `text`.
    ///
    /// Returns its registration index, or `None` when no sentence matched.
    pub fn find(&self, text: &str, scratch: &mut Scratch) -> Option<usize> {
        let mut scan = Scan::new(self, scratch, text.len());
        match scan.feed(text, 0) {
            Some(hit) => Some(hit),
            None => scan.finish(),
        }
    }

    /// Same as [`Matcher::find`] over raw bytes.
    ///
    /// Malformed UTF-8 sequences are skipped like any other dropped character.
    pub fn find_bytes(&self, bytes: &[u8], scratch: &mut Scratch) -> Option<usize> {
        let mut scan = Scan::new(self, scratch, bytes.len());
        let mut base = 0;

        for chunk in bytes.utf8_chunks() {
            let valid = chunk.valid();
            if let Some(hit) = scan.feed(valid, base) {
                return Some(hit);
            }
            base += valid.len() + chunk.invalid().len();
        }

        scan.finish()
    }
}
