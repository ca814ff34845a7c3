//! Matcher - compiled reference sentences and the query entry points

mod engine;

pub use engine::Scratch;

use std::hash::{Hash, Hasher};

use ahash::AHasher;
use serde::Serialize;
use tracing::debug;

use crate::compile::Sentence;
use crate::config::{EmptySentencePolicy, MatcherConfig};
use crate::error::{CompileError, CompileResult};
use crate::index::PathIndex;

/// Returned by [`Matcher::match_index`] when no sentence matched
pub const NOT_FOUND: isize = -1;

/// Compilation summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatcherStats {
    pub sentences: usize,
    pub dropped: usize,
    pub words: usize,
    pub paths: usize,
    pub has_wide_paths: bool,
    pub fingerprint: String,
}

/// A set of compiled reference sentences.
///
/// Immutable once built and safe to share between threads. All per-query
/// state lives in a [`Scratch`] supplied by the caller, so a single matcher
/// can serve any number of concurrent queries as long as each one brings its
/// own scratch.
#[derive(Debug, Clone)]
pub struct Matcher {
    sentences: Vec<Sentence>,
    index: PathIndex,
    /// Registration index by input position, `None` where the sentence was dropped
    registrations: Vec<Option<usize>>,
    dropped: Vec<usize>,
    fingerprint: u64,
    config: MatcherConfig,
}

impl Matcher {
    /// Compile `sentences` with the default configuration.
    ///
    /// This is comparatively slow; build once and reuse the matcher.
    pub fn new<I, S>(sentences: I) -> CompileResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(sentences, MatcherConfig::default())
    }

    /// Compile `sentences` with a custom configuration
    pub fn with_config<I, S>(sentences: I, config: MatcherConfig) -> CompileResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        let mut registrations = Vec::new();
        let mut dropped = Vec::new();

        for (position, text) in sentences.into_iter().enumerate() {
            match Sentence::compile(position, text.as_ref())? {
                Some(sentence) => {
                    registrations.push(Some(compiled.len()));
                    compiled.push(sentence);
                }
                None if config.empty_sentences == EmptySentencePolicy::Reject => {
                    return Err(CompileError::EmptySentence { position });
                }
                None => {
                    debug!(position, "dropping sentence without usable words");
                    registrations.push(None);
                    dropped.push(position);
                }
            }
        }

        let index = PathIndex::build(&compiled);
        let fingerprint = compute_fingerprint(&compiled);

        debug!(
            sentences = compiled.len(),
            dropped = dropped.len(),
            paths = index.len(),
            wide = index.has_wide_paths(),
            "compiled matcher"
        );

        Ok(Self {
            sentences: compiled,
            index,
            registrations,
            dropped,
            fingerprint,
            config,
        })
    }

    /// A scratch context sized for this matcher
    pub fn scratch(&self) -> Scratch {
        Scratch::for_sentences(self.sentences.len())
    }

    /// Like [`Matcher::find`], but returns [`NOT_FOUND`] instead of `None`
    pub fn match_index(&self, text: &str, scratch: &mut Scratch) -> isize {
        to_index(self.find(text, scratch))
    }

    /// Compiled sentences in registration order
    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn sentence(&self, registration: usize) -> Option<&Sentence> {
        self.sentences.get(registration)
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Registration index of the sentence handed in at `input_position`
    pub fn registration_of(&self, input_position: usize) -> Option<usize> {
        self.registrations.get(input_position).copied().flatten()
    }

    /// Input position of the sentence registered at `registration`
    pub fn input_position(&self, registration: usize) -> Option<usize> {
        self.sentences.get(registration).map(Sentence::input_position)
    }

    /// Input positions of sentences left out for lack of usable words
    pub fn dropped(&self) -> &[usize] {
        &self.dropped
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Digest of the compiled word lists for change detection
    pub fn fingerprint(&self) -> String {
        format!("{:016x}", self.fingerprint)
    }

    pub fn stats(&self) -> MatcherStats {
        MatcherStats {
            sentences: self.sentences.len(),
            dropped: self.dropped.len(),
            words: self.sentences.iter().map(|s| s.words().len()).sum(),
            paths: self.index.len(),
            has_wide_paths: self.index.has_wide_paths(),
            fingerprint: self.fingerprint(),
        }
    }

    pub(crate) fn index(&self) -> &PathIndex {
        &self.index
    }
}

/// Convert an optional registration index into the `-1` sentinel form
pub fn to_index(found: Option<usize>) -> isize {
    found.map_or(NOT_FOUND, |idx| idx as isize)
}

fn compute_fingerprint(sentences: &[Sentence]) -> u64 {
    let mut hasher = AHasher::default();
    for sentence in sentences {
        sentence.words().len().hash(&mut hasher);
        for word in sentence.words() {
            word.letters().hash(&mut hasher);
        }
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_registration_skips_dropped_sentences() {
        let matcher = Matcher::new(["a", "bananas zijn lekker", "?", "love trees"]).unwrap();

        assert_eq!(matcher.len(), 2);
        assert_eq!(matcher.dropped(), &[0, 2]);
        assert_eq!(matcher.registration_of(0), None);
        assert_eq!(matcher.registration_of(1), Some(0));
        assert_eq!(matcher.registration_of(3), Some(1));
        assert_eq!(matcher.registration_of(9), None);
        assert_eq!(matcher.input_position(1), Some(3));
        assert_eq!(matcher.input_position(2), None);
    }

    #[test]
    fn test_reject_policy() {
        let config = MatcherConfig {
            empty_sentences: EmptySentencePolicy::Reject,
            ..Default::default()
        };
        let err = Matcher::with_config(["love trees", "x y"], config).unwrap_err();
        assert_eq!(err, CompileError::EmptySentence { position: 1 });
    }

    #[test]
    fn test_stats() {
        let matcher = Matcher::new(["I love trees", "", "banana"]).unwrap();
        let stats = matcher.stats();

        assert_eq!(stats.sentences, 2);
        assert_eq!(stats.dropped, 1);
        assert_eq!(stats.words, 3);
        // love (1) + trees (2) + banana (2)
        assert_eq!(stats.paths, 5);
        assert!(!stats.has_wide_paths);
        assert_eq!(stats.fingerprint.len(), 16);
    }

    #[test]
    fn test_fingerprint_tracks_compiled_words() {
        let a = Matcher::new(["love trees"]).unwrap();
        let b = Matcher::new(["LOVE, trees!"]).unwrap();
        let c = Matcher::new(["love", "trees"]).unwrap();
        let d = Matcher::new(["love bees"]).unwrap();

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
        assert_ne!(a.fingerprint(), d.fingerprint());
    }

    #[test]
    fn test_stats_serialize() {
        let matcher = Matcher::new(["banana"]).unwrap();
        let json = serde_json::to_value(matcher.stats()).unwrap();
        assert_eq!(json["sentences"], 1);
        assert_eq!(json["paths"], 2);
    }

    #[test]
    fn test_to_index() {
        assert_eq!(to_index(None), NOT_FOUND);
        assert_eq!(to_index(Some(4)), 4);
    }
}
