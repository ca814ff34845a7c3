//! Matcher configuration

/// What to do with a reference sentence that yields no usable words
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptySentencePolicy {
    /// Leave it out; later sentences move up one registration index.
    #[default]
    Drop,
    /// Fail construction with `CompileError::EmptySentence`.
    Reject,
}

/// Matcher configuration
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    pub empty_sentences: EmptySentencePolicy,
    /// Batch size from which `find_all` fans out over threads (`parallel` feature)
    pub parallel_threshold: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            empty_sentences: EmptySentencePolicy::default(),
            parallel_threshold: 1000,
        }
    }
}
