//! Compilation error types

use thiserror::Error;

/// Errors that can occur while compiling reference sentences
///
/// Matching never fails; only construction can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// More usable words than the per-sentence bitmask can track
    #[error("sentence {position} has {words} usable words, the limit is {limit}")]
    TooManyWords {
        position: usize,
        words: usize,
        limit: usize,
    },

    /// No usable words, reported only under `EmptySentencePolicy::Reject`
    #[error("sentence {position} has no usable words")]
    EmptySentence { position: usize },
}

/// Result type for compilation
pub type CompileResult<T> = Result<T, CompileError>;
