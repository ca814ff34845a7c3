//! Owning and thread-safe front-ends over [`Matcher`]

use std::sync::Arc;

use parking_lot::Mutex;

use crate::matcher::{to_index, Matcher, Scratch};

/// A matcher bundled with its own scratch.
///
/// Not reentrant: queries take `&mut self`. Use [`SharedMatcher`] to query
/// from several threads.
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    matcher: Matcher,
    scratch: Scratch,
}

impl FuzzyMatcher {
    pub fn new(matcher: Matcher) -> Self {
        let scratch = matcher.scratch();
        Self { matcher, scratch }
    }

    /// Registration index of the first fully matched sentence
    pub fn find(&mut self, text: &str) -> Option<usize> {
        self.matcher.find(text, &mut self.scratch)
    }

    pub fn find_bytes(&mut self, bytes: &[u8]) -> Option<usize> {
        self.matcher.find_bytes(bytes, &mut self.scratch)
    }

    /// Registration index of the first fully matched sentence, or `-1`
    pub fn match_index(&mut self, text: &str) -> isize {
        to_index(self.find(text))
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn into_inner(self) -> Matcher {
        self.matcher
    }
}

impl From<Matcher> for FuzzyMatcher {
    fn from(matcher: Matcher) -> Self {
        Self::new(matcher)
    }
}

/// Thread-safe matcher handle.
///
/// Clones share the compiled sentences and a pool of scratch contexts. Each
/// query borrows a scratch from the pool (creating one when all are in use)
/// and hands it back afterwards, so concurrent queries never share state.
#[derive(Debug, Clone)]
pub struct SharedMatcher {
    matcher: Arc<Matcher>,
    pool: Arc<Mutex<Vec<Scratch>>>,
}

impl SharedMatcher {
    pub fn new(matcher: Matcher) -> Self {
        Self {
            matcher: Arc::new(matcher),
            pool: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn find(&self, text: &str) -> Option<usize> {
        self.with_scratch(|matcher, scratch| matcher.find(text, scratch))
    }

    pub fn find_bytes(&self, bytes: &[u8]) -> Option<usize> {
        self.with_scratch(|matcher, scratch| matcher.find_bytes(bytes, scratch))
    }

    pub fn match_index(&self, text: &str) -> isize {
        to_index(self.find(text))
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Number of idle scratch contexts
    pub fn pooled(&self) -> usize {
        self.pool.lock().len()
    }

    fn with_scratch<T>(&self, f: impl FnOnce(&Matcher, &mut Scratch) -> T) -> T {
        let pooled = self.pool.lock().pop();
        let mut scratch = pooled.unwrap_or_else(|| self.matcher.scratch());
        let result = f(&self.matcher, &mut scratch);
        self.pool.lock().push(scratch);
        result
    }
}

impl From<Matcher> for SharedMatcher {
    fn from(matcher: Matcher) -> Self {
        Self::new(matcher)
    }
}
