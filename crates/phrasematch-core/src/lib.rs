//! Phrasematch Core Engine
//!
//! Decides which of a small set of registered reference sentences is
//! contained in an arbitrary input text. Words may appear in any order,
//! interleaved with unrelated words, with case differences, accents and a
//! few spelling errors (the budget grows with word length).
//!
//! Construction compiles every sentence into fuzzy-searchable words and a
//! starting-letter path index. A query is a single left-to-right scan that
//! allocates nothing once its [`Scratch`] has warmed up.
//!
//! # Features
//!
//! - `native` - Enable all native optimizations
//! - `parallel` - Parallel batch matching via rayon
//! - `wasm` - WASM-compatible build (excludes native-only features)
//!
//! # Example
//!
//! ```rust
//! use phrasematch_core::{FuzzyMatcher, Matcher, NOT_FOUND};
//!
//! let matcher = Matcher::new(["I love trees", "bananas are the best fruit", "banana"]).unwrap();
//!
//! // Bring your own scratch...
//! let mut scratch = matcher.scratch();
//! assert_eq!(matcher.find("do you also love trees? i do.", &mut scratch), Some(0));
//!
//! // ...or let the matcher own one
//! let mut matcher = FuzzyMatcher::new(matcher);
//! assert_eq!(matcher.match_index("on a sunday afternoon i like to eat a banana"), 2);
//! assert_eq!(matcher.match_index("nothing"), NOT_FOUND);
//! ```

mod batch;
pub mod compile;
pub mod config;
pub mod error;
pub mod index;
pub mod matcher;
pub mod normalize;
pub mod shared;

// Re-export main types at crate root
pub use compile::{Sentence, Word, MAX_WORDS};
pub use config::{EmptySentencePolicy, MatcherConfig};
pub use error::{CompileError, CompileResult};
pub use matcher::{to_index, Matcher, MatcherStats, Scratch, NOT_FOUND};
pub use shared::{FuzzyMatcher, SharedMatcher};
