//! Word compilation: fuzzy tolerance, transition table and first letters

/// Number of look-ahead letters per transition slot, also the tolerance ceiling
pub const TRANSITION_WIDTH: usize = 3;

/// Letters acceptable at one position of a word.
///
/// Slot `k` holds the letter `k + 1` positions ahead; `None` means no
/// constraint (either past the end of the word or beyond the tolerance).
pub type Transition = [Option<char>; TRANSITION_WIDTH];

/// Number of letter-level errors tolerated in a word of `len` letters
#[inline]
pub fn allowed_offset(len: usize) -> usize {
    match len {
        0..=4 => 1,
        5..=7 => 2,
        _ => TRANSITION_WIDTH,
    }
}

/// A compiled reference word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    letters: Box<[char]>,
    bit: u64,
    allowed_offset: usize,
    transitions: Box<[Transition]>,
    first_letters: [Option<char>; TRANSITION_WIDTH],
}

impl Word {
    /// Compile `letters` (already normalized, at least two) into a word owning `bit`
    pub(crate) fn new(letters: Vec<char>, bit: u64) -> Self {
        debug_assert!(letters.len() >= 2, "words are at least two letters long");
        debug_assert_eq!(bit.count_ones(), 1, "word bits are single bits");

        let allowed = allowed_offset(letters.len());
        let at = |idx: usize| letters.get(idx).copied();

        let transitions = (0..letters.len() - 1)
            .map(|i| {
                let mut slot = [at(i + 1), at(i + 2), at(i + 3)];
                for ahead in slot.iter_mut().skip(allowed) {
                    *ahead = None;
                }
                slot
            })
            .collect();

        let mut first_letters = [None; TRANSITION_WIDTH];
        for (offset, first) in first_letters.iter_mut().enumerate() {
            // letter 0 always, letter 1 from tolerance 2, letter 2 from tolerance 3
            if offset == 0 || offset < allowed {
                *first = at(offset);
            }
        }

        Self {
            letters: letters.into_boxed_slice(),
            bit,
            allowed_offset: allowed,
            transitions,
            first_letters,
        }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false, compiled words hold at least two letters
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The single bit identifying this word inside its sentence
    pub fn bit(&self) -> u64 {
        self.bit
    }

    pub fn allowed_offset(&self) -> usize {
        self.allowed_offset
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Letters a match may start on, paired with the transition offset to resume from
    pub fn first_letters(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.first_letters
            .iter()
            .map_while(|letter| *letter)
            .enumerate()
    }

    /// Input bytes that must follow the first letter for a match to be possible
    pub fn must_remaining_chars(&self) -> usize {
        self.letters.len() - self.allowed_offset - 1
    }

    /// Whether a candidate at `offset` with `skipped` errors may count as complete
    /// when the word ends early (so "banan" completes "banana")
    #[inline]
    pub fn tail_tolerated(&self, offset: usize, skipped: usize) -> bool {
        let missing = self.transitions.len().saturating_sub(offset + 1);
        missing <= self.allowed_offset.saturating_sub(skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn word(s: &str) -> Word {
        Word::new(s.chars().collect(), 1)
    }

    #[test]
    fn test_tolerance_scales_with_length() {
        assert_eq!(allowed_offset(2), 1);
        assert_eq!(allowed_offset(4), 1);
        assert_eq!(allowed_offset(5), 2);
        assert_eq!(allowed_offset(7), 2);
        assert_eq!(allowed_offset(8), 3);
        assert_eq!(allowed_offset(40), 3);
    }

    #[test]
    fn test_short_word_table() {
        let w = word("tree");
        assert_eq!(w.allowed_offset(), 1);
        assert_eq!(
            w.transitions(),
            &[
                [Some('r'), None, None],
                [Some('e'), None, None],
                [Some('e'), None, None],
            ]
        );
        assert_eq!(w.first_letters().collect::<Vec<_>>(), vec![(0, 't')]);
        assert_eq!(w.must_remaining_chars(), 2);
    }

    #[test]
    fn test_medium_word_table() {
        let w = word("banana");
        assert_eq!(w.allowed_offset(), 2);
        assert_eq!(w.transitions().len(), 5);
        assert_eq!(w.transitions()[0], [Some('a'), Some('n'), None]);
        assert_eq!(w.transitions()[4], [Some('a'), None, None]);
        assert_eq!(
            w.first_letters().collect::<Vec<_>>(),
            vec![(0, 'b'), (1, 'a')]
        );
        assert_eq!(w.must_remaining_chars(), 3);
    }

    #[test]
    fn test_long_word_table() {
        let w = word("coordinator");
        assert_eq!(w.allowed_offset(), 3);
        assert_eq!(w.transitions()[0], [Some('o'), Some('o'), Some('r')]);
        assert_eq!(w.transitions()[8], [Some('o'), Some('r'), None]);
        assert_eq!(
            w.first_letters().collect::<Vec<_>>(),
            vec![(0, 'c'), (1, 'o'), (2, 'o')]
        );
    }

    #[test]
    fn test_tail_tolerance() {
        let w = word("banana");
        // four of five transitions consumed, nothing skipped
        assert!(w.tail_tolerated(4, 0));
        assert!(w.tail_tolerated(2, 0));
        assert!(!w.tail_tolerated(1, 0));
        assert!(!w.tail_tolerated(2, 2));
    }
}
