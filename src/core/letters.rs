//! Letter multiset matching
//!
//! Decides whether a candidate can be spelled from the letters of a pool word,
//! using each pool letter at most as many times as it occurs.

use rustc_hash::FxHashMap;

/// Check whether `candidate` can be spelled from the letters of `pool`
///
/// Walks the candidate left to right, removing the first matching letter from a
/// working copy of the pool each time. Any letter that cannot be found ends the
/// walk with `false`. Both inputs are expected to be lowercased already.
///
/// # Examples
/// ```
/// use word_scramble::core::can_spell;
///
/// assert!(can_spell("silk", "silkworm"));
/// assert!(!can_spell("silks", "silkworm")); // only one 's'
/// assert!(can_spell("", "silkworm"));
/// ```
#[must_use]
pub fn can_spell(candidate: &str, pool: &str) -> bool {
    let mut remaining: Vec<char> = pool.chars().collect();

    for letter in candidate.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                remaining.remove(pos);
            }
            None => return false,
        }
    }

    true
}

/// Precomputed letter counts for a pool word
///
/// Answers the same question as [`can_spell`] but pays the cost of scanning the
/// pool once, which matters when one root word is tested against a whole lexicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build a pool from a (lowercased) word
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for letter in word.chars() {
            *counts.entry(letter).or_insert(0) += 1;
        }

        Self { counts }
    }

    /// How many times `letter` is available
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Check whether `candidate` can be spelled from this pool
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        let mut used: FxHashMap<char, usize> = FxHashMap::default();

        for letter in candidate.chars() {
            let taken = used.entry(letter).or_insert(0);
            *taken += 1;
            if *taken > self.count_of(letter) {
                return false;
            }
        }

        true
    }
}
