//! Solution listing command
//!
//! Finds every lexicon word that would be accepted for a root word.

use crate::core::{LetterPool, MIN_WORD_LENGTH, normalize};
use crate::dictionary::{Dictionary, WordSet};
use rayon::prelude::*;
use std::cmp::Reverse;

/// Every acceptable word for one root word
pub struct SolutionList {
    pub root: String,
    pub words: Vec<String>,
}

impl SolutionList {
    /// Number of solutions
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length of the longest solution, or 0 when there are none
    #[must_use]
    pub fn longest(&self) -> usize {
        self.words.first().map_or(0, |w| w.chars().count())
    }
}

/// List the words a fresh round on `root` would accept
///
/// Scans the lexicon's stored words (inflections the lexicon merely recognizes
/// are not enumerated). Results are sorted longest first, then alphabetically.
///
/// # Examples
/// ```
/// use word_scramble::commands::find_solutions;
/// use word_scramble::dictionary::Dictionary;
///
/// let words = find_solutions("silkworm", &Dictionary::embedded());
/// assert!(words.contains(&"silk".to_string()));
/// assert!(!words.contains(&"silkworm".to_string()));
/// ```
#[must_use]
pub fn find_solutions(root: &str, dictionary: &Dictionary<WordSet>) -> Vec<String> {
    let root = normalize(root).unwrap_or_default();
    let pool = LetterPool::new(&root);

    let mut words: Vec<String> = dictionary
        .lexicon()
        .words()
        .par_bridge()
        .filter(|word| {
            word.chars().count() >= MIN_WORD_LENGTH && *word != root && pool.can_spell(word)
        })
        .map(str::to_string)
        .collect();

    words.sort_by(|a, b| {
        Reverse(a.chars().count())
            .cmp(&Reverse(b.chars().count()))
            .then_with(|| a.cmp(b))
    });
    words
}

/// Build the solution listing for a root word
#[must_use]
pub fn list_solutions(root: &str, dictionary: &Dictionary<WordSet>) -> SolutionList {
    SolutionList {
        root: normalize(root).unwrap_or_default(),
        words: find_solutions(root, dictionary),
    }
}
