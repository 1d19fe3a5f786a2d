//! Dictionary sources for Word Scramble
//!
//! A dictionary supplies the root words a round can start from and decides
//! whether a submitted string is a real word. Both word lists are compiled into
//! the binary and can be replaced by files at runtime.

mod embedded;
pub mod lexicon;
pub mod loader;

pub use embedded::{LEXICON, LEXICON_COUNT, START_WORDS, START_WORDS_COUNT};
pub use lexicon::{Lexicon, WordSet};
pub use loader::DictionaryError;

use crate::core::normalize;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::warn;

/// Root word used when no word list is available
pub const DEFAULT_ROOT_WORD: &str = "silkworm";

/// Supplies root words and recognizes dictionary words
pub trait DictionarySource {
    /// All root words a round may start from
    fn root_words(&self) -> &[String];

    /// Returns `true` if `word` (already normalized) is a recognized word
    fn is_dictionary_word(&self, word: &str) -> bool;

    /// Draw a root word uniformly at random
    ///
    /// Falls back to [`DEFAULT_ROOT_WORD`] when the word list is empty, so a round
    /// can always start.
    fn pick_root_word<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        if let Some(word) = self.root_words().choose(rng) {
            word.clone()
        } else {
            warn!(
                fallback = DEFAULT_ROOT_WORD,
                "root word list is empty, using fallback"
            );
            DEFAULT_ROOT_WORD.to_string()
        }
    }
}

/// A root word list paired with a lexicon
///
/// Root words are always recognized as dictionary words, even if the lexicon
/// does not list them.
#[derive(Debug, Clone)]
pub struct Dictionary<L: Lexicon = WordSet> {
    root_words: Vec<String>,
    lexicon: L,
}

impl<L: Lexicon> Dictionary<L> {
    /// Create a dictionary from root words and a lexicon
    ///
    /// Root words are trimmed and lowercased; blank entries are dropped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, DictionarySource};
    ///
    /// let dictionary = Dictionary::new(vec!["silkworm".to_string()], |w: &str| w == "silk");
    /// assert!(dictionary.is_dictionary_word("silk"));
    /// assert!(dictionary.is_dictionary_word("silkworm"));
    /// assert!(!dictionary.is_dictionary_word("wkxz"));
    /// ```
    #[must_use]
    pub fn new(root_words: Vec<String>, lexicon: L) -> Self {
        Self {
            root_words: root_words.iter().filter_map(|word| normalize(word)).collect(),
            lexicon,
        }
    }

    /// The lexicon backing the spell check
    #[must_use]
    pub const fn lexicon(&self) -> &L {
        &self.lexicon
    }
}

impl Dictionary<WordSet> {
    /// Dictionary built from the word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(START_WORDS), WordSet::embedded())
    }
}

impl<L: Lexicon> DictionarySource for Dictionary<L> {
    fn root_words(&self) -> &[String] {
        &self.root_words
    }

    fn is_dictionary_word(&self, word: &str) -> bool {
        self.lexicon.contains(word) || self.root_words.iter().any(|root| root == word)
    }
}
