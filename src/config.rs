//! Game configuration
//!
//! Where word lists come from and how root words are drawn.

use crate::dictionary::{Dictionary, DictionarySource, WordSet, loader};
use crate::game::Session;
use std::path::PathBuf;
use tracing::{info, warn};

/// Where a word list is read from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WordListSource {
    /// The list compiled into the binary
    #[default]
    Embedded,
    /// A newline-delimited file on disk
    File(PathBuf),
}

impl From<Option<PathBuf>> for WordListSource {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Embedded, Self::File)
    }
}

/// Settings for building a dictionary and a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    pub start_words: WordListSource,
    pub lexicon: WordListSource,
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(start_words: WordListSource, lexicon: WordListSource, seed: Option<u64>) -> Self {
        Self {
            start_words,
            lexicon,
            seed,
        }
    }

    /// Build the dictionary described by this configuration
    ///
    /// Never fails: a word list file that cannot be read is logged and replaced
    /// by the embedded list.
    #[must_use]
    pub fn load_dictionary(&self) -> Dictionary<WordSet> {
        let root_words = match &self.start_words {
            WordListSource::Embedded => loader::words_from_slice(crate::dictionary::START_WORDS),
            WordListSource::File(path) => match loader::load_from_file(path) {
                Ok(words) => {
                    info!(path = %path.display(), count = words.len(), "loaded start words");
                    words
                }
                Err(err) => {
                    warn!(error = %err, "falling back to embedded start words");
                    loader::words_from_slice(crate::dictionary::START_WORDS)
                }
            },
        };

        let lexicon = match &self.lexicon {
            WordListSource::Embedded => WordSet::embedded(),
            WordListSource::File(path) => match loader::load_from_file(path) {
                Ok(words) => {
                    info!(path = %path.display(), count = words.len(), "loaded lexicon");
                    WordSet::from_words(words)
                }
                Err(err) => {
                    warn!(error = %err, "falling back to embedded lexicon");
                    WordSet::embedded()
                }
            },
        };

        Dictionary::new(root_words, lexicon)
    }

    /// Create a session over `dictionary`, seeded if a seed is configured
    #[must_use]
    pub fn new_session<D: DictionarySource>(&self, dictionary: D) -> Session<D> {
        match self.seed {
            Some(seed) => Session::with_seed(dictionary, seed),
            None => Session::new(dictionary),
        }
    }
}
