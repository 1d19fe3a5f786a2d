//! State of a single round

/// One round: a root word and the words accepted against it
///
/// Accepted words are kept newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    root: String,
    used_words: Vec<String>,
}

impl Round {
    /// Start a round with no accepted words
    #[must_use]
    pub const fn new(root: String) -> Self {
        Self {
            root,
            used_words: Vec::new(),
        }
    }

    /// The round's root word
    #[inline]
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    /// Record an accepted word at the front of the list
    ///
    /// Callers are responsible for having validated the word.
    pub(crate) fn accept(&mut self, word: String) {
        self.used_words.insert(0, word);
    }
}
