//! Spell-check oracles
//!
//! A [`Lexicon`] answers one question: is this string an English word? The
//! validation pipeline only ever sees the trait, so any backend can be plugged in.

use super::embedded::LEXICON;
use super::loader::words_from_slice;
use crate::core::MIN_WORD_LENGTH;
use rustc_hash::FxHashSet;

/// A source of truth for whether a string is a recognized word
pub trait Lexicon {
    /// Returns `true` if `word` (already lowercased) is a recognized word
    fn contains(&self, word: &str) -> bool;
}

/// Any predicate closure can act as a lexicon
impl<F> Lexicon for F
where
    F: Fn(&str) -> bool,
{
    fn contains(&self, word: &str) -> bool {
        self(word)
    }
}

/// In-memory word set with regular inflection handling
///
/// Stores base forms and accepts common inflections of them (`worms`, `milked`,
/// `skimming`, `flies`) without listing every form.
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: FxHashSet<String>,
}

impl WordSet {
    /// Build a word set from any iterator of words
    ///
    /// Words are stored lowercased.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The English lexicon compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(words_from_slice(LEXICON))
    }

    /// Number of stored words (inflections not counted)
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact membership, without inflection handling
    #[inline]
    #[must_use]
    pub fn contains_exact(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// The stored words, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Lexicon for WordSet {
    fn contains(&self, word: &str) -> bool {
        self.contains_exact(word)
            || base_forms(word)
                .iter()
                .any(|base| self.contains_exact(base))
    }
}

/// Candidate base forms for a possibly inflected word
///
/// Covers plurals and third person (`-s`, `-es`, `-ies`) and the past and
/// progressive verb forms (`-ed`, `-ied`, `-ing`). Only bases long enough to be
/// playable on their own are produced, so short stems like "ox" never vouch
/// for "oxes".
fn base_forms(word: &str) -> Vec<String> {
    let mut bases = Vec::new();

    if let Some(stem) = word.strip_suffix("ies").or_else(|| word.strip_suffix("ied")) {
        bases.push(format!("{stem}y"));
    }

    if let Some(stem) = word.strip_suffix("es")
        && takes_es(stem)
    {
        bases.push(stem.to_string());
    }

    if let Some(stem) = word.strip_suffix('s')
        && !takes_es(stem)
    {
        bases.push(stem.to_string());
    }

    for suffix in ["ed", "ing"] {
        if let Some(stem) = word.strip_suffix(suffix) {
            bases.push(stem.to_string());
            bases.push(format!("{stem}e"));
            if let Some(undoubled) = undouble(stem) {
                bases.push(undoubled.to_string());
            }
        }
    }

    bases.retain(|base| base.chars().count() >= MIN_WORD_LENGTH);
    bases
}

/// Stems whose plural is spelled with `-es` (`boxes`, `wishes`, `potatoes`)
fn takes_es(stem: &str) -> bool {
    ["s", "x", "z", "ch", "sh", "o"]
        .iter()
        .any(|ending| stem.ends_with(ending))
}

/// `stopp` -> `stop`, `runn` -> `run`
fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let before = chars.next()?;
    (last == before && !"aeiou".contains(last)).then(|| &stem[..stem.len() - last.len_utf8()])
}
