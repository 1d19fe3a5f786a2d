//! Ordered submission checks
//!
//! Rules run cheapest and most specific first: originality, spellability,
//! dictionary lookup, then length/identity. The first failing rule decides the
//! outcome and later rules are never evaluated.

use super::RejectionReason;
use crate::core::{MIN_WORD_LENGTH, can_spell, normalize};
use crate::dictionary::DictionarySource;

/// Result of a submission that was not rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validated {
    /// The normalized word passed every rule
    Word(String),
    /// Nothing was submitted (blank input); not an error
    Empty,
}

/// Run a raw submission through the validation rules
///
/// `used_words` are the words already accepted this round and `root` is the
/// round's root word.
///
/// # Errors
///
/// Returns the [`RejectionReason`] of the first rule the candidate fails.
///
/// # Examples
/// ```
/// use word_scramble::dictionary::Dictionary;
/// use word_scramble::validation::{validate, RejectionReason, Validated};
///
/// let dictionary = Dictionary::embedded();
/// let used = vec!["silk".to_string()];
///
/// assert_eq!(
///     validate(" Milk ", &used, "silkworm", &dictionary),
///     Ok(Validated::Word("milk".to_string()))
/// );
/// assert_eq!(
///     validate("silk", &used, "silkworm", &dictionary),
///     Err(RejectionReason::AlreadyUsed)
/// );
/// ```
pub fn validate<D>(
    raw: &str,
    used_words: &[String],
    root: &str,
    dictionary: &D,
) -> Result<Validated, RejectionReason>
where
    D: DictionarySource,
{
    let Some(candidate) = normalize(raw) else {
        return Ok(Validated::Empty);
    };

    check_original(&candidate, used_words)?;
    check_spellable(&candidate, root)?;
    check_recognized(&candidate, dictionary)?;
    check_length(&candidate, root)?;

    Ok(Validated::Word(candidate))
}

fn check_original(candidate: &str, used_words: &[String]) -> Result<(), RejectionReason> {
    if used_words.iter().any(|used| used == candidate) {
        return Err(RejectionReason::AlreadyUsed);
    }
    Ok(())
}

fn check_spellable(candidate: &str, root: &str) -> Result<(), RejectionReason> {
    if !can_spell(candidate, root) {
        return Err(RejectionReason::NotSpellableFromRoot {
            root: root.to_string(),
        });
    }
    Ok(())
}

fn check_recognized<D>(candidate: &str, dictionary: &D) -> Result<(), RejectionReason>
where
    D: DictionarySource,
{
    if !dictionary.is_dictionary_word(candidate) {
        return Err(RejectionReason::NotADictionaryWord);
    }
    Ok(())
}

fn check_length(candidate: &str, root: &str) -> Result<(), RejectionReason> {
    if candidate.chars().count() < MIN_WORD_LENGTH || candidate == root {
        return Err(RejectionReason::TooShortOrEqualsRoot);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Dictionary, WordSet};

    const ROOT: &str = "silkworm";

    fn dictionary() -> Dictionary<WordSet> {
        Dictionary::new(
            vec![ROOT.to_string()],
            WordSet::from_words(["silk", "milk", "worm", "ow", "is", "slim", "mil", "oil"]),
        )
    }

    fn word(w: &str) -> Result<Validated, RejectionReason> {
        Ok(Validated::Word(w.to_string()))
    }

    fn not_spellable() -> Result<Validated, RejectionReason> {
        Err(RejectionReason::NotSpellableFromRoot {
            root: ROOT.to_string(),
        })
    }

    #[test]
    fn accepts_valid_word() {
        assert_eq!(validate("silk", &[], ROOT, &dictionary()), word("silk"));
    }

    #[test]
    fn returns_normalized_word() {
        assert_eq!(validate("  MiLK\n", &[], ROOT, &dictionary()), word("milk"));
    }

    #[test]
    fn blank_input_is_empty_signal() {
        assert_eq!(validate("", &[], ROOT, &dictionary()), Ok(Validated::Empty));
        assert_eq!(validate(" \t\n", &[], ROOT, &dictionary()), Ok(Validated::Empty));
    }

    #[test]
    fn rejects_used_word() {
        let used = vec!["silk".to_string()];
        assert_eq!(
            validate("SILK ", &used, ROOT, &dictionary()),
            Err(RejectionReason::AlreadyUsed)
        );
    }

    #[test]
    fn rejects_unspellable_word() {
        assert_eq!(validate("wkxz", &[], ROOT, &dictionary()), not_spellable());
        assert_eq!(validate("silkworms", &[], ROOT, &dictionary()), not_spellable());
    }

    #[test]
    fn rejects_unknown_word() {
        assert_eq!(
            validate("kilm", &[], ROOT, &dictionary()),
            Err(RejectionReason::NotADictionaryWord)
        );
    }

    #[test]
    fn rejects_short_word() {
        assert_eq!(
            validate("ow", &[], ROOT, &dictionary()),
            Err(RejectionReason::TooShortOrEqualsRoot)
        );
    }

    #[test]
    fn rejects_root_word() {
        assert_eq!(
            validate("SilkWorm", &[], ROOT, &dictionary()),
            Err(RejectionReason::TooShortOrEqualsRoot)
        );
    }

    #[test]
    fn three_letters_is_long_enough() {
        assert_eq!(validate("mil", &[], ROOT, &dictionary()), word("mil"));
    }

    #[test]
    fn originality_checked_before_everything_else() {
        // "ow" is used, short, and would otherwise fail the length rule
        let used = vec!["ow".to_string(), "xyz".to_string()];
        assert_eq!(
            validate("ow", &used, ROOT, &dictionary()),
            Err(RejectionReason::AlreadyUsed)
        );
        assert_eq!(
            validate("xyz", &used, ROOT, &dictionary()),
            Err(RejectionReason::AlreadyUsed)
        );
    }

    #[test]
    fn spellability_checked_before_dictionary() {
        // neither spellable nor a word: spellability wins
        assert_eq!(validate("zzz", &[], ROOT, &dictionary()), not_spellable());
    }

    #[test]
    fn dictionary_checked_before_length() {
        // short and not a word: dictionary wins
        assert_eq!(
            validate("wo", &[], ROOT, &dictionary()),
            Err(RejectionReason::NotADictionaryWord)
        );
    }

    #[test]
    fn dictionary_is_not_consulted_for_unspellable_words() {
        use std::cell::Cell;

        let lookups = Cell::new(0);
        let counting = Dictionary::new(vec![ROOT.to_string()], |_: &str| {
            lookups.set(lookups.get() + 1);
            true
        });

        assert_eq!(validate("wkxz", &[], ROOT, &counting), not_spellable());
        assert_eq!(lookups.get(), 0);

        assert_eq!(validate("silk", &[], ROOT, &counting), word("silk"));
        assert_eq!(lookups.get(), 1);
    }
}
