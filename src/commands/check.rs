//! Single word check command
//!
//! Validates one word against a fresh round on a given root word.

use crate::core::normalize;
use crate::dictionary::DictionarySource;
use crate::validation::{RejectionReason, Validated, validate};

/// Verdict for one checked word
pub struct CheckResult {
    pub input: String,
    pub root: String,
    /// `Ok(Some(word))` when accepted, `Ok(None)` for blank input
    pub verdict: Result<Option<String>, RejectionReason>,
}

impl CheckResult {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self.verdict, Ok(Some(_)))
    }

    /// Whether the word broke a rule; blank input is neither accepted nor rejected
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        self.verdict.is_err()
    }
}

/// Check `word` as the first submission of a round on `root`
#[must_use]
pub fn check_word<D>(word: &str, root: &str, dictionary: &D) -> CheckResult
where
    D: DictionarySource,
{
    let root = normalize(root).unwrap_or_default();
    let verdict = validate(word, &[], &root, dictionary).map(|validated| match validated {
        Validated::Word(word) => Some(word),
        Validated::Empty => None,
    });

    CheckResult {
        input: word.to_string(),
        root,
        verdict,
    }
}
