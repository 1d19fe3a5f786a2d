//! Game session controller
//!
//! Owns the round lifecycle and is the only writer of round state.

use super::Round;
use crate::core::normalize;
use crate::dictionary::{DEFAULT_ROOT_WORD, DictionarySource};
use crate::validation::{RejectionReason, Validated, validate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why a submission did not change the round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("no round in progress; start a round first")]
    RoundNotStarted,

    #[error(transparent)]
    Rejected(#[from] RejectionReason),
}

/// Lifecycle state of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InRound(Round),
}

/// A single-player game session
///
/// # Examples
/// ```
/// use word_scramble::dictionary::Dictionary;
/// use word_scramble::game::{Session, SubmitError};
/// use word_scramble::validation::RejectionReason;
///
/// let mut session = Session::with_seed(Dictionary::embedded(), 1);
/// session.start_round();
/// let root = session.root_word().unwrap().to_string();
///
/// assert_eq!(
///     session.submit_word(&root),
///     Err(SubmitError::Rejected(RejectionReason::TooShortOrEqualsRoot))
/// );
/// assert_eq!(session.submit_word("   "), Ok(None));
/// ```
pub struct Session<D: DictionarySource> {
    dictionary: D,
    state: SessionState,
    rng: StdRng,
}

impl<D: DictionarySource> Session<D> {
    /// Create a session whose root words are drawn with OS randomness
    #[must_use]
    pub fn new(dictionary: D) -> Self {
        Self::with_rng(dictionary, StdRng::from_os_rng())
    }

    /// Create a session with reproducible root word selection
    #[must_use]
    pub fn with_seed(dictionary: D, seed: u64) -> Self {
        Self::with_rng(dictionary, StdRng::seed_from_u64(seed))
    }

    const fn with_rng(dictionary: D, rng: StdRng) -> Self {
        Self {
            dictionary,
            state: SessionState::NotStarted,
            rng,
        }
    }

    /// Start a new round, discarding any round in progress
    ///
    /// The drawn root word is normalized, so the round never runs on a blank
    /// root.
    pub fn start_round(&mut self) {
        let picked = self.dictionary.pick_root_word(&mut self.rng);
        let root = normalize(&picked).unwrap_or_else(|| {
            warn!(fallback = DEFAULT_ROOT_WORD, "drew a blank root word, using fallback");
            DEFAULT_ROOT_WORD.to_string()
        });
        info!(root = %root, "starting round");
        self.state = SessionState::InRound(Round::new(root));
    }

    /// Submit a raw word for the current round
    ///
    /// Returns `Ok(Some(word))` with the normalized word when it is accepted and
    /// `Ok(None)` when the input was blank. Neither a rejection nor blank input
    /// changes the round.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::RoundNotStarted`] if [`start_round`](Self::start_round) was never called
    /// - [`SubmitError::Rejected`] with the first rule the word failed
    pub fn submit_word(&mut self, raw: &str) -> Result<Option<String>, SubmitError> {
        let SessionState::InRound(round) = &mut self.state else {
            return Err(SubmitError::RoundNotStarted);
        };

        let validated = validate(raw, round.used_words(), round.root(), &self.dictionary)
            .inspect_err(|reason| debug!(input = raw, %reason, "word rejected"))?;

        match validated {
            Validated::Word(word) => {
                debug!(word = %word, "word accepted");
                round.accept(word.clone());
                Ok(Some(word))
            }
            Validated::Empty => Ok(None),
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether a round is in progress
    #[must_use]
    pub const fn is_in_round(&self) -> bool {
        matches!(self.state, SessionState::InRound(_))
    }

    /// The current round, if one has started
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        match &self.state {
            SessionState::InRound(round) => Some(round),
            SessionState::NotStarted => None,
        }
    }

    /// Root word of the current round
    #[must_use]
    pub fn root_word(&self) -> Option<&str> {
        self.round().map(Round::root)
    }

    /// Words accepted this round, most recent first
    ///
    /// Empty before the first round starts.
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        match self.round() {
            Some(round) => round.used_words(),
            None => &[],
        }
    }

    /// The dictionary this session validates against
    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Dictionary, WordSet};

    fn silkworm_session() -> Session<Dictionary<WordSet>> {
        let dictionary = Dictionary::new(vec!["silkworm".to_string()], WordSet::embedded());
        let mut session = Session::with_seed(dictionary, 0);
        session.start_round();
        session
    }

    fn rejected(reason: RejectionReason) -> Result<Option<String>, SubmitError> {
        Err(SubmitError::Rejected(reason))
    }

    #[test]
    fn session_starts_not_started() {
        let session = Session::with_seed(Dictionary::embedded(), 0);
        assert_eq!(session.state(), &SessionState::NotStarted);
        assert!(!session.is_in_round());
        assert_eq!(session.root_word(), None);
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn submit_before_start_is_an_error() {
        let mut session = Session::with_seed(Dictionary::embedded(), 0);
        assert_eq!(session.submit_word("silk"), Err(SubmitError::RoundNotStarted));
    }

    #[test]
    fn start_round_enters_round() {
        let session = silkworm_session();
        assert!(session.is_in_round());
        assert_eq!(session.root_word(), Some("silkworm"));
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn accepted_words_are_prepended() {
        let mut session = silkworm_session();

        assert_eq!(session.submit_word("silk"), Ok(Some("silk".to_string())));
        assert_eq!(session.submit_word("Worm "), Ok(Some("worm".to_string())));

        assert_eq!(session.used_words(), ["worm", "silk"]);
    }

    #[test]
    fn used_word_is_rejected_and_state_unchanged() {
        let mut session = silkworm_session();
        session.submit_word("silk").unwrap();
        session.submit_word("milk").unwrap();

        for word in ["silk", "milk"] {
            assert_eq!(session.submit_word(word), rejected(RejectionReason::AlreadyUsed));
        }
        assert_eq!(session.used_words(), ["milk", "silk"]);
    }

    #[test]
    fn rejection_leaves_state_unchanged() {
        let mut session = silkworm_session();
        session.submit_word("silk").unwrap();
        let before = session.state().clone();

        assert!(session.submit_word("wkxz").is_err());
        assert!(session.submit_word("ow").is_err());
        assert!(session.submit_word("silkworm").is_err());

        assert_eq!(session.state(), &before);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut session = silkworm_session();
        session.submit_word("silk").unwrap();

        assert_eq!(session.submit_word(""), Ok(None));
        assert_eq!(session.submit_word("  \n"), Ok(None));
        assert_eq!(session.used_words(), ["silk"]);
    }

    #[test]
    fn root_word_is_always_rejected() {
        let mut session = Session::with_seed(Dictionary::embedded(), 9);
        for _ in 0..10 {
            session.start_round();
            let root = session.root_word().unwrap().to_string();
            assert_eq!(
                session.submit_word(&root),
                rejected(RejectionReason::TooShortOrEqualsRoot)
            );
        }
    }

    #[test]
    fn short_words_are_rejected() {
        let mut session = silkworm_session();
        assert_eq!(
            session.submit_word("ow"),
            rejected(RejectionReason::TooShortOrEqualsRoot)
        );
    }

    #[test]
    fn restart_clears_used_words() {
        let mut session = silkworm_session();
        session.submit_word("silk").unwrap();
        session.submit_word("worm").unwrap();

        session.start_round();
        assert!(session.used_words().is_empty());
        assert_eq!(session.submit_word("silk"), Ok(Some("silk".to_string())));

        session.start_round();
        assert!(session.used_words().is_empty());
    }

    #[test]
    fn restart_draws_a_new_root() {
        let mut session = Session::with_seed(Dictionary::embedded(), 3);
        let mut roots = std::collections::HashSet::new();
        for _ in 0..20 {
            session.start_round();
            roots.insert(session.root_word().unwrap().to_string());
        }
        assert!(roots.len() > 1);
    }

    #[test]
    fn empty_word_list_still_starts_a_round() {
        let mut session = Session::with_seed(Dictionary::new(Vec::new(), WordSet::embedded()), 0);
        session.start_round();
        assert_eq!(session.root_word(), Some(DEFAULT_ROOT_WORD));
    }

    #[test]
    fn root_is_normalized_before_play() {
        for entry in ["Silkworm", " silkworm", "SILKWORM\n"] {
            let dictionary = Dictionary::new(vec![entry.to_string()], WordSet::embedded());
            let mut session = Session::with_seed(dictionary, 0);
            session.start_round();

            assert_eq!(session.root_word(), Some("silkworm"));
            assert_eq!(
                session.submit_word("silkworm"),
                rejected(RejectionReason::TooShortOrEqualsRoot)
            );
            assert_eq!(session.submit_word("silk"), Ok(Some("silk".to_string())));
        }
    }

    #[test]
    fn blank_root_entry_falls_back_to_default() {
        let dictionary = Dictionary::new(vec![String::new()], WordSet::embedded());
        let mut session = Session::with_seed(dictionary, 0);
        session.start_round();

        assert_eq!(session.root_word(), Some(DEFAULT_ROOT_WORD));
    }

    /// A source that hands out its roots exactly as given
    struct VerbatimRoots(Vec<String>);

    impl DictionarySource for VerbatimRoots {
        fn root_words(&self) -> &[String] {
            &self.0
        }

        fn is_dictionary_word(&self, word: &str) -> bool {
            ["silk", "worm", "silkworm"].contains(&word)
        }
    }

    #[test]
    fn roots_from_custom_sources_are_normalized() {
        let mut session = Session::with_seed(VerbatimRoots(vec!["  SilkWorm ".to_string()]), 0);
        session.start_round();
        assert_eq!(session.root_word(), Some("silkworm"));
        assert_eq!(
            session.submit_word("silkworm"),
            rejected(RejectionReason::TooShortOrEqualsRoot)
        );

        let mut session = Session::with_seed(VerbatimRoots(vec!["   ".to_string()]), 0);
        session.start_round();
        assert_eq!(session.root_word(), Some(DEFAULT_ROOT_WORD));
        assert_eq!(session.submit_word("worm"), Ok(Some("worm".to_string())));
    }

    #[test]
    fn used_words_always_pass_every_rule() {
        let mut session = silkworm_session();
        for word in ["silk", "milk", "worm", "swirl", "slim", "owls", "silk", "ow", "kiwi"] {
            let _ = session.submit_word(word);
        }

        let round = session.round().unwrap();
        for (i, word) in round.used_words().iter().enumerate() {
            let others: Vec<String> = round
                .used_words()
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, w)| w.clone())
                .collect();
            assert_eq!(
                validate(word, &others, round.root(), session.dictionary()),
                Ok(Validated::Word(word.clone()))
            );
        }
    }
}
