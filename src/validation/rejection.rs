//! Reasons a submission can be turned down

use thiserror::Error;

/// Why a submitted word was rejected
///
/// Each reason carries a short title and a longer message meant for the player.
/// `Display` renders both as `"<title>: <message>"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionReason {
    /// The word was already accepted this round
    #[error("Word already used: Be more original!")]
    AlreadyUsed,

    /// The word needs letters the root word does not have (or not enough of them)
    #[error("Word not possible: You can't spell that word from '{root}'!")]
    NotSpellableFromRoot { root: String },

    /// The word is not in the lexicon
    #[error("Word not recognized: You can't just make them up, you know!")]
    NotADictionaryWord,

    /// The word is shorter than three letters or is the root word itself
    #[error(
        "Word too short: Words must be at least three letters long and can't be the root word."
    )]
    TooShortOrEqualsRoot,
}

impl RejectionReason {
    /// Short headline for the rejection
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word already used",
            Self::NotSpellableFromRoot { .. } => "Word not possible",
            Self::NotADictionaryWord => "Word not recognized",
            Self::TooShortOrEqualsRoot => "Word too short",
        }
    }

    /// Explanation shown under the title
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::AlreadyUsed => "Be more original!".to_string(),
            Self::NotSpellableFromRoot { root } => {
                format!("You can't spell that word from '{root}'!")
            }
            Self::NotADictionaryWord => "You can't just make them up, you know!".to_string(),
            Self::TooShortOrEqualsRoot => {
                "Words must be at least three letters long and can't be the root word.".to_string()
            }
        }
    }
}
