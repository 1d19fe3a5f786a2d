//! Core word primitives
//!
//! Pure functions over strings with no knowledge of rounds or dictionaries:
//! submission normalization and letter multiset matching.

mod candidate;
mod letters;

pub use candidate::normalize;
pub use letters::{LetterPool, can_spell};

/// Minimum number of letters an accepted word must have
pub const MIN_WORD_LENGTH: usize = 3;
