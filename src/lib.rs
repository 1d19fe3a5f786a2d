//! Word Scramble
//!
//! A word game engine: spell as many words as you can from the letters of a
//! randomly chosen root word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::dictionary::{Dictionary, WordSet};
//! use word_scramble::game::{Session, SubmitError};
//! use word_scramble::validation::RejectionReason;
//!
//! let dictionary = Dictionary::new(vec!["silkworm".to_string()], WordSet::embedded());
//! let mut session = Session::new(dictionary);
//! session.start_round();
//!
//! assert_eq!(session.submit_word("Silk"), Ok(Some("silk".to_string())));
//! assert_eq!(
//!     session.submit_word("silk"),
//!     Err(SubmitError::Rejected(RejectionReason::AlreadyUsed))
//! );
//! assert_eq!(session.used_words(), ["silk"]);
//! ```

// Letter matching and normalization
pub mod core;

// Root words and spell checking
pub mod dictionary;

// Submission rules
pub mod validation;

// Round state and session lifecycle
pub mod game;

// Runtime settings
pub mod config;

// Subscriber setup for the binary
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
