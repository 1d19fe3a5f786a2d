//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading a word list from disk
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read word list {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load words from a newline-delimited file
///
/// Entries are trimmed and lowercased. Blank lines, `#` comments and entries
/// containing anything other than letters are skipped.
///
/// # Errors
///
/// Returns [`DictionaryError::Read`] if the file cannot be opened or is not valid UTF-8.
///
/// # Examples
/// ```no_run
/// use word_scramble::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, DictionaryError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content.lines().filter_map(clean_entry).collect())
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use word_scramble::dictionary::loader::words_from_slice;
/// use word_scramble::dictionary::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().copied().filter_map(clean_entry).collect()
}

fn clean_entry(line: &str) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let word = trimmed.to_lowercase();
    word.chars().all(char::is_alphabetic).then_some(word)
}
