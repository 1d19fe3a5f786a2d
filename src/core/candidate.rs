//! Normalization of raw submissions

/// Normalize a raw submission into a candidate word
///
/// Trims surrounding whitespace (including newlines) and lowercases the rest.
/// Returns `None` when nothing is left, which callers treat as "no submission".
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n").as_deref(), Some("silk"));
/// assert_eq!(normalize(" \t "), None);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let candidate = raw.trim().to_lowercase();
    if candidate.is_empty() {
        None
    } else {
        Some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("SILK").as_deref(), Some("silk"));
        assert_eq!(normalize("  worm  ").as_deref(), Some("worm"));
        assert_eq!(normalize("\tMiLk\r\n").as_deref(), Some("milk"));
    }

    #[test]
    fn keeps_inner_whitespace() {
        assert_eq!(normalize(" two words ").as_deref(), Some("two words"));
    }

    #[test]
    fn blank_input_is_none() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("\n\t"), None);
    }
}
