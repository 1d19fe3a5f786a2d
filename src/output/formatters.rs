//! Formatting utilities for terminal output

use crate::validation::RejectionReason;
use colored::Colorize;

/// Circled digit for a word length, like the badges next to each found word
///
/// Lengths without a circled digit fall back to `(n)`.
#[must_use]
pub fn length_badge(length: usize) -> String {
    const CIRCLED: [char; 20] = [
        '①', '②', '③', '④', '⑤', '⑥', '⑦', '⑧', '⑨', '⑩', '⑪', '⑫', '⑬', '⑭', '⑮', '⑯', '⑰', '⑱',
        '⑲', '⑳',
    ];

    match length {
        1..=20 => CIRCLED[length - 1].to_string(),
        _ => format!("({length})"),
    }
}

/// Header line announcing a round's root word
#[must_use]
pub fn format_root(root: &str) -> String {
    format!(
        "Root word: {}",
        root.to_uppercase().bright_yellow().bold()
    )
}

/// Found words, newest first, each with its length badge
#[must_use]
pub fn format_used_words(words: &[String]) -> String {
    if words.is_empty() {
        return "  (no words yet)".bright_black().to_string();
    }

    words
        .iter()
        .map(|word| format!("  {} {}", length_badge(word.chars().count()), word))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rejection title and message on one line
#[must_use]
pub fn format_rejection(reason: &RejectionReason) -> String {
    format!("❌ {} {}", reason.title().red().bold(), reason.message())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_badge_uses_circled_digits() {
        assert_eq!(length_badge(3), "③");
        assert_eq!(length_badge(8), "⑧");
        assert_eq!(length_badge(20), "⑳");
    }

    #[test]
    fn length_badge_falls_back_to_parens() {
        assert_eq!(length_badge(0), "(0)");
        assert_eq!(length_badge(21), "(21)");
    }

    #[test]
    fn used_words_keep_order() {
        let words = vec!["worm".to_string(), "silk".to_string(), "oil".to_string()];
        let text = format_used_words(&words);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines, vec!["  ④ worm", "  ④ silk", "  ③ oil"]);
    }

    #[test]
    fn empty_used_words_has_placeholder() {
        assert!(format_used_words(&[]).contains("no words yet"));
    }

    #[test]
    fn rejection_includes_title_and_message() {
        let text = format_rejection(&RejectionReason::AlreadyUsed);
        assert!(text.contains("Word already used"));
        assert!(text.contains("Be more original!"));
    }

    #[test]
    fn root_is_uppercased() {
        assert!(format_root("silkworm").contains("SILKWORM"));
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(5.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
