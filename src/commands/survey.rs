//! Root word survey
//!
//! Counts the solutions available for every root word in the dictionary, to
//! spot roots that make for thin or rich rounds.

use super::solutions::find_solutions;
use crate::dictionary::{Dictionary, DictionarySource, WordSet};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Solution count for one root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSummary {
    pub root: String,
    pub solutions: usize,
    pub longest: usize,
}

/// Statistics over every root word
#[derive(Debug)]
pub struct SurveyResult {
    pub total_roots: usize,
    pub total_solutions: usize,
    pub average_solutions: f64,
    pub min_solutions: usize,
    pub max_solutions: usize,
    pub richest: Vec<RootSummary>,
    pub poorest: Vec<RootSummary>,
    pub duration: Duration,
}

/// How many roots to list at each end of the ranking
const RANKED_ROOTS: usize = 5;

/// Survey every root word in the dictionary
///
/// Shows a progress bar on stderr while running when `show_progress` is set.
#[must_use]
pub fn run_survey(dictionary: &Dictionary<WordSet>, show_progress: bool) -> SurveyResult {
    let roots = dictionary.root_words();
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(roots.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut summaries: Vec<RootSummary> = Vec::with_capacity(roots.len());
    for root in roots {
        let words = find_solutions(root, dictionary);
        summaries.push(RootSummary {
            root: root.clone(),
            solutions: words.len(),
            longest: words.first().map_or(0, |w| w.chars().count()),
        });

        pb.set_message(root.clone());
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    summarize(summaries, start.elapsed())
}

fn summarize(mut summaries: Vec<RootSummary>, duration: Duration) -> SurveyResult {
    let total_roots = summaries.len();
    let total_solutions: usize = summaries.iter().map(|s| s.solutions).sum();
    let average_solutions = if total_roots > 0 {
        total_solutions as f64 / total_roots as f64
    } else {
        0.0
    };

    let min_solutions = summaries.iter().map(|s| s.solutions).min().unwrap_or(0);
    let max_solutions = summaries.iter().map(|s| s.solutions).max().unwrap_or(0);

    summaries.sort_by(|a, b| b.solutions.cmp(&a.solutions).then_with(|| a.root.cmp(&b.root)));
    let richest: Vec<RootSummary> = summaries.iter().take(RANKED_ROOTS).cloned().collect();
    let poorest: Vec<RootSummary> = summaries.iter().rev().take(RANKED_ROOTS).cloned().collect();

    SurveyResult {
        total_roots,
        total_solutions,
        average_solutions,
        min_solutions,
        max_solutions,
        richest,
        poorest,
        duration,
    }
}
