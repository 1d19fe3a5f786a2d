//! Display functions for command results

use super::formatters::{create_progress_bar, format_rejection, length_badge};
use crate::commands::{CheckResult, SolutionList, SurveyResult};
use colored::Colorize;

/// Print the verdict for a single checked word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking {} against {}",
        result.input.bright_white().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.verdict {
        Ok(Some(word)) => println!(
            "\n{}",
            format!("✅ '{word}' is a valid word for this root!").green().bold()
        ),
        Ok(None) => println!("\n{}", "Nothing to check.".bright_black()),
        Err(reason) => println!("\n{}", format_rejection(reason)),
    }
}

/// Print every solution for a root word, grouped by length
pub fn print_solutions(list: &SolutionList) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SOLUTIONS FOR".bright_cyan().bold(),
        list.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if list.is_empty() {
        println!("\nNo words can be made from this root.");
        return;
    }

    println!(
        "\n📊 {} words, longest {} letters",
        list.len().to_string().bright_yellow().bold(),
        list.longest()
    );

    let mut current_length = 0;
    for word in &list.words {
        let length = word.chars().count();
        if length != current_length {
            current_length = length;
            println!("\n{} {}", length_badge(length), "letters".bright_black());
        }
        println!("   {word}");
    }
}

/// Print the result of a root word survey
pub fn print_survey_result(result: &SurveyResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "ROOT WORD SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Root words:       {}", result.total_roots);
    println!("   Total solutions:  {}", result.total_solutions);
    println!(
        "   Average per root: {}",
        format!("{:.1}", result.average_solutions)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest:           {}",
        result.min_solutions.to_string().yellow()
    );
    println!(
        "   Most:             {}",
        result.max_solutions.to_string().green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if !result.richest.is_empty() {
        println!("\n✨ {}", "Richest roots".green().bold());
        for summary in &result.richest {
            let bar = create_progress_bar(
                summary.solutions as f64,
                result.max_solutions as f64,
                30,
            );
            println!(
                "   {:<10} {} {:4}",
                summary.root.to_uppercase(),
                bar.green(),
                summary.solutions
            );
        }
    }

    if !result.poorest.is_empty() {
        println!("\n😰 {}", "Poorest roots".yellow().bold());
        for summary in &result.poorest {
            let bar = create_progress_bar(
                summary.solutions as f64,
                result.max_solutions as f64,
                30,
            );
            println!(
                "   {:<10} {} {:4}",
                summary.root.to_uppercase(),
                bar.yellow(),
                summary.solutions
            );
        }
    }
}
