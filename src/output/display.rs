//! Display functions for command results

use super::formatters::{chain_summary, format_box, format_chain, numbered};
use crate::commands::{CheckResult, SolveResult, WordListResult};
use crate::core::LetterBox;
use colored::Colorize;

/// Print the result of solving a puzzle
///
/// `limit` caps how many solutions are listed; the totals always reflect the
/// full result.
pub fn print_solve_result(result: &SolveResult, letter_box: &LetterBox, limit: Option<usize>, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", format_box(letter_box).bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        println!(
            "  Dictionary: {} words → {} legal",
            result.raw_words, result.legal_words
        );
        println!("  Chains tried: {}", result.stats.nodes_visited);
        println!("  Time taken:   {:.2}s", result.duration.as_secs_f64());
    }

    if !result.is_solved() {
        println!("\n{}", "No solutions found".red().bold());
        return;
    }

    let total = result.solutions.len();
    let shown = limit.unwrap_or(total).min(total);

    println!();
    for (i, chain) in result.solutions.iter().take(shown).enumerate() {
        println!(
            "{} {}  {}",
            numbered(i + 1, total).bright_black(),
            format_chain(chain).bright_white().bold(),
            format!("({})", chain_summary(chain)).bright_black()
        );
    }

    if shown < total {
        println!("  … and {} more", total - shown);
    }

    println!();
    let shortest = result.shortest_chain().unwrap_or_default();
    println!(
        "{}",
        format!(
            "✅ {total} {} found (shortest uses {shortest} {})",
            if total == 1 { "solution" } else { "solutions" },
            if shortest == 1 { "word" } else { "words" }
        )
        .green()
        .bold()
    );
}

/// Print the result of checking a word
pub fn print_check_result(result: &CheckResult) {
    let word = result.word.to_uppercase();

    match &result.verdict {
        Ok(()) => {
            println!("{} {}", "✅".green(), format!("{word} can be played").green().bold());
            if result.in_dictionary {
                println!("   Can follow:  {} words", result.predecessors);
                println!("   Followed by: {} words", result.followers);
            } else {
                println!("   {}", "Not in the dictionary".yellow());
            }
        }
        Err(reason) => {
            println!("{} {}", "❌".red(), format!("{word} cannot be played").red().bold());
            println!("   {reason}");
        }
    }
}

/// Print the legal word list, grouped by first letter
pub fn print_word_list(result: &WordListResult) {
    println!(
        "{} legal words out of {}",
        result.index.len().to_string().bright_cyan().bold(),
        result.raw_words
    );

    for (letter, words) in result.by_first_letter() {
        println!(
            "\n{} {}",
            letter.to_ascii_uppercase().to_string().bright_yellow().bold(),
            format!("({})", words.len()).bright_black()
        );
        println!("  {}", words.join(" "));
    }
}
