//! Puzzle solving command
//!
//! Runs the filter and search over a word list and collects timing and
//! counters for display.

use crate::solver::{Chain, SearchStats, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Spinner frames, one per tick
const SPINNER_FRAMES: &str = "-\\|/ ";

/// Result of solving a puzzle
pub struct SolveResult {
    pub solutions: Vec<Chain>,
    pub raw_words: usize,
    pub legal_words: usize,
    pub stats: SearchStats,
    pub duration: Duration,
}

impl SolveResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.solutions.is_empty()
    }

    /// Fewest words used by any solution
    #[must_use]
    pub fn shortest_chain(&self) -> Option<usize> {
        self.solutions.iter().map(Chain::len).min()
    }
}

/// Solve the solver's puzzle against a raw word list
///
/// When `show_progress` is set, a spinner with the elapsed time runs on its
/// own ticker thread while the search works. It never touches the search
/// state.
pub fn solve_puzzle<S>(solver: &Solver, raw_words: &[S], show_progress: bool) -> SolveResult
where
    S: AsRef<str> + Sync,
{
    let start = Instant::now();

    let index = solver.legal_words(raw_words);

    let spinner = start_spinner(show_progress);
    spinner.set_message(format!("searching {} words", index.len()));
    let outcome = solver.search(&index);
    spinner.finish_and_clear();

    let duration = start.elapsed();
    log::info!(
        "Found {} solutions in {:.2}s",
        outcome.solutions.len(),
        duration.as_secs_f64()
    );

    SolveResult {
        solutions: outcome.solutions,
        raw_words: raw_words.len(),
        legal_words: index.len(),
        stats: outcome.stats,
        duration,
    }
}

fn start_spinner(show_progress: bool) -> ProgressBar {
    if !show_progress {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {elapsed_precise} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars(SPINNER_FRAMES),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
