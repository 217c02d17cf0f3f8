//! Word check command
//!
//! Explains whether a single word can be played in the box, and how it
//! connects to the rest of the dictionary.

use crate::solver::{Solver, WordRejection};

/// Result of checking a word
pub struct CheckResult {
    pub word: String,
    /// `Ok(())` if the word is legal, otherwise the first rule it breaks
    pub verdict: Result<(), WordRejection>,
    /// Whether the word is in the dictionary's legal words
    pub in_dictionary: bool,
    /// Legal words that can come right after this one
    pub followers: usize,
    /// Legal words this one can come right after
    pub predecessors: usize,
}

impl CheckResult {
    #[must_use]
    pub const fn is_legal(&self) -> bool {
        self.verdict.is_ok()
    }
}

/// Check a word against the box and the dictionary
pub fn check_word_in_dictionary<S>(solver: &Solver, raw_words: &[S], word: &str) -> CheckResult
where
    S: AsRef<str> + Sync,
{
    let word_text = word.trim().to_lowercase();

    let checked = match solver.check(&word_text) {
        Ok(checked) => checked,
        Err(rejection) => {
            return CheckResult {
                word: word_text,
                verdict: Err(rejection),
                in_dictionary: false,
                followers: 0,
                predecessors: 0,
            };
        }
    };

    let index = solver.legal_words(raw_words);
    let own = index.position(checked.text());
    let count_others = |positions: &[usize]| positions.iter().filter(|&&p| Some(p) != own).count();

    CheckResult {
        followers: count_others(index.starting_with(checked.last_letter())),
        predecessors: count_others(index.ending_with(checked.first_letter())),
        in_dictionary: own.is_some(),
        word: word_text,
        verdict: Ok(()),
    }
}
