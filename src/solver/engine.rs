//! Main Letter Boxed solver interface

use super::filter::{WordRejection, check_word, filter_words};
use super::index::LegalWordIndex;
use super::search::{Chain, SearchOutcome, search_with_stats};
use crate::core::{BoxError, ConfigError, LetterBox, SearchConfig, Word};

/// Error type for setting up a solver
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("Invalid box: {0}")]
    InvalidBox(#[from] BoxError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Main Letter Boxed solver
///
/// Pairs an immutable box with a validated configuration and runs the
/// filter → index → search pipeline over any word list.
#[derive(Debug, Clone)]
pub struct Solver {
    letter_box: LetterBox,
    config: SearchConfig,
}

impl Solver {
    /// Create a solver, validating the configuration first
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(letter_box: LetterBox, config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!("Puzzle letters: {letter_box}");
        log::info!("Search parameters: {config}");
        Ok(Self { letter_box, config })
    }

    /// Create a solver straight from the four side strings
    ///
    /// # Errors
    /// Returns `SolveError` if the box or the configuration is invalid.
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::SearchConfig;
    /// use letter_boxed::solver::Solver;
    ///
    /// let solver = Solver::from_sides("abc", "def", "ghi", "jkl", SearchConfig::default()).unwrap();
    /// let solutions = solver.solve(&["adgjbehkcfil", "zz"]);
    /// assert_eq!(solutions.len(), 1);
    ///
    /// let bad = SearchConfig::default().with_max_depth(0);
    /// assert!(Solver::from_sides("abc", "def", "ghi", "jkl", bad).is_err());
    /// ```
    pub fn from_sides(
        top: &str,
        left: &str,
        bottom: &str,
        right: &str,
        config: SearchConfig,
    ) -> Result<Self, SolveError> {
        let letter_box = LetterBox::new(top, left, bottom, right)?;
        Ok(Self::new(letter_box, config)?)
    }

    #[inline]
    #[must_use]
    pub const fn letter_box(&self) -> &LetterBox {
        &self.letter_box
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Check a single word against this solver's box and bounds
    ///
    /// # Errors
    /// Returns the reason the word cannot be played.
    pub fn check(&self, word: &str) -> Result<Word, WordRejection> {
        check_word(word, &self.letter_box, &self.config)
    }

    /// Filter a raw word list and index the survivors
    pub fn legal_words<S>(&self, raw_words: &[S]) -> LegalWordIndex
    where
        S: AsRef<str> + Sync,
    {
        LegalWordIndex::new(filter_words(raw_words, &self.letter_box, &self.config))
    }

    /// Search an already built index
    #[must_use]
    pub fn search(&self, index: &LegalWordIndex) -> SearchOutcome {
        search_with_stats(index, &self.letter_box, &self.config)
    }

    /// Run the whole pipeline over a raw word list
    pub fn solve<S>(&self, raw_words: &[S]) -> Vec<Chain>
    where
        S: AsRef<str> + Sync,
    {
        let index = self.legal_words(raw_words);
        self.search(&index).solutions
    }
}
