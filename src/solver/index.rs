//! Legal word index
//!
//! Holds the filtered word list and buckets word positions by first and last
//! letter, so "which words can follow this one" is a lookup rather than a scan
//! of the whole list.

use crate::core::{LetterSet, Word};
use rustc_hash::FxHashMap;

/// Filtered words plus first/last letter lookup tables
///
/// Built once before the search and read-only afterwards. Bucket contents are
/// positions into `words`, in list order.
#[derive(Debug, Clone, Default)]
pub struct LegalWordIndex {
    words: Vec<Word>,
    by_first: FxHashMap<u8, Vec<usize>>,
    by_last: FxHashMap<u8, Vec<usize>>,
    positions: FxHashMap<String, usize>,
    letters: LetterSet,
}

impl LegalWordIndex {
    /// Build the index over an already filtered word list
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut by_first: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        let mut by_last: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        let mut positions: FxHashMap<String, usize> = FxHashMap::default();
        let mut letters = LetterSet::new();

        for (i, word) in words.iter().enumerate() {
            by_first.entry(word.first_letter()).or_default().push(i);
            by_last.entry(word.last_letter()).or_default().push(i);
            positions.entry(word.text().to_owned()).or_insert(i);
            letters = letters.union(word.letters());
        }

        Self {
            words,
            by_first,
            by_last,
            positions,
            letters,
        }
    }

    /// All words, in filtered order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Word at a position
    ///
    /// # Panics
    /// Panics if `position` is out of range
    #[inline]
    #[must_use]
    pub fn word(&self, position: usize) -> &Word {
        &self.words[position]
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Every letter used by at least one word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// Positions of words starting with `letter`
    ///
    /// Returns an empty slice if no word starts with it.
    #[inline]
    pub fn starting_with(&self, letter: u8) -> &[usize] {
        self.by_first.get(&letter).map_or(&[], Vec::as_slice)
    }

    /// Positions of words ending with `letter`
    #[inline]
    pub fn ending_with(&self, letter: u8) -> &[usize] {
        self.by_last.get(&letter).map_or(&[], Vec::as_slice)
    }

    /// Position of a word by text, if present
    ///
    /// The first position wins if the list holds the same text twice.
    #[inline]
    #[must_use]
    pub fn position(&self, text: &str) -> Option<usize> {
        self.positions.get(text).copied()
    }
}
