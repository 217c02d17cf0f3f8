//! Word filtering
//!
//! Reduces a raw dictionary to the words that can be typed in a given box:
//! every letter on some side, no two consecutive letters from the same side,
//! and a length within the configured bounds.

use crate::core::{LetterBox, SearchConfig, Side, Word, WordError};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Why a word cannot be played in the box
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordRejection {
    #[error("too short: {len} letters, minimum is {min}")]
    TooShort { len: usize, min: usize },

    #[error("too long: {len} letters, maximum is {max}")]
    TooLong { len: usize, max: usize },

    #[error("'{0}' is not in the box")]
    LetterNotInBox(char),

    #[error("'{first}' and '{second}' are both on the {side} side")]
    SameSide { first: char, second: char, side: Side },

    #[error(transparent)]
    Malformed(#[from] WordError),
}

/// Check a single word against the box and length bounds
///
/// The word is lowercased before any comparison. On success the validated
/// `Word` is returned.
///
/// # Errors
/// Returns the first `WordRejection` found, checking length before letters.
///
/// # Examples
/// ```
/// use letter_boxed::core::{LetterBox, SearchConfig};
/// use letter_boxed::solver::{WordRejection, check_word};
///
/// let puzzle = LetterBox::new("abc", "def", "ghi", "jkl").unwrap();
/// let config = SearchConfig::default().with_min_word_length(3);
///
/// assert!(check_word("BEH", &puzzle, &config).is_ok());
/// assert_eq!(
///     check_word("bez", &puzzle, &config),
///     Err(WordRejection::LetterNotInBox('z'))
/// );
/// ```
pub fn check_word(word: &str, letter_box: &LetterBox, config: &SearchConfig) -> Result<Word, WordRejection> {
    let lower = word.to_lowercase();

    let len = lower.chars().count();
    if len < config.min_word_length {
        return Err(WordRejection::TooShort {
            len,
            min: config.min_word_length,
        });
    }
    if let Some(max) = config.max_word_length.filter(|&max| len > max) {
        return Err(WordRejection::TooLong { len, max });
    }

    let mut previous: Option<(char, Side)> = None;
    for c in lower.chars() {
        let side = u8::try_from(c)
            .ok()
            .and_then(|b| letter_box.side_of(b))
            .ok_or(WordRejection::LetterNotInBox(c))?;

        if let Some((prev_char, _)) = previous.filter(|&(_, prev_side)| prev_side == side) {
            return Err(WordRejection::SameSide {
                first: prev_char,
                second: c,
                side,
            });
        }
        previous = Some((c, side));
    }

    Word::new(lower).map_err(WordRejection::from)
}

/// True if the word can be played in the box
#[inline]
#[must_use]
pub fn is_word_valid(word: &str, letter_box: &LetterBox, config: &SearchConfig) -> bool {
    check_word(word, letter_box, config).is_ok()
}

/// Filter a raw word list down to the legal words for a box
///
/// Output keeps the input order. Words that appear more than once (after
/// lowercasing) are kept only at their first position.
pub fn filter_words<S>(raw_words: &[S], letter_box: &LetterBox, config: &SearchConfig) -> Vec<Word>
where
    S: AsRef<str> + Sync,
{
    let mut legal: Vec<Word> = raw_words
        .par_iter()
        .filter_map(|word| check_word(word.as_ref(), letter_box, config).ok())
        .collect();

    let before = legal.len();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    legal.retain(|word| seen.insert(word.text().to_owned()));

    if legal.len() < before {
        log::debug!("Dropped {} duplicate words", before - legal.len());
    }
    log::info!(
        "Dictionary trimmed from {} to {} words",
        raw_words.len(),
        legal.len()
    );

    legal
}
