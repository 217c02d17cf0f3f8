//! Letter Boxed word representation
//!
//! A `Word` stores the lowercase text together with its letter set and its
//! first and last letters, which is everything the chain search looks at.

use super::LetterSet;
use std::fmt;

/// A lowercase ASCII word with precomputed letter information
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: LetterSet,
    first: u8,
    last: u8,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,

    #[error("Word must contain only ASCII letters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - It contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::Word;
    ///
    /// let word = Word::new("Face").unwrap();
    /// assert_eq!(word.text(), "face");
    /// assert_eq!(word.first_letter(), b'f');
    /// assert_eq!(word.last_letter(), b'e');
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("don't").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let mut text: String = text.into();

        if !text.bytes().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }
        text.make_ascii_lowercase();

        let (Some(&first), Some(&last)) = (text.as_bytes().first(), text.as_bytes().last()) else {
            return Err(WordError::Empty);
        };

        let letters = text.bytes().collect();

        Ok(Self {
            text,
            letters,
            first,
            last,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: empty words are rejected at construction
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Distinct letters used by the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// First letter of the word
    #[inline]
    #[must_use]
    pub const fn first_letter(&self) -> u8 {
        self.first
    }

    /// Last letter of the word
    #[inline]
    #[must_use]
    pub const fn last_letter(&self) -> u8 {
        self.last
    }

    /// True if `next` may follow this word in a chain
    #[inline]
    #[must_use]
    pub const fn links_to(&self, next: &Self) -> bool {
        self.last == next.first
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
