//! Compact letter sets
//!
//! A `LetterSet` is a bitmask over the 26 ASCII lowercase letters. Coverage
//! checks during the chain search are a single integer comparison.

use std::fmt;

/// A set of ASCII lowercase letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Create an empty set
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Bit index for a lowercase ASCII letter, `None` for anything else
    #[inline]
    #[must_use]
    pub const fn index_of(letter: u8) -> Option<usize> {
        if letter.is_ascii_lowercase() {
            Some((letter - b'a') as usize)
        } else {
            None
        }
    }

    /// Add a letter, returning `false` if it is not a lowercase ASCII letter
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        match Self::index_of(letter) {
            Some(i) => {
                self.0 |= 1 << i;
                true
            }
            None => false,
        }
    }

    /// True if the letter is in the set
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match Self::index_of(letter) {
            Some(i) => self.0 & (1 << i) != 0,
            None => false,
        }
    }

    /// Set union
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True if every letter of `self` is also in `other`
    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// True if no letter is set
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&c| self.contains(c))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl<'a> FromIterator<&'a LetterSet> for LetterSet {
    fn from_iter<I: IntoIterator<Item = &'a LetterSet>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, |acc, set| acc.union(*set))
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        Ok(())
    }
}
