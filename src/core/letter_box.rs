//! Letter Boxed puzzle representation
//!
//! A `LetterBox` holds the four sides of the puzzle together with a
//! precomputed letter → side table, so looking up the side of a letter is a
//! single array access.

use super::LetterSet;
use std::fmt;

/// One of the four edges of the box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Left,
    Bottom,
    Right,
}

impl Side {
    /// All sides, in the order their letters are read
    pub const ALL: [Self; 4] = [Self::Top, Self::Left, Self::Bottom, Self::Right];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Bottom => "bottom",
            Self::Right => "right",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for malformed boxes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoxError {
    #[error("The {0} side of the box has no letters")]
    EmptySide(Side),

    #[error("The {side} side contains '{invalid_char}' (only letters a-z are allowed)")]
    InvalidLetter { side: Side, invalid_char: char },
}

/// The puzzle box: four sides of letters
///
/// Immutable once built. Letters are stored lowercase. A letter listed on
/// more than one side belongs to the first of them in top, left, bottom,
/// right order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBox {
    sides: [Vec<u8>; 4],
    letter_to_side: [Option<Side>; 26],
    all_letters: LetterSet,
}

impl LetterBox {
    /// Build a box from its top, left, bottom and right sides
    ///
    /// # Errors
    /// Returns `BoxError` if:
    /// - A side is empty
    /// - A side contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::{LetterBox, Side};
    ///
    /// let puzzle = LetterBox::new("ABC", "def", "ghi", "jkl").unwrap();
    /// assert_eq!(puzzle.side_of(b'a'), Some(Side::Top));
    /// assert_eq!(puzzle.side_of(b'z'), None);
    /// assert_eq!(puzzle.all_letters().len(), 12);
    ///
    /// assert!(LetterBox::new("", "def", "ghi", "jkl").is_err());
    /// assert!(LetterBox::new("a1c", "def", "ghi", "jkl").is_err());
    /// ```
    pub fn new(top: &str, left: &str, bottom: &str, right: &str) -> Result<Self, BoxError> {
        let mut sides: [Vec<u8>; 4] = Default::default();
        let mut letter_to_side = [None; 26];
        let mut all_letters = LetterSet::new();

        for (side, text) in Side::ALL.into_iter().zip([top, left, bottom, right]) {
            let letters = parse_side(side, text)?;

            for &letter in &letters {
                let Some(slot) = LetterSet::index_of(letter) else {
                    continue;
                };
                match letter_to_side[slot] {
                    None => letter_to_side[slot] = Some(side),
                    Some(owner) if owner != side => {
                        log::warn!(
                            "Letter '{}' appears on both the {owner} and {side} sides; using {owner}",
                            letter as char
                        );
                    }
                    Some(_) => {}
                }
                all_letters.insert(letter);
            }

            sides[side.index()] = letters;
        }

        Ok(Self {
            sides,
            letter_to_side,
            all_letters,
        })
    }

    /// Side owning a letter, or `None` if the letter is not in the box
    #[inline]
    #[must_use]
    pub fn side_of(&self, letter: u8) -> Option<Side> {
        LetterSet::index_of(letter).and_then(|i| self.letter_to_side[i])
    }

    /// Every distinct letter in the box (the coverage target)
    #[inline]
    #[must_use]
    pub const fn all_letters(&self) -> LetterSet {
        self.all_letters
    }

    /// Letters on one side, as given (lowercased)
    #[must_use]
    pub fn letters_on(&self, side: Side) -> &[u8] {
        &self.sides[side.index()]
    }

    /// Number of letter slots on all sides, duplicates included
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.sides.iter().map(Vec::len).sum()
    }
}

fn parse_side(side: Side, text: &str) -> Result<Vec<u8>, BoxError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(BoxError::EmptySide(side));
    }

    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                Ok(c.to_ascii_lowercase() as u8)
            } else {
                Err(BoxError::InvalidLetter {
                    side,
                    invalid_char: c,
                })
            }
        })
        .collect()
}

impl fmt::Display for LetterBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .sides
            .iter()
            .map(|side| String::from_utf8_lossy(side).to_uppercase())
            .collect();
        write!(f, "{}", parts.join("-"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_creation_valid() {
        let puzzle = LetterBox::new("abc", "def", "ghi", "jkl").unwrap();
        assert_eq!(puzzle.letters_on(Side::Top), b"abc");
        assert_eq!(puzzle.letters_on(Side::Right), b"jkl");
        assert_eq!(puzzle.slot_count(), 12);
        assert_eq!(puzzle.all_letters().to_string(), "abcdefghijkl");
    }

    #[test]
    fn box_creation_uppercase_normalized() {
        let puzzle = LetterBox::new("ABC", "DeF", "ghi", "JKL").unwrap();
        assert_eq!(puzzle.letters_on(Side::Left), b"def");
        assert_eq!(puzzle.side_of(b'e'), Some(Side::Left));
    }

    #[test]
    fn side_lookup() {
        let puzzle = LetterBox::new("abc", "def", "ghi", "jkl").unwrap();
        assert_eq!(puzzle.side_of(b'b'), Some(Side::Top));
        assert_eq!(puzzle.side_of(b'f'), Some(Side::Left));
        assert_eq!(puzzle.side_of(b'g'), Some(Side::Bottom));
        assert_eq!(puzzle.side_of(b'l'), Some(Side::Right));
        assert_eq!(puzzle.side_of(b'z'), None);
        assert_eq!(puzzle.side_of(b'A'), None);
    }

    #[test]
    fn box_creation_empty_side() {
        assert_eq!(
            LetterBox::new("abc", "  ", "ghi", "jkl"),
            Err(BoxError::EmptySide(Side::Left))
        );
    }

    #[test]
    fn box_creation_invalid_characters() {
        assert_eq!(
            LetterBox::new("abc", "def", "g-i", "jkl"),
            Err(BoxError::InvalidLetter {
                side: Side::Bottom,
                invalid_char: '-'
            })
        );
        assert!(LetterBox::new("abc", "def", "ghi", "jk1").is_err());
        assert!(LetterBox::new("abc", "dé", "ghi", "jkl").is_err());
    }

    #[test]
    fn duplicate_letters_collapse_to_first_side() {
        let puzzle = LetterBox::new("abc", "dea", "ghi", "jkl").unwrap();
        assert_eq!(puzzle.side_of(b'a'), Some(Side::Top));
        assert_eq!(puzzle.all_letters().len(), 11);
        assert_eq!(puzzle.slot_count(), 12);
    }

    #[test]
    fn longer_sides_allowed() {
        let puzzle = LetterBox::new("abcd", "efgh", "ijkl", "mnop").unwrap();
        assert_eq!(puzzle.all_letters().len(), 16);
        assert_eq!(puzzle.side_of(b'p'), Some(Side::Right));
    }

    #[test]
    fn box_display() {
        let puzzle = LetterBox::new("abc", "def", "ghi", "jkl").unwrap();
        assert_eq!(puzzle.to_string(), "ABC-DEF-GHI-JKL");
    }
}
