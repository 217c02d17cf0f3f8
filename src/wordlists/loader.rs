//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded corpus.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one word per line
///
/// Lines are trimmed and blank lines skipped. Case is left untouched; the
/// filter lowercases words itself.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use letter_boxed::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Split text into words, one per non-blank line
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use letter_boxed::wordlists::loader::words_from_slice;
/// use letter_boxed::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_owned()).collect()
}
