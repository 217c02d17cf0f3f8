//! Core domain types for Letter Boxed
//!
//! The box, the search configuration, words and letter sets. Everything here
//! is immutable once constructed and has no I/O.

mod config;
mod letter_box;
mod letters;
mod word;

pub use config::{ConfigError, MIN_WORD_LENGTH, SEARCH_DEPTH, SearchConfig};
pub use letter_box::{BoxError, LetterBox, Side};
pub use letters::LetterSet;
pub use word::{Word, WordError};
