//! Word lists for Letter Boxed solving
//!
//! Provides the embedded corpus compiled into the binary, file loading, and
//! `WordSource` to choose between them.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Where the raw word list comes from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WordSource {
    /// The corpus embedded at build time
    #[default]
    Bundled,
    /// A file with one word per line
    File(PathBuf),
}

impl WordSource {
    /// Name accepted by [`WordSource::from_arg`] for the bundled corpus
    pub const BUNDLED: &'static str = "bundled";

    /// Create a source from a command-line value
    ///
    /// `"bundled"` selects the embedded corpus; anything else is a file path.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg == Self::BUNDLED {
            Self::Bundled
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Load the raw words
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a file source cannot be read.
    pub fn load(&self) -> io::Result<Vec<String>> {
        let words = match self {
            Self::Bundled => loader::words_from_slice(WORDS),
            Self::File(path) => loader::load_from_file(path)?,
        };
        log::info!("Loaded {} words from {self}", words.len());
        Ok(words)
    }
}

impl fmt::Display for WordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => write!(f, "bundled corpus"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
