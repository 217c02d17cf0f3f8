//! Search configuration
//!
//! Word length bounds and the maximum chain length. Validated once, before
//! any filtering or searching happens.

use std::fmt;

/// Default minimum word length
pub const MIN_WORD_LENGTH: usize = 4;

/// Default maximum number of words in a chain
pub const SEARCH_DEPTH: usize = 4;

/// Error type for invalid search configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Search depth must be at least 1, got {0}")]
    InvalidDepth(usize),

    #[error("Minimum word length must be at least 1, got {0}")]
    InvalidMinLength(usize),

    #[error("Contradictory word length bounds: min={min}, max={max}")]
    ContradictoryBounds { min: usize, max: usize },
}

/// Parameters governing word filtering and chain search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Inclusive lower bound on word length
    pub min_word_length: usize,
    /// Inclusive upper bound on word length (`None` = unbounded)
    pub max_word_length: Option<usize>,
    /// Maximum number of words in a chain
    pub max_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_word_length: MIN_WORD_LENGTH,
            max_word_length: None,
            max_depth: SEARCH_DEPTH,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub const fn with_min_word_length(mut self, min: usize) -> Self {
        self.min_word_length = min;
        self
    }

    #[must_use]
    pub const fn with_max_word_length(mut self, max: Option<usize>) -> Self {
        self.max_word_length = max;
        self
    }

    #[must_use]
    pub const fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Check the configuration invariants
    ///
    /// # Errors
    /// Returns `ConfigError` if:
    /// - `max_depth` is 0
    /// - `min_word_length` is 0
    /// - `min_word_length` exceeds `max_word_length`
    ///
    /// # Examples
    /// ```
    /// use letter_boxed::core::SearchConfig;
    ///
    /// assert!(SearchConfig::default().validate().is_ok());
    /// assert!(SearchConfig::default().with_max_depth(0).validate().is_err());
    /// assert!(SearchConfig::default().with_max_word_length(Some(3)).validate().is_err());
    /// ```
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth < 1 {
            return Err(ConfigError::InvalidDepth(self.max_depth));
        }
        if self.min_word_length < 1 {
            return Err(ConfigError::InvalidMinLength(self.min_word_length));
        }
        match self.max_word_length {
            Some(max) if self.min_word_length > max => Err(ConfigError::ContradictoryBounds {
                min: self.min_word_length,
                max,
            }),
            _ => Ok(()),
        }
    }

    /// True if a word of `len` characters is within the length bounds
    #[inline]
    #[must_use]
    pub fn accepts_length(&self, len: usize) -> bool {
        len >= self.min_word_length && self.max_word_length.is_none_or(|max| len <= max)
    }
}

impl fmt::Display for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "min={}, max=", self.min_word_length)?;
        match self.max_word_length {
            Some(max) => write!(f, "{max}")?,
            None => write!(f, "unbounded")?,
        }
        write!(f, ", depth={}", self.max_depth)
    }
}
