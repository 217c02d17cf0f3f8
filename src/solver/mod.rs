//! Letter Boxed solving algorithms
//!
//! Word filtering, the legal word index and the bounded chain search.

mod engine;
pub mod filter;
pub mod index;
pub mod search;

pub use engine::{SolveError, Solver};
pub use filter::{WordRejection, check_word, filter_words, is_word_valid};
pub use index::LegalWordIndex;
pub use search::{Chain, SearchOutcome, SearchStats, search, search_with_stats};
