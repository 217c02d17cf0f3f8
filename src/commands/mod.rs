//! Command implementations

pub mod check;
pub mod solve;
pub mod words;

pub use check::{CheckResult, check_word_in_dictionary};
pub use solve::{SolveResult, solve_puzzle};
pub use words::{WordListResult, list_legal_words};
