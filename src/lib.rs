//! Letter Boxed Solver
//!
//! Finds chains of dictionary words that solve a Letter Boxed puzzle: every
//! word typeable in the box without using one side twice in a row, each word
//! starting with the last letter of the one before, and every letter of the
//! box used at least once.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_boxed::core::SearchConfig;
//! use letter_boxed::solver::Solver;
//!
//! let solver = Solver::from_sides("abc", "def", "ghi", "jkl", SearchConfig::default()).unwrap();
//! let solutions = solver.solve(&["adgjbe", "ehkcfil", "abd"]);
//!
//! assert_eq!(solutions.len(), 1);
//! println!("{}", solutions[0]);
//! ```

// Core domain types
pub mod core;

// Filtering and chain search
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod log;
