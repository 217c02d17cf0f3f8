//! Letter Boxed Solver - CLI
//!
//! Solves Letter Boxed puzzles from the command line, using either a word
//! list file or the bundled corpus.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letter_boxed::{
    commands::{check_word_in_dictionary, list_legal_words, solve_puzzle},
    core::{MIN_WORD_LENGTH, SEARCH_DEPTH, SearchConfig},
    log::init_logger,
    output::{print_check_result, print_solve_result, print_word_list},
    solver::Solver,
    wordlists::WordSource,
};

#[derive(Parser)]
#[command(
    name = "letter_boxed",
    about = "Letter Boxed solver: finds word chains that use every letter in the box",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters on the top side of the box
    #[arg(short, long)]
    top: String,

    /// Letters on the left side of the box
    #[arg(short, long)]
    left: String,

    /// Letters on the bottom side of the box
    #[arg(short, long)]
    bottom: String,

    /// Letters on the right side of the box
    #[arg(short, long)]
    right: String,

    /// Minimum word length in a solution
    #[arg(short, long, default_value_t = MIN_WORD_LENGTH)]
    min: usize,

    /// Maximum word length in a solution (default: no limit)
    #[arg(short = 'x', long)]
    max: Option<usize>,

    /// Maximum number of words in a solution
    #[arg(short, long, default_value_t = SEARCH_DEPTH)]
    depth: usize,

    /// Dictionary: 'bundled' (default) or path to a word list file
    #[arg(short = 'D', long, default_value = WordSource::BUNDLED)]
    dict: String,

    /// Hide the progress spinner
    #[arg(short, long)]
    quiet: bool,

    /// Log progress and show search statistics
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every solution (default)
    Solve {
        /// Only list the first N solutions
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Explain whether a word can be played in the box
    Check {
        /// Word to check
        word: String,
    },

    /// List the dictionary words that can be played in the box
    Words,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = SearchConfig::default()
        .with_min_word_length(cli.min)
        .with_max_word_length(cli.max)
        .with_max_depth(cli.depth);
    let solver = Solver::from_sides(&cli.top, &cli.left, &cli.bottom, &cli.right, config)?;

    let source = WordSource::from_arg(&cli.dict);
    let raw_words = source
        .load()
        .with_context(|| format!("Failed to load word list from {source}"))?;

    // Default to Solve if no command given
    let command = cli.command.unwrap_or(Commands::Solve { limit: None });

    match command {
        Commands::Solve { limit } => {
            let result = solve_puzzle(&solver, &raw_words, !cli.quiet);
            print_solve_result(&result, solver.letter_box(), limit, cli.verbose);
        }
        Commands::Check { word } => {
            let result = check_word_in_dictionary(&solver, &raw_words, &word);
            print_check_result(&result);
        }
        Commands::Words => {
            let result = list_legal_words(&solver, &raw_words);
            print_word_list(&result);
        }
    }

    Ok(())
}
