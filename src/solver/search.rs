//! Chain search
//!
//! Depth-bounded backtracking over the legal word index. A chain is recorded
//! the moment its letters cover the whole box; a branch stops there, at the
//! depth limit, or when no word starts with the required letter.

use super::index::LegalWordIndex;
use crate::core::{LetterBox, LetterSet, SearchConfig, Word};
use std::fmt;

/// An ordered sequence of words, each starting with the last letter of the
/// one before it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chain {
    words: Vec<Word>,
}

impl Chain {
    /// Build a chain from words
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in the chain
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Union of the letters of every word
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.words.iter().map(Word::letters).fold(LetterSet::EMPTY, LetterSet::union)
    }

    /// Total number of letters typed, counting repeats
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.words.iter().map(Word::len).sum()
    }

    /// True if every word starts with the last letter of the previous one
    #[must_use]
    pub fn is_linked(&self) -> bool {
        self.words.windows(2).all(|pair| pair[0].links_to(&pair[1]))
    }

    /// Word texts, in order
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.words.iter().map(Word::text).collect()
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.texts().join(" - "))
    }
}

/// Counters from a single search run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Chains formed (one per word tried)
    pub nodes_visited: usize,
    /// Deepest chain length reached
    pub max_depth_reached: usize,
}

/// Result of a search: solutions in discovery order plus counters
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub solutions: Vec<Chain>,
    pub stats: SearchStats,
}

/// Find every chain of at most `config.max_depth` words covering the box
///
/// Solutions are returned in pre-order DFS order over the index's word order.
/// No chain contains the same word twice. Running the same search twice
/// yields the same list in the same order.
///
/// # Examples
/// ```
/// use letter_boxed::core::{LetterBox, SearchConfig, Word};
/// use letter_boxed::solver::{LegalWordIndex, search};
///
/// let puzzle = LetterBox::new("abc", "def", "ghi", "jkl").unwrap();
/// let words = ["adgjbehkcfil"].map(|w| Word::new(w).unwrap()).to_vec();
/// let index = LegalWordIndex::new(words);
///
/// let solutions = search(&index, &puzzle, &SearchConfig::default());
/// assert_eq!(solutions.len(), 1);
/// assert_eq!(solutions[0].texts(), vec!["adgjbehkcfil"]);
/// ```
#[must_use]
pub fn search(index: &LegalWordIndex, letter_box: &LetterBox, config: &SearchConfig) -> Vec<Chain> {
    search_with_stats(index, letter_box, config).solutions
}

/// Same as [`search`], also returning search counters
#[must_use]
pub fn search_with_stats(
    index: &LegalWordIndex,
    letter_box: &LetterBox,
    config: &SearchConfig,
) -> SearchOutcome {
    let target = letter_box.all_letters();

    if !target.is_subset(index.letters()) {
        let missing: LetterSet = target.iter().filter(|&c| !index.letters().contains(c)).collect();
        log::info!("No legal word uses the letters '{missing}'; nothing to search");
        return SearchOutcome::default();
    }

    let mut searcher = ChainSearch::new(index, target, config.max_depth);
    let roots: Vec<usize> = (0..index.len()).collect();
    searcher.expand(&roots, LetterSet::EMPTY);

    log::info!(
        "Search visited {} chains and found {} solutions",
        searcher.stats.nodes_visited,
        searcher.solutions.len()
    );

    SearchOutcome {
        solutions: searcher.solutions,
        stats: searcher.stats,
    }
}

/// Recursion state for one search invocation
struct ChainSearch<'a> {
    index: &'a LegalWordIndex,
    target: LetterSet,
    max_depth: usize,
    chain: Vec<usize>,
    solutions: Vec<Chain>,
    stats: SearchStats,
}

impl<'a> ChainSearch<'a> {
    fn new(index: &'a LegalWordIndex, target: LetterSet, max_depth: usize) -> Self {
        Self {
            index,
            target,
            max_depth,
            chain: Vec::with_capacity(max_depth.min(index.len())),
            solutions: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    /// Try each candidate as the next word of the current chain
    fn expand(&mut self, candidates: &[usize], covered: LetterSet) {
        let depth = self.chain.len();
        if depth == self.max_depth {
            return;
        }

        let index = self.index;
        for &position in candidates {
            if self.chain.contains(&position) {
                continue;
            }

            let word = index.word(position);
            let now_covered = covered.union(word.letters());

            self.chain.push(position);
            self.stats.nodes_visited += 1;
            self.stats.max_depth_reached = self.stats.max_depth_reached.max(depth + 1);

            if now_covered == self.target {
                self.record();
            } else if depth + 1 < self.max_depth {
                self.expand(index.starting_with(word.last_letter()), now_covered);
            }

            self.chain.pop();
        }
    }

    fn record(&mut self) {
        let words: Vec<Word> = self.chain.iter().map(|&i| self.index.word(i).clone()).collect();
        let chain = Chain::new(words);
        log::debug!("Found solution: {chain}");
        self.solutions.push(chain);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(words: &[&str]) -> LegalWordIndex {
        LegalWordIndex::new(words.iter().map(|w| Word::new(*w).unwrap()).collect())
    }

    fn sample_box() -> LetterBox {
        LetterBox::new("abc", "def", "ghi", "jkl").unwrap()
    }

    fn depth(max_depth: usize) -> SearchConfig {
        SearchConfig::default().with_max_depth(max_depth)
    }

    fn all_texts(solutions: &[Chain]) -> Vec<Vec<&str>> {
        solutions.iter().map(Chain::texts).collect()
    }

    #[test]
    fn two_word_chain() {
        // adgjbe + ehkcfil covers a..l
        let index = index_of(&["adgjbe", "ehkcfil"]);
        let solutions = search(&index, &sample_box(), &depth(2));

        assert_eq!(all_texts(&solutions), vec![vec!["adgjbe", "ehkcfil"]]);
        assert_eq!(solutions[0].letters(), sample_box().all_letters());
        assert!(solutions[0].is_linked());
    }

    #[test]
    fn depth_one_without_covering_word() {
        let index = index_of(&["adgjbe", "ehkcfil"]);
        assert!(search(&index, &sample_box(), &depth(1)).is_empty());
    }

    #[test]
    fn chain_must_link() {
        // Together they cover the box, but "ehkcfil" ends in 'l' and nothing starts with 'l'
        let index = index_of(&["ehkcfil", "adgjbe"]);
        let solutions = search(&index, &sample_box(), &depth(2));

        assert_eq!(all_texts(&solutions), vec![vec!["adgjbe", "ehkcfil"]]);
    }

    #[test]
    fn covering_chain_is_not_extended() {
        // "adgjbehkcfil" covers alone; "lad" could follow but must not be tried
        let index = index_of(&["adgjbehkcfil", "lad"]);
        let outcome = search_with_stats(&index, &sample_box(), &depth(3));

        assert_eq!(all_texts(&outcome.solutions), vec![vec!["adgjbehkcfil"]]);
        assert!(outcome.solutions.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn multiple_completions_from_one_prefix() {
        let index = index_of(&["adgjbe", "ehkcfil", "ekhcfil"]);
        let solutions = search(&index, &sample_box(), &depth(2));

        assert_eq!(
            all_texts(&solutions),
            vec![vec!["adgjbe", "ehkcfil"], vec!["adgjbe", "ekhcfil"]]
        );
    }

    #[test]
    fn word_not_reused_within_chain() {
        // "ada" links to itself but may only appear once
        let index = index_of(&["ada", "adgjbehkcfil"]);
        let solutions = search(&index, &sample_box(), &depth(3));

        assert_eq!(
            all_texts(&solutions),
            vec![vec!["ada", "adgjbehkcfil"], vec!["adgjbehkcfil"]]
        );
        for chain in &solutions {
            let mut texts = chain.texts();
            texts.sort_unstable();
            texts.dedup();
            assert_eq!(texts.len(), chain.len());
        }
    }

    #[test]
    fn empty_index_yields_nothing() {
        let index = LegalWordIndex::new(Vec::new());
        let outcome = search_with_stats(&index, &sample_box(), &depth(4));

        assert!(outcome.solutions.is_empty());
        assert_eq!(outcome.stats.nodes_visited, 0);
    }

    #[test]
    fn uncoverable_letter_short_circuits() {
        // No word uses 'l'
        let index = index_of(&["adgjbe", "ehkcfi"]);
        let outcome = search_with_stats(&index, &sample_box(), &depth(4));

        assert!(outcome.solutions.is_empty());
        assert_eq!(outcome.stats.nodes_visited, 0);
    }

    #[test]
    fn depth_bound_respected() {
        // Three-word chain: adg + gjbe + ehkcfil
        let index = index_of(&["adg", "gjbe", "ehkcfil"]);

        assert!(search(&index, &sample_box(), &depth(2)).is_empty());

        let outcome = search_with_stats(&index, &sample_box(), &depth(3));
        assert_eq!(
            all_texts(&outcome.solutions),
            vec![vec!["adg", "gjbe", "ehkcfil"]]
        );
        assert!(outcome.stats.max_depth_reached <= 3);
    }

    #[test]
    fn search_is_deterministic() {
        let index = index_of(&["adg", "gjbe", "ehkcfil", "adgjbe", "ekhcfil", "lad"]);
        let first = search(&index, &sample_box(), &depth(4));
        let second = search(&index, &sample_box(), &depth(4));

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn deeper_search_keeps_shallow_solutions() {
        let index = index_of(&["adg", "gjbe", "ehkcfil", "adgjbe", "ekhcfil", "lad"]);
        let shallow = search(&index, &sample_box(), &depth(2));
        let deep = search(&index, &sample_box(), &depth(4));

        assert!(deep.len() >= shallow.len());
        for chain in &shallow {
            assert!(deep.contains(chain), "missing {chain}");
        }
    }

    #[test]
    fn unbounded_depth_does_not_preallocate() {
        let index = index_of(&["adgjbehkcfil"]);
        let solutions = search(&index, &sample_box(), &depth(usize::MAX));

        assert_eq!(all_texts(&solutions), vec![vec!["adgjbehkcfil"]]);
    }

    #[test]
    fn chain_accessors() {
        let chain = Chain::new(vec![
            Word::new("face").unwrap(),
            Word::new("echo").unwrap(),
        ]);

        assert_eq!(chain.len(), 2);
        assert_eq!(chain.letter_count(), 8);
        assert_eq!(chain.letters().to_string(), "acefho");
        assert!(chain.is_linked());
        assert_eq!(chain.to_string(), "face - echo");

        let broken = Chain::new(vec![
            Word::new("echo").unwrap(),
            Word::new("face").unwrap(),
        ]);
        assert!(!broken.is_linked());
    }
}
