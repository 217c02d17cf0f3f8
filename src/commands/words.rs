//! Legal word listing command

use crate::solver::{LegalWordIndex, Solver};

/// The legal words for a box, with the raw dictionary size
pub struct WordListResult {
    pub index: LegalWordIndex,
    pub raw_words: usize,
}

impl WordListResult {
    /// Legal words grouped by first letter, in alphabetical letter order
    #[must_use]
    pub fn by_first_letter(&self) -> Vec<(char, Vec<&str>)> {
        (b'a'..=b'z')
            .filter_map(|letter| {
                let words: Vec<&str> = self
                    .index
                    .starting_with(letter)
                    .iter()
                    .map(|&i| self.index.word(i).text())
                    .collect();
                (!words.is_empty()).then_some((letter as char, words))
            })
            .collect()
    }
}

/// Filter the dictionary and return the legal words
pub fn list_legal_words<S>(solver: &Solver, raw_words: &[S]) -> WordListResult
where
    S: AsRef<str> + Sync,
{
    WordListResult {
        index: solver.legal_words(raw_words),
        raw_words: raw_words.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SearchConfig;

    #[test]
    fn groups_by_first_letter() {
        let config = SearchConfig::default().with_min_word_length(3);
        let solver = Solver::from_sides("abc", "def", "ghi", "jkl", config).unwrap();
        let raw = ["lad", "adgjbe", "zzz", "ehkcfil", "adg", "ekhcfil"];

        let result = list_legal_words(&solver, &raw);

        assert_eq!(result.raw_words, 6);
        assert_eq!(result.index.len(), 5);
        assert_eq!(
            result.by_first_letter(),
            vec![
                ('a', vec!["adgjbe", "adg"]),
                ('e', vec!["ehkcfil", "ekhcfil"]),
                ('l', vec!["lad"]),
            ]
        );
    }
}
