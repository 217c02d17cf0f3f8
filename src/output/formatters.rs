//! Formatting utilities for terminal output

use crate::core::{LetterBox, Side};
use crate::solver::Chain;

/// Arrow placed between the words of a chain
pub const CHAIN_SEPARATOR: &str = " → ";

/// Format a chain as upper-case words joined by arrows
#[must_use]
pub fn format_chain(chain: &Chain) -> String {
    chain
        .words()
        .iter()
        .map(|w| w.text().to_uppercase())
        .collect::<Vec<_>>()
        .join(CHAIN_SEPARATOR)
}

/// Short description of a chain's size, e.g. "2 words, 13 letters"
#[must_use]
pub fn chain_summary(chain: &Chain) -> String {
    let words = chain.len();
    let letters = chain.letter_count();
    format!(
        "{words} {}, {letters} letters",
        if words == 1 { "word" } else { "words" }
    )
}

/// Format the box as one line per side
#[must_use]
pub fn format_box(letter_box: &LetterBox) -> String {
    Side::ALL
        .iter()
        .map(|&side| {
            let letters: Vec<String> = letter_box
                .letters_on(side)
                .iter()
                .map(|&c| (c as char).to_ascii_uppercase().to_string())
                .collect();
            let label = format!("{side}:");
            format!("{label:<7} {}", letters.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Right-aligned list number, padded to fit `total` entries
#[must_use]
pub fn numbered(index: usize, total: usize) -> String {
    let width = total.max(1).to_string().len();
    format!("{index:>width$}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn chain(words: &[&str]) -> Chain {
        Chain::new(words.iter().map(|w| Word::new(*w).unwrap()).collect())
    }

    #[test]
    fn format_chain_joins_with_arrows() {
        assert_eq!(
            format_chain(&chain(&["blimp", "purchase"])),
            "BLIMP → PURCHASE"
        );
        assert_eq!(format_chain(&chain(&["blimp"])), "BLIMP");
    }

    #[test]
    fn chain_summary_counts() {
        assert_eq!(
            chain_summary(&chain(&["blimp", "purchase"])),
            "2 words, 13 letters"
        );
        assert_eq!(chain_summary(&chain(&["blimp"])), "1 word, 5 letters");
    }

    #[test]
    fn format_box_lists_sides() {
        let puzzle = LetterBox::new("sbu", "ehp", "cml", "ira").unwrap();
        let text = format_box(&puzzle);

        assert_eq!(
            text,
            "top:    S B U\nleft:   E H P\nbottom: C M L\nright:  I R A"
        );
    }

    #[test]
    fn numbered_pads_to_total() {
        assert_eq!(numbered(1, 9), "1.");
        assert_eq!(numbered(3, 12), " 3.");
        assert_eq!(numbered(12, 12), "12.");
        assert_eq!(numbered(1, 0), "1.");
    }
}
