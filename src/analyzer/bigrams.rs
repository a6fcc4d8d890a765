use crate::{ENG, SPA, unicode::bigram_letters};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BigramScores {
    pub spanish_score: usize,
    pub english_score: usize,
}

/// Slide a two-letter window over the text after reducing it to bigram
/// letters, scoring each window against both lexicons.
///
/// Spaces, digits and punctuation are removed before windowing, so a bigram
/// can straddle two original words. `n` letters give `n - 1` windows.
pub fn analyze_bigrams(text: &str) -> BigramScores {
    let mut scores = BigramScores::default();
    let mut letters = bigram_letters(text);
    let Some(mut prev) = letters.next() else {
        return scores;
    };

    let mut pair = String::with_capacity(8);
    for c in letters {
        pair.clear();
        pair.push(prev);
        pair.push(c);
        if SPA.is_bigram(&pair) {
            scores.spanish_score += 1;
        }
        if ENG.is_bigram(&pair) {
            scores.english_score += 1;
        }
        prev = c;
    }
    scores
}
