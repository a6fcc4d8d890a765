use crate::{ENG, SPA, unicode::lowercase_words};
use serde::Serialize;

/// Words this short are skipped by the ending analyzer.
pub const MIN_WORD_CHARS: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EndingCounts {
    pub spanish_ending_count: usize,
    pub english_ending_count: usize,
}

/// Count suffix matches on words longer than three characters.
///
/// Every suffix in a lexicon is tested against every qualifying word, so a
/// word matching two overlapping suffixes adds two.
pub fn analyze_word_endings(text: &str) -> EndingCounts {
    lowercase_words(text)
        .filter(|word| word.chars().count() >= MIN_WORD_CHARS)
        .fold(EndingCounts::default(), |mut acc, word| {
            acc.spanish_ending_count += SPA.ending_matches(&word);
            acc.english_ending_count += ENG.ending_matches(&word);
            acc
        })
}
