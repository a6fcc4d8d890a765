use crate::{ENG, SPA, unicode::lowercase_words};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StopWordCounts {
    pub spanish_count: usize,
    pub english_count: usize,
}

/// Count stop-word tokens per language.
///
/// Tokens are not deduplicated, and a token found in both lexicons
/// (currently only "a") counts once for each.
pub fn analyze_stop_words(text: &str) -> StopWordCounts {
    lowercase_words(text).fold(StopWordCounts::default(), |mut acc, word| {
        if SPA.is_stop_word(&word) {
            acc.spanish_count += 1;
        }
        if ENG.is_stop_word(&word) {
            acc.english_count += 1;
        }
        acc
    })
}
