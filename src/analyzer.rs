//! Lexical feature analyzers.
//!
//! Each analyzer is a pure function over the raw input and is independent of
//! the others: they share no state and may run in any order. The decision
//! engine in [`crate::detector`] is the only place their outputs meet.
//!
//! | analyzer            | signal                                  |
//! |---------------------|-----------------------------------------|
//! | [`characters`]      | Spanish-only letters (`ñ`, accents)     |
//! | [`stop_words`]      | high-frequency grammatical words        |
//! | [`bigrams`]         | two-letter sequences over the letters   |
//! | [`endings`]         | common word suffixes                    |

pub mod bigrams;
pub mod characters;
pub mod endings;
pub mod stop_words;

pub use bigrams::{BigramScores, analyze_bigrams};
pub use characters::analyze_spanish_characters;
pub use endings::{EndingCounts, analyze_word_endings};
pub use stop_words::{StopWordCounts, analyze_stop_words};

use serde::Serialize;

/// Raw output of all four analyzers for one input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeatureCounts {
    pub spanish_chars: usize,
    pub stop_words: StopWordCounts,
    pub bigrams: BigramScores,
    pub endings: EndingCounts,
}

impl FeatureCounts {
    /// Run every analyzer over `text`.
    pub fn extract(text: &str) -> Self {
        Self {
            spanish_chars: analyze_spanish_characters(text),
            stop_words: analyze_stop_words(text),
            bigrams: analyze_bigrams(text),
            endings: analyze_word_endings(text),
        }
    }
}
