pub mod data;

use phf::Set;
use std::hash::{Hash, Hasher};

/// A language the classifier has a lexicon for.
///
/// Every `Lang` constant points straight at its static [`Lexicon`], so the
/// accessors below are plain field reads with no table lookup.
#[derive(Debug, Clone, Copy)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
    pub lexicon: &'static Lexicon,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Resolve a three-letter code ("SPA", "eng", ...) case-insensitively.
    pub fn from_code(code: &str) -> Option<Lang> {
        data::LANG_TABLE.get(code.to_uppercase().as_str()).copied()
    }

    #[inline(always)]
    pub fn stop_words(&self) -> &'static Set<&'static str> {
        &self.lexicon.stop_words
    }

    #[inline(always)]
    pub fn bigrams(&self) -> &'static Set<&'static str> {
        &self.lexicon.bigrams
    }

    #[inline(always)]
    pub fn endings(&self) -> &'static [&'static str] {
        self.lexicon.endings
    }

    /// `word` must already be lower-cased.
    #[inline(always)]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.lexicon.stop_words.contains(word)
    }

    #[inline(always)]
    pub fn is_bigram(&self, pair: &str) -> bool {
        self.lexicon.bigrams.contains(pair)
    }

    /// Number of suffixes in this lexicon that `word` ends with.
    /// Overlapping suffixes are all counted.
    #[inline]
    pub fn ending_matches(&self, word: &str) -> usize {
        self.lexicon
            .endings
            .iter()
            .filter(|ending| word.ends_with(**ending))
            .count()
    }
}

impl PartialEq for Lang {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Lang {}

impl Hash for Lang {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

/// Static word lists for one language. All entries are lower-case.
#[derive(Debug)]
pub struct Lexicon {
    pub stop_words: Set<&'static str>,
    pub bigrams: Set<&'static str>,
    pub endings: &'static [&'static str],
}
