use crate::lang::{Lang, Lexicon};

use paste::paste;
use phf::{Map, phf_map, phf_set};

/// ---------------------------------------------------------------------------
///    Macro – generates everything from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_lexicons {
($(
        $code:ident, $code_str:literal, $name:literal,
        stop_words: [ $($sw:literal),* $(,)? ],
        bigrams: [ $($bg:literal),* $(,)? ],
        endings: [ $($end:literal),* $(,)? ]
    ),* $(,)?) => {
        // Per-language static lexicons
        $(
            paste! {
                static [<$code _LEXICON>]: Lexicon = Lexicon {
                    stop_words: phf_set! { $($sw),* },
                    bigrams: phf_set! { $($bg),* },
                    endings: &[$($end),*],
                };

                pub const $code: Lang = Lang {
                    code: $code_str,
                    name: $name,
                    lexicon: &[<$code _LEXICON>],
                };
            }
        )*

        // Global lookup table (public)
        pub static LANG_TABLE: Map<&'static str, Lang> = phf_map! {
            $(
                $code_str => $code,
            )*
        };

        static ALL_LANGS: &[Lang] = &[$($code),*];
    };
}

// ---------------------------------------------------------------------------
//    Lexicons (single source of truth)
//    Entries are lower-case and unique; phf rejects duplicate keys at build time.
// ---------------------------------------------------------------------------
define_lexicons! {
    SPA, "SPA", "Spanish",
    stop_words: [
        "el", "la", "de", "que", "y", "a", "en", "un", "es", "se", "no", "te", "lo", "le",
        "da", "su", "por", "son", "con", "para", "al", "del", "los", "las", "una", "pero",
        "sus", "muy", "ya", "está", "ser", "como", "más", "este", "esta", "año",
        "todo", "también", "había", "fue", "han", "hacer", "puede", "tiempo",
    ],
    bigrams: [
        "es", "en", "de", "la", "el", "ar", "er", "ir", "ón", "ía", "ad", "qu", "ll", "rr",
    ],
    endings: ["ción", "ando", "endo", "ado", "ido", "mente", "dad", "tad"],

    ENG, "ENG", "English",
    stop_words: [
        "the", "be", "to", "of", "and", "a", "in", "that", "have", "i", "it", "for", "not",
        "on", "with", "he", "as", "you", "do", "at", "this", "but", "his", "by", "from",
        "they", "we", "say", "her", "she", "or", "an", "will", "my", "one", "all", "would",
        "there", "their", "what", "so", "up", "out", "if", "about", "who", "get", "which",
    ],
    bigrams: [
        "th", "he", "in", "er", "an", "ed", "nd", "to", "en", "ti", "te", "or", "st", "ar",
    ],
    endings: ["tion", "ing", "ed", "ly", "ness", "ful", "less", "ment"],
}

/// Every language with a lexicon, Spanish first.
#[inline]
pub fn all_langs() -> &'static [Lang] {
    ALL_LANGS
}
