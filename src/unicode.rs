use std::borrow::Cow;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Letters that only Spanish uses in this classifier, both cases.
#[inline(always)]
pub const fn is_spanish_mark(c: char) -> bool {
    matches!(
        c,
        'ñ' | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ü' | 'Ñ' | 'Á' | 'É' | 'Í' | 'Ó' | 'Ú' | 'Ü'
    )
}

/// The alphabet bigrams are drawn from: lower-case `a-z` plus the Spanish
/// accented vowels and `ñ`. Callers lower-case first.
#[inline(always)]
pub const fn is_bigram_letter(c: char) -> bool {
    matches!(c, 'a'..='z' | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ü' | 'ñ')
}

/// Padding ignored by the length guard: Unicode white space and the byte
/// order mark, which editors leave at the start of saved files.
#[inline(always)]
pub fn is_padding(c: char) -> bool {
    c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// Length of `text` in chars once leading and trailing padding is removed.
#[inline]
pub fn trimmed_len(text: &str) -> usize {
    text.trim_matches(is_padding).chars().count()
}

/// Word characters: any Unicode alphanumeric plus the underscore.
#[inline(always)]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[inline(always)]
fn needs_lowercase(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_uppercase();
    }
    c.to_lowercase().next() != Some(c)
}

/// Lower-case a word, borrowing when it is already lower-case.
#[inline]
pub fn lowercase(word: &str) -> Cow<'_, str> {
    if word.chars().any(needs_lowercase) {
        Cow::Owned(word.to_lowercase())
    } else {
        Cow::Borrowed(word)
    }
}

/// Maximal runs of word characters, in order, exactly as they appear.
#[inline]
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
}

/// Lower-cased word tokens, the shared tokenizer of the stop-word and
/// word-ending analyzers.
#[inline]
pub fn lowercase_words(text: &str) -> impl Iterator<Item = Cow<'_, str>> {
    words(text).map(lowercase)
}

/// The text reduced to bigram letters, lower-cased. Word boundaries are
/// not preserved.
#[inline]
pub fn bigram_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|&c| is_bigram_letter(c))
}
