use crate::unicode::is_spanish_mark;

/// Count every `ñ á é í ó ú ü` in `text`, upper or lower case.
#[inline]
pub fn analyze_spanish_characters(text: &str) -> usize {
    text.chars().filter(|&c| is_spanish_mark(c)).count()
}
