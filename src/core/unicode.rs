//! Batak Unicode block helpers

/// First code point of the Batak block (U+1BC0)
const BATAK_BLOCK_START: u32 = 0x1BC0;
/// Last code point of the Batak block (U+1BFF)
const BATAK_BLOCK_END: u32 = 0x1BFF;

/// Punctuation accepted in plain Latin text
const LATIN_PUNCTUATION: &[char] = &['.', ',', '!', '?', '\'', '"', '(', ')', '-'];

/// Whether `c` lies in the Batak block
pub fn is_batak_char(c: char) -> bool {
    (BATAK_BLOCK_START..=BATAK_BLOCK_END).contains(&(c as u32))
}

/// Whether the text contains at least one Batak character
pub fn contains_batak(text: &str) -> bool {
    text.chars().any(is_batak_char)
}

/// Whether the text is plain Latin: ASCII letters, whitespace and basic punctuation
///
/// The empty string counts as Latin text.
pub fn is_latin_text(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || LATIN_PUNCTUATION.contains(&c))
}
