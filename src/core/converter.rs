//! Latin ↔ Aksara Batak converter
//!
//! Both directions are total: characters without a table entry are copied
//! through unchanged, so every input has a defined output.

use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::glyph::{GlyphEntry, GlyphTable};
use super::index::{build_forward_index, build_reverse_index, ForwardIndex, ReverseIndex};
use super::unicode::contains_batak;

/// Word delimiter for Latin input. Only the ASCII space splits words.
const WORD_DELIMITER: char = ' ';

lazy_static! {
    static ref REFERENCE_TRANSLITERATOR: Transliterator = Transliterator::from(GlyphTable::reference());
}

/// Conversion direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "latin-to-batak")]
    LatinToScript,
    #[serde(rename = "batak-to-latin")]
    ScriptToLatin,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::LatinToScript => Direction::ScriptToLatin,
            Direction::ScriptToLatin => Direction::LatinToScript,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::LatinToScript => "latin-to-batak",
            Direction::ScriptToLatin => "batak-to-latin",
        }
    }

    /// Guesses the direction from the text: Batak input converts to Latin
    pub fn detect(text: &str) -> Self {
        if contains_batak(text) {
            Direction::ScriptToLatin
        } else {
            Direction::LatinToScript
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Latin -> Batak, longest key first
///
/// The input is lowercased and split on spaces; each word is scanned left
/// to right trying keys from `max_key_len` down to 1 char. A match emits
/// the glyph and skips the key, otherwise the char is copied through.
/// Matches never cross a space.
pub fn to_script(text: &str, index: &ForwardIndex) -> String {
    let lowered = text.to_lowercase();
    let mut result = String::with_capacity(lowered.len() * 3);

    for (i, word) in lowered.split(WORD_DELIMITER).enumerate() {
        if i > 0 {
            result.push(WORD_DELIMITER);
        }
        convert_word(word, index, &mut result);
    }

    result
}

fn convert_word(word: &str, index: &ForwardIndex, out: &mut String) {
    let chars: Vec<char> = word.chars().collect();
    let mut key = String::with_capacity(index.max_key_len() * 4);
    let mut pos = 0;

    'scan: while pos < chars.len() {
        let longest = index.max_key_len().min(chars.len() - pos);
        for len in (1..=longest).rev() {
            key.clear();
            key.extend(&chars[pos..pos + len]);
            if let Some(glyph) = index.get(&key) {
                out.push_str(glyph);
                pos += len;
                continue 'scan;
            }
        }
        // no key matched: copy through
        out.push(chars[pos]);
        pos += 1;
    }
}

/// Batak -> Latin, one char at a time
///
/// Glyphs spanning several code points are never matched as a unit.
pub fn to_latin(text: &str, index: &ReverseIndex) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match index.get_char(c) {
            Some(latin) => result.push_str(latin),
            None => result.push(c),
        }
    }

    result
}

/// Swaps the converter buffers verbatim without reconverting
pub fn toggle_direction(input: String, output: String) -> (String, String) {
    (output, input)
}

/// A set of letters together with both lookup indices built from it
#[derive(Debug, Clone)]
pub struct Transliterator {
    table: GlyphTable,
    forward: ForwardIndex,
    reverse: ReverseIndex,
}

impl Transliterator {
    pub fn new(entries: &[GlyphEntry]) -> Self {
        Self {
            table: GlyphTable::new(entries.to_vec()),
            forward: build_forward_index(entries),
            reverse: build_reverse_index(entries),
        }
    }

    /// Shared instance over the reference alphabet
    pub fn reference() -> &'static Transliterator {
        &REFERENCE_TRANSLITERATOR
    }

    pub fn to_script(&self, text: &str) -> String {
        to_script(text, &self.forward)
    }

    pub fn to_latin(&self, text: &str) -> String {
        to_latin(text, &self.reverse)
    }

    pub fn convert(&self, text: &str, direction: Direction) -> String {
        match direction {
            Direction::LatinToScript => self.to_script(text),
            Direction::ScriptToLatin => self.to_latin(text),
        }
    }

    pub fn table(&self) -> &GlyphTable {
        &self.table
    }
}

/// Indexes the table's alphabet; diacritic rows are left out
impl From<&GlyphTable> for Transliterator {
    fn from(table: &GlyphTable) -> Self {
        let letters: Vec<GlyphEntry> = table.alphabet().into_iter().cloned().collect();
        Self::new(&letters)
    }
}

/// Latin -> Batak with the reference table
pub fn convert_to_script(text: &str) -> String {
    Transliterator::reference().to_script(text)
}

/// Batak -> Latin with the reference table
pub fn convert_to_latin(text: &str) -> String {
    Transliterator::reference().to_latin(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::glyph::Category;

    #[test]
    fn test_basic_conversion() {
        assert_eq!(convert_to_script("ha"), "\u{1BC2}");
        assert_eq!(convert_to_script("na"), "\u{1BC9}");
        assert_eq!(convert_to_script("hana"), "\u{1BC2}\u{1BC9}");
    }

    #[test]
    fn test_horas() {
        // h, o and s are not letters of the alphabet
        assert_eq!(convert_to_script("horas"), "ho\u{1BD2}s");
    }

    #[test]
    fn test_diacritics_not_matched() {
        assert_eq!(convert_to_script("asi ni roha"), "asi ni ro\u{1BC2}");
        assert_eq!(convert_to_script("i o u e"), "i o u e");
    }

    #[test]
    fn test_three_letter_keys() {
        assert_eq!(convert_to_script("nyanga"), "\u{1BD8}\u{1BF0}\u{1BC5}");
        assert_eq!(convert_to_script("batak"), "\u{1BC6}\u{1BD6}k");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(convert_to_script("HA"), convert_to_script("ha"));
        assert_eq!(convert_to_script("NyA"), "\u{1BD8}\u{1BF0}");
    }

    #[test]
    fn test_word_segmentation() {
        assert_eq!(convert_to_script("ha na"), "\u{1BC2} \u{1BC9}");
        assert_eq!(
            convert_to_script("ha na"),
            format!("{} {}", convert_to_script("ha"), convert_to_script("na"))
        );
    }

    #[test]
    fn test_spaces_preserved() {
        assert_eq!(convert_to_script("  ha  "), "  \u{1BC2}  ");
        assert_eq!(convert_to_script(" "), " ");
    }

    #[test]
    fn test_match_does_not_cross_words() {
        // n and ya stay apart across the space
        assert_eq!(convert_to_script("n ya"), "n \u{1BE8}");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(convert_to_script("xyz123"), "xyz123");
        assert_eq!(convert_to_script("ha1na!"), "\u{1BC2}1\u{1BC9}!");
        assert_eq!(convert_to_script("ha\u{1F600}"), "\u{1BC2}\u{1F600}");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(convert_to_script(""), "");
        assert_eq!(convert_to_latin(""), "");
    }

    #[test]
    fn test_to_latin() {
        assert_eq!(convert_to_latin("\u{1BC2}\u{1BC9}"), "hana");
        assert_eq!(convert_to_latin("\u{1BC6}\u{1BD6}k"), "batak");
        assert_eq!(convert_to_latin("\u{1BC2} 12"), "ha 12");
    }

    #[test]
    fn test_to_latin_shared_glyph() {
        // U+1BE8 is also the o diacritic, which the alphabet leaves out
        assert_eq!(convert_to_latin("\u{1BE8}"), "ya");
        assert_eq!(convert_to_latin("\u{1BE4}"), "\u{1BE4}");
    }

    #[test]
    fn test_reference_uses_alphabet() {
        let t = Transliterator::reference();
        assert_eq!(t.table().len(), 18);
        assert!(t.table().get("o").is_none());
        assert!(t.table().get("ya").is_some());
    }

    #[test]
    fn test_from_table_skips_modifiers() {
        let table = GlyphTable::new(vec![
            GlyphEntry::new("ya", "Y", "ya", Category::Consonant),
            GlyphEntry::new("o", "Y", "o", Category::Modifier),
            GlyphEntry::new("a", "A", "a", Category::Vowel),
        ]);
        let transliterator = Transliterator::from(&table);
        assert_eq!(transliterator.to_script("yao"), "Yo");
        assert_eq!(transliterator.to_latin("YA"), "yaa");
    }

    #[test]
    fn test_to_latin_multi_codepoint_glyph() {
        assert_eq!(convert_to_latin("\u{1BD8}\u{1BF0}"), "sa\u{1BF0}");
    }

    #[test]
    fn test_longest_match_fixture() {
        let entries = vec![
            GlyphEntry::new("a", "A", "a", Category::Vowel),
            GlyphEntry::new("ba", "B", "ba", Category::Consonant),
        ];
        let transliterator = Transliterator::new(&entries);
        assert_eq!(transliterator.to_script("ba"), "B");
        assert_eq!(transliterator.to_script("bba"), "bB");
        assert_eq!(transliterator.to_script("aba"), "AB");
    }

    #[test]
    fn test_longest_match_prefers_three() {
        let entries = vec![
            GlyphEntry::new("n", "1", "n", Category::Consonant),
            GlyphEntry::new("ng", "2", "ng", Category::Consonant),
            GlyphEntry::new("nga", "3", "nga", Category::Consonant),
        ];
        let transliterator = Transliterator::new(&entries);
        assert_eq!(transliterator.to_script("nga"), "3");
        assert_eq!(transliterator.to_script("ngng"), "22");
        assert_eq!(transliterator.to_script("nn"), "11");
    }

    #[test]
    fn test_empty_table() {
        let transliterator = Transliterator::new(&[]);
        assert_eq!(transliterator.to_script("Horas"), "horas");
        assert_eq!(transliterator.to_latin("\u{1BC2}"), "\u{1BC2}");
    }

    #[test]
    fn test_toggle_direction() {
        let (input, output) = toggle_direction("ha".to_string(), "\u{1BC2}".to_string());
        assert_eq!(input, "\u{1BC2}");
        assert_eq!(output, "ha");
    }

    #[test]
    fn test_direction() {
        assert_eq!(Direction::default(), Direction::LatinToScript);
        assert_eq!(Direction::LatinToScript.flipped(), Direction::ScriptToLatin);
        assert_eq!(Direction::ScriptToLatin.flipped(), Direction::LatinToScript);
        assert_eq!(Direction::detect("horas"), Direction::LatinToScript);
        assert_eq!(Direction::detect("\u{1BC2}"), Direction::ScriptToLatin);
        assert_eq!(Direction::ScriptToLatin.to_string(), "batak-to-latin");

        let json = serde_json::to_string(&Direction::LatinToScript).unwrap();
        assert_eq!(json, "\"latin-to-batak\"");
    }

    #[test]
    fn test_convert_dispatch() {
        let t = Transliterator::reference();
        assert_eq!(t.convert("ha", Direction::LatinToScript), "\u{1BC2}");
        assert_eq!(t.convert("\u{1BC2}", Direction::ScriptToLatin), "ha");
    }
}
