//! Latin ↔ Batak lookup indices
//!
//! Both indices are built once from an ordered entry slice. When two
//! entries share a key the later one wins.

use std::collections::HashMap;

use super::glyph::GlyphEntry;

/// Lowercase Latin key -> Batak glyph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardIndex {
    map: HashMap<String, String>,
    /// Longest key, in chars
    max_key_len: usize,
}

impl ForwardIndex {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// Longest key length present in the table (in chars)
    pub fn max_key_len(&self) -> usize {
        self.max_key_len
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Batak glyph -> Latin key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseIndex {
    map: HashMap<String, String>,
}

impl ReverseIndex {
    pub fn get(&self, glyph: &str) -> Option<&str> {
        self.map.get(glyph).map(String::as_str)
    }

    /// Single-character lookup used by the reverse scan
    pub fn get_char(&self, c: char) -> Option<&str> {
        let mut buf = [0u8; 4];
        self.get(c.encode_utf8(&mut buf))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Builds the Latin -> Batak index (last write wins)
pub fn build_forward_index(entries: &[GlyphEntry]) -> ForwardIndex {
    let mut map = HashMap::with_capacity(entries.len());
    let mut max_key_len = 0;

    for entry in entries {
        let key = entry.latin_char.to_lowercase();
        max_key_len = max_key_len.max(key.chars().count());
        if let Some(previous) = map.insert(key, entry.script_char.clone()) {
            log::debug!(
                "latin key '{}' redefined by '{}' (was {:?})",
                entry.latin_char.to_lowercase(),
                entry.id,
                previous
            );
        }
    }

    ForwardIndex { map, max_key_len }
}

/// Builds the Batak -> Latin index (last write wins)
pub fn build_reverse_index(entries: &[GlyphEntry]) -> ReverseIndex {
    let mut map = HashMap::with_capacity(entries.len());

    for entry in entries {
        if let Some(previous) = map.insert(entry.script_char.clone(), entry.latin_char.clone()) {
            log::debug!(
                "glyph {:?} redefined by '{}' (was '{}')",
                entry.script_char,
                entry.id,
                previous
            );
        }
    }

    ReverseIndex { map }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::glyph::{Category, GlyphTable};

    #[test]
    fn test_forward_index_reference() {
        let index = build_forward_index(GlyphTable::reference().entries());
        assert_eq!(index.len(), 22);
        assert_eq!(index.max_key_len(), 3);
        assert_eq!(index.get("ha"), Some("\u{1BC2}"));
        assert_eq!(index.get("nya"), Some("\u{1BD8}\u{1BF0}"));
        assert_eq!(index.get("HA"), None); // keys are stored lowercase
    }

    #[test]
    fn test_forward_keys_lowercased() {
        let entries = vec![GlyphEntry::new("ka", "K", "KA", Category::Consonant)];
        let index = build_forward_index(&entries);
        assert_eq!(index.get("ka"), Some("K"));
        assert_eq!(index.get("KA"), None);
    }

    #[test]
    fn test_forward_last_write_wins() {
        let entries = vec![
            GlyphEntry::new("first", "X", "ta", Category::Consonant),
            GlyphEntry::new("second", "Y", "TA", Category::Consonant),
        ];
        let index = build_forward_index(&entries);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("ta"), Some("Y"));
    }

    #[test]
    fn test_reverse_last_write_wins() {
        // ya and o share U+1BE8; o comes later
        let index = build_reverse_index(GlyphTable::reference().entries());
        assert_eq!(index.get("\u{1BE8}"), Some("o"));
        assert_eq!(index.get_char('\u{1BE8}'), Some("o"));
        assert_eq!(index.len(), 21);
    }

    #[test]
    fn test_reverse_multi_char_key() {
        let index = build_reverse_index(GlyphTable::reference().entries());
        assert_eq!(index.get("\u{1BD8}\u{1BF0}"), Some("nya"));
        assert_eq!(index.get_char('\u{1BD8}'), Some("sa"));
        assert_eq!(index.get_char('\u{1BF0}'), None);
    }

    #[test]
    fn test_max_key_len_from_data() {
        let entries = vec![
            GlyphEntry::new("a", "1", "a", Category::Vowel),
            GlyphEntry::new("ngga", "2", "ngga", Category::Consonant),
        ];
        assert_eq!(build_forward_index(&entries).max_key_len(), 4);
        assert_eq!(build_forward_index(&[]).max_key_len(), 0);
    }
}
