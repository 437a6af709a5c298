//! Aksara Batak glyph table
//!
//! The reference table holds the 18 consonants (aksara induk) and the
//! 4 vowel diacritics (anak ni surat). The converter matches the letters
//! only; the quiz, search and audit see every row. It is built once and
//! never mutated.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::audit::TableError;

/// Glyph kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Independent vowel
    Vowel,
    /// Consonant with inherent `a` (aksara induk)
    Consonant,
    /// Vowel diacritic (anak ni surat)
    Modifier,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Vowel => "vowel",
            Category::Consonant => "consonant",
            Category::Modifier => "modifier",
        }
    }
}

/// One row of the glyph table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlyphEntry {
    pub id: String,
    /// One or more Batak code points
    pub script_char: String,
    /// Latin key, matched case-insensitively
    pub latin_char: String,
    pub pronunciation: String,
    #[serde(default)]
    pub stroke_order: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: Category,
}

impl GlyphEntry {
    pub fn new(
        id: impl Into<String>,
        script_char: impl Into<String>,
        latin_char: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            script_char: script_char.into(),
            latin_char: latin_char.into(),
            pronunciation: String::new(),
            stroke_order: Vec::new(),
            description: None,
            category,
        }
    }
}

/// (id, glyph, latin, pronunciation, strokes, description, category)
type RawEntry = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
    &'static str,
    Category,
);

// Order matters: later rows win on index collisions (`ya` and `o` share U+1BE8).
const REFERENCE_ENTRIES: [RawEntry; 22] = [
    ("ha", "\u{1BC2}", "ha", "/ha/", &["horizontal-top", "vertical-left", "horizontal-middle"], "Aksara dasar Ha, sering digunakan sebagai awalan kata", Category::Consonant),
    ("na", "\u{1BC9}", "na", "/na/", &["vertical-left", "horizontal-top", "diagonal"], "Aksara Na, salah satu aksara paling umum", Category::Consonant),
    ("ca", "\u{1BCE}", "ca", "/ʧa/", &["curve-top", "vertical-center", "horizontal-bottom"], "Aksara Ca, digunakan untuk bunyi ch", Category::Consonant),
    ("ra", "\u{1BD2}", "ra", "/ra/", &["horizontal-top", "vertical-left", "curve-right"], "Aksara Ra", Category::Consonant),
    ("ka", "\u{1BCB}", "ka", "/ka/", &["vertical-left", "horizontal-top", "vertical-right"], "Aksara Ka", Category::Consonant),
    ("da", "\u{1BD1}", "da", "/da/", &["horizontal-top", "vertical-left", "horizontal-bottom"], "Aksara Da", Category::Consonant),
    ("ta", "\u{1BD6}", "ta", "/ta/", &["horizontal-top", "vertical-center", "horizontal-bottom"], "Aksara Ta", Category::Consonant),
    ("sa", "\u{1BD8}", "sa", "/sa/", &["curve-top", "vertical-left", "horizontal-bottom"], "Aksara Sa", Category::Consonant),
    ("pa", "\u{1BC7}", "pa", "/pa/", &["vertical-left", "horizontal-top", "horizontal-middle"], "Aksara Pa", Category::Consonant),
    ("wa", "\u{1BE0}", "wa", "/wa/", &["curve-left", "vertical-center", "curve-right"], "Aksara Wa", Category::Consonant),
    ("la", "\u{1BDD}", "la", "/la/", &["vertical-left", "curve-middle", "horizontal-bottom"], "Aksara La", Category::Consonant),
    ("ma", "\u{1BD4}", "ma", "/ma/", &["horizontal-top", "vertical-left", "curve-bottom"], "Aksara Ma", Category::Consonant),
    ("ga", "\u{1BC4}", "ga", "/ga/", &["curve-top", "vertical-left", "horizontal-middle"], "Aksara Ga", Category::Consonant),
    ("ja", "\u{1BD0}", "ja", "/ʤa/", &["horizontal-top", "curve-middle", "vertical-bottom"], "Aksara Ja", Category::Consonant),
    ("nya", "\u{1BD8}\u{1BF0}", "nya", "/ɲa/", &["curve-top", "vertical-left", "dot-top"], "Aksara Nya", Category::Consonant),
    ("nga", "\u{1BC5}", "nga", "/ŋa/", &["curve-full", "vertical-center"], "Aksara Nga", Category::Consonant),
    ("ba", "\u{1BC6}", "ba", "/ba/", &["vertical-left", "horizontal-top", "curve-bottom"], "Aksara Ba", Category::Consonant),
    ("ya", "\u{1BE8}", "ya", "/ja/", &["curve-left", "vertical-right", "horizontal-bottom"], "Aksara Ya", Category::Consonant),
    ("i", "\u{1BE4}", "i", "/i/", &["dot-top"], "Anak ni surat untuk bunyi i", Category::Modifier),
    ("o", "\u{1BE8}", "o", "/o/", &["curve-above"], "Anak ni surat untuk bunyi o", Category::Modifier),
    ("u", "\u{1BE9}", "u", "/u/", &["curve-below"], "Anak ni surat untuk bunyi u", Category::Modifier),
    ("e", "\u{1BE6}", "e", "/e/", &["horizontal-above"], "Anak ni surat untuk bunyi e", Category::Modifier),
];

lazy_static! {
    static ref REFERENCE_TABLE: GlyphTable = GlyphTable::new(
        REFERENCE_ENTRIES
            .iter()
            .map(|&(id, script, latin, pronunciation, strokes, description, category)| GlyphEntry {
                id: id.to_string(),
                script_char: script.to_string(),
                latin_char: latin.to_string(),
                pronunciation: pronunciation.to_string(),
                stroke_order: strokes.iter().map(|s| s.to_string()).collect(),
                description: Some(description.to_string()),
                category,
            })
            .collect(),
    );
}

/// Ordered, read-only sequence of glyph entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphTable {
    entries: Vec<GlyphEntry>,
}

impl GlyphTable {
    pub fn new(entries: Vec<GlyphEntry>) -> Self {
        Self { entries }
    }

    /// The shipped Aksara Batak table
    pub fn reference() -> &'static GlyphTable {
        &REFERENCE_TABLE
    }

    /// Loads a table from a JSON file
    ///
    /// # File format
    /// ```json
    /// [
    ///   { "id": "ha", "scriptChar": "ᯂ", "latinChar": "ha",
    ///     "pronunciation": "/ha/", "category": "consonant" }
    /// ]
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let entries: Vec<GlyphEntry> =
            serde_json::from_reader(reader).map_err(|e| TableError::Parse(e.to_string()))?;
        Self::from_entries(entries)
    }

    /// Parses a table from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, TableError> {
        let entries: Vec<GlyphEntry> =
            serde_json::from_str(json_str).map_err(|e| TableError::Parse(e.to_string()))?;
        Self::from_entries(entries)
    }

    fn from_entries(entries: Vec<GlyphEntry>) -> Result<Self, TableError> {
        if entries.is_empty() {
            return Err(TableError::Empty);
        }
        Ok(Self::new(entries))
    }

    pub fn entries(&self) -> &[GlyphEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GlyphEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry by id
    pub fn get(&self, id: &str) -> Option<&GlyphEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn by_category(&self, category: Category) -> Vec<&GlyphEntry> {
        self.entries.iter().filter(|e| e.category == category).collect()
    }

    /// Letters the converter matches: every row except the diacritics
    pub fn alphabet(&self) -> Vec<&GlyphEntry> {
        self.entries.iter().filter(|e| e.category != Category::Modifier).collect()
    }

    /// Substring search over Latin key, glyph and description
    ///
    /// Latin key and description are matched case-insensitively; the glyph
    /// is matched as-is.
    pub fn search(&self, query: &str) -> Vec<&GlyphEntry> {
        let lowered = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.latin_char.to_lowercase().contains(&lowered)
                    || e.script_char.contains(query)
                    || e
                        .description
                        .as_ref()
                        .map(|d| d.to_lowercase().contains(&lowered))
                        .unwrap_or(false)
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a GlyphTable {
    type Item = &'a GlyphEntry;
    type IntoIter = std::slice::Iter<'a, GlyphEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
