//! Glyph table conformance checks
//!
//! The converter never rejects a table; collisions are resolved by
//! last-write-wins. This module reports them so data defects are visible
//! instead of silently changing conversion results.

use std::collections::{HashMap, HashSet};
use std::fmt;

use super::glyph::GlyphEntry;

/// Table loading / validation error
#[derive(Debug)]
pub enum TableError {
    /// File read failure
    Io(std::io::Error),
    /// JSON parse failure
    Parse(String),
    /// Table has no entries
    Empty,
    /// Keys or glyphs are not unique
    NotInjective(Vec<TableIssue>),
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Io(e) => write!(f, "failed to read glyph table: {}", e),
            TableError::Parse(s) => write!(f, "invalid glyph table JSON: {}", s),
            TableError::Empty => write!(f, "glyph table is empty"),
            TableError::NotInjective(issues) => {
                write!(f, "glyph table is not injective: ")?;
                for (i, issue) in issues.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", issue)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for TableError {}

impl From<std::io::Error> for TableError {
    fn from(e: std::io::Error) -> Self {
        TableError::Io(e)
    }
}

/// A single finding of [`audit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableIssue {
    /// Two entries share an id
    DuplicateId { id: String },
    /// Two entries share a (lowercased) Latin key; `second` wins in the forward index
    DuplicateLatinKey {
        key: String,
        first: String,
        second: String,
    },
    /// Two entries share a glyph; `second` wins in the reverse index
    DuplicateGlyph {
        glyph: String,
        first: String,
        second: String,
    },
    /// Glyph spans several code points and can never be matched by the
    /// single-character reverse scan
    UnreachableGlyph { id: String, glyph: String },
}

impl TableIssue {
    /// Whether the issue breaks key/glyph uniqueness
    pub fn breaks_injectivity(&self) -> bool {
        matches!(
            self,
            TableIssue::DuplicateLatinKey { .. } | TableIssue::DuplicateGlyph { .. }
        )
    }
}

impl fmt::Display for TableIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableIssue::DuplicateId { id } => write!(f, "duplicate id '{}'", id),
            TableIssue::DuplicateLatinKey { key, first, second } => {
                write!(f, "latin key '{}' used by '{}' and '{}'", key, first, second)
            }
            TableIssue::DuplicateGlyph { glyph, first, second } => write!(
                f,
                "glyph {} ({}) used by '{}' and '{}'",
                glyph,
                codepoints(glyph),
                first,
                second
            ),
            TableIssue::UnreachableGlyph { id, glyph } => write!(
                f,
                "glyph {} ({}) of '{}' spans several code points",
                glyph,
                codepoints(glyph),
                id
            ),
        }
    }
}

/// "U+1BD8 U+1BF0"
fn codepoints(s: &str) -> String {
    s.chars()
        .map(|c| format!("U+{:04X}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reports every uniqueness and reachability problem, in table order
pub fn audit(entries: &[GlyphEntry]) -> Vec<TableIssue> {
    let mut issues = Vec::new();
    let mut ids: HashSet<&str> = HashSet::new();
    let mut keys: HashMap<String, &str> = HashMap::new();
    let mut glyphs: HashMap<&str, &str> = HashMap::new();

    for entry in entries {
        if !ids.insert(entry.id.as_str()) {
            issues.push(TableIssue::DuplicateId {
                id: entry.id.clone(),
            });
        }

        let key = entry.latin_char.to_lowercase();
        if let Some(first) = keys.insert(key.clone(), entry.id.as_str()) {
            issues.push(TableIssue::DuplicateLatinKey {
                key,
                first: first.to_string(),
                second: entry.id.clone(),
            });
        }

        if let Some(first) = glyphs.insert(entry.script_char.as_str(), entry.id.as_str()) {
            issues.push(TableIssue::DuplicateGlyph {
                glyph: entry.script_char.clone(),
                first: first.to_string(),
                second: entry.id.clone(),
            });
        }

        if entry.script_char.chars().count() > 1 {
            issues.push(TableIssue::UnreachableGlyph {
                id: entry.id.clone(),
                glyph: entry.script_char.clone(),
            });
        }
    }

    issues
}

/// Fails when any Latin key or glyph is shared between entries
pub fn ensure_injective(entries: &[GlyphEntry]) -> Result<(), TableError> {
    let violations: Vec<TableIssue> = audit(entries)
        .into_iter()
        .filter(TableIssue::breaks_injectivity)
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        for issue in &violations {
            log::warn!("glyph table: {}", issue);
        }
        Err(TableError::NotInjective(violations))
    }
}
