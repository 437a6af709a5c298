//! Preference file load/save (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::converter::Direction;
use crate::quiz::QuizMode;

/// Persisted user preferences
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Preferences {
    /// Last used conversion direction
    #[serde(default)]
    pub direction: Direction,
    /// Last used quiz mode
    #[serde(default)]
    pub quiz_mode: QuizMode,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            direction: Direction::LatinToScript,
            quiz_mode: QuizMode::GuessLatin,
        }
    }
}

/// Preference file path: ~/.config/halakhita/preferences.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME unset or unusable: fall back to /var/tmp
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("halakhita").join("preferences.json")
}

/// Loads preferences (defaults when the file is missing or invalid)
pub fn load_preferences() -> Preferences {
    load_preferences_from(&config_path())
}

pub fn load_preferences_from(path: &Path) -> Preferences {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("invalid preference file {}: {}", path.display(), e);
            Preferences::default()
        }),
        Err(e) => {
            log::debug!("no preference file at {}: {}", path.display(), e);
            Preferences::default()
        }
    }
}

/// Saves preferences
pub fn save_preferences(prefs: &Preferences) -> Result<(), String> {
    save_preferences_to(&config_path(), prefs)
}

pub fn save_preferences_to(path: &Path, prefs: &Preferences) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("failed to create config directory: {}", e))?;
    }
    let json = serde_json::to_string_pretty(prefs).map_err(|e| format!("failed to serialize preferences: {}", e))?;
    fs::write(path, json).map_err(|e| format!("failed to write preference file: {}", e))?;
    Ok(())
}
