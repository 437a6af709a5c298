//! Multiple-choice question generation
//!
//! A question shows one side of a random entry and offers its other side
//! among up to three distractors drawn from the same table.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::glyph::GlyphEntry;

/// Options per question, the answer included
pub const OPTION_COUNT: usize = 4;

/// Which side of the entry the player has to name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QuizMode {
    /// Glyph shown, Latin key asked
    #[default]
    #[serde(rename = "latin")]
    GuessLatin,
    /// Latin key shown, glyph asked
    #[serde(rename = "batak")]
    GuessScript,
}

impl QuizMode {
    /// Text shown as the question
    pub fn prompt_of<'a>(&self, entry: &'a GlyphEntry) -> &'a str {
        match self {
            QuizMode::GuessLatin => &entry.script_char,
            QuizMode::GuessScript => &entry.latin_char,
        }
    }

    /// Text expected as the answer
    pub fn answer_of<'a>(&self, entry: &'a GlyphEntry) -> &'a str {
        match self {
            QuizMode::GuessLatin => &entry.latin_char,
            QuizMode::GuessScript => &entry.script_char,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuizMode::GuessLatin => "latin",
            QuizMode::GuessScript => "batak",
        }
    }
}

/// One multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    /// Id of the entry being asked
    pub id: String,
    pub mode: QuizMode,
    pub prompt: String,
    pub correct: String,
    /// Shuffled, pairwise distinct, contains `correct`
    pub options: Vec<String>,
}

impl QuizQuestion {
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct
    }
}

/// Draws a random question from `entries`
///
/// Distractors come from other entries with a different prompt whose
/// displayed text differs from the answer and from each other. Entries
/// sharing the target's glyph (`ya` and `o`) are never offered as
/// distractors for each other. Returns `None` for an empty table.
pub fn generate_question<R: Rng + ?Sized>(
    entries: &[GlyphEntry],
    mode: QuizMode,
    rng: &mut R,
) -> Option<QuizQuestion> {
    let target = entries.choose(rng)?;
    let prompt = mode.prompt_of(target);
    let correct = mode.answer_of(target);

    let mut others: Vec<&GlyphEntry> = entries.iter().filter(|e| e.id != target.id).collect();
    others.shuffle(rng);

    let mut options: Vec<String> = Vec::with_capacity(OPTION_COUNT);
    options.push(correct.to_string());
    for entry in others {
        if options.len() == OPTION_COUNT {
            break;
        }
        if mode.prompt_of(entry) == prompt {
            log::debug!("skipping distractor '{}': same prompt as '{}'", entry.id, target.id);
            continue;
        }
        let text = mode.answer_of(entry);
        if options.iter().any(|o| o == text) {
            log::debug!("skipping distractor '{}': same text as another option", entry.id);
            continue;
        }
        options.push(text.to_string());
    }
    options.shuffle(rng);

    Some(QuizQuestion {
        id: target.id.clone(),
        mode,
        prompt: prompt.to_string(),
        correct: correct.to_string(),
        options,
    })
}
