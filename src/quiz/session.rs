//! Running quiz: current question and score

use rand::Rng;

use super::generator::{generate_question, QuizMode, QuizQuestion};
use super::scoring::{calculate_accuracy, ProgressLevel};
use crate::core::glyph::GlyphTable;

/// Result of answering the current question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    /// The expected answer
    pub expected: String,
}

/// Quiz over a glyph table
///
/// Each question accepts a single answer; later answers are ignored until
/// the next question is drawn.
#[derive(Debug, Clone)]
pub struct QuizSession<'t> {
    table: &'t GlyphTable,
    mode: QuizMode,
    question: Option<QuizQuestion>,
    selected: Option<String>,
    score: u32,
    total: u32,
}

impl<'t> QuizSession<'t> {
    /// Starts a session and draws the first question
    pub fn new<R: Rng + ?Sized>(table: &'t GlyphTable, mode: QuizMode, rng: &mut R) -> Self {
        let mut session = Self {
            table,
            mode,
            question: None,
            selected: None,
            score: 0,
            total: 0,
        };
        session.next_question(rng);
        session
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    /// Current question (`None` only for an empty table)
    pub fn question(&self) -> Option<&QuizQuestion> {
        self.question.as_ref()
    }

    /// Option picked for the current question
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    /// Answers the current question
    ///
    /// Returns `None` when there is no question or it was already answered.
    pub fn answer(&mut self, option: &str) -> Option<AnswerOutcome> {
        if self.is_answered() {
            return None;
        }
        let question = self.question.as_ref()?;

        let correct = question.is_correct(option);
        self.selected = Some(option.to_string());
        self.total += 1;
        if correct {
            self.score += 1;
        }

        Some(AnswerOutcome {
            correct,
            expected: question.correct.clone(),
        })
    }

    /// Draws a new question, keeping the score
    pub fn next_question<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.question = generate_question(self.table.entries(), self.mode, rng);
        self.selected = None;
    }

    /// Clears the score and draws a new question
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.score = 0;
        self.total = 0;
        self.next_question(rng);
    }

    /// Switches mode; the score restarts
    pub fn set_mode<R: Rng + ?Sized>(&mut self, mode: QuizMode, rng: &mut R) {
        self.mode = mode;
        self.reset(rng);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Rounded percentage of correct answers
    pub fn accuracy(&self) -> u32 {
        calculate_accuracy(self.score, self.total)
    }

    pub fn level(&self) -> ProgressLevel {
        ProgressLevel::from_score(self.accuracy())
    }
}
