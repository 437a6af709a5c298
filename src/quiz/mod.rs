//! Aksara Batak practice quiz
//!
//! Questions are drawn from the same glyph table the converter uses.
//! Randomness is injected, so a seeded RNG gives reproducible quizzes:
//!
//! ```
//! use halakhita::core::glyph::GlyphTable;
//! use halakhita::quiz::{QuizMode, QuizSession};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut session = QuizSession::new(GlyphTable::reference(), QuizMode::GuessLatin, &mut rng);
//! let correct = session.question().unwrap().correct.clone();
//! assert!(session.answer(&correct).unwrap().correct);
//! assert_eq!(session.accuracy(), 100);
//! ```

mod generator;
mod scoring;
mod session;

pub use generator::{generate_question, QuizMode, QuizQuestion, OPTION_COUNT};
pub use scoring::{calculate_accuracy, format_time, ProgressLevel};
pub use session::{AnswerOutcome, QuizSession};
