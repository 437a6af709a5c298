//! Score helpers shared by the quiz and progress display

use serde::{Deserialize, Serialize};

/// Learner level derived from a 0-100 score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ProgressLevel {
    /// <30 beginner, <70 intermediate, otherwise advanced
    pub fn from_score(score: u32) -> Self {
        if score < 30 {
            ProgressLevel::Beginner
        } else if score < 70 {
            ProgressLevel::Intermediate
        } else {
            ProgressLevel::Advanced
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressLevel::Beginner => "beginner",
            ProgressLevel::Intermediate => "intermediate",
            ProgressLevel::Advanced => "advanced",
        }
    }
}

/// Rounded percentage of correct answers, 0 when nothing was answered
pub fn calculate_accuracy(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((correct as f64 / total as f64) * 100.0).round() as u32
}

/// Seconds as `m:ss`
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
