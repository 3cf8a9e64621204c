//! Question / answer pairs for the FAQ page

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of question categories
///
/// Declaration order is the order categories appear in the FAQ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QuestionCategory {
    Informational,
    Usage,
    Safety,
    Purchase,
    Comparison,
}

impl QuestionCategory {
    /// All categories, in FAQ order
    pub const ALL: [QuestionCategory; 5] = [
        QuestionCategory::Informational,
        QuestionCategory::Usage,
        QuestionCategory::Safety,
        QuestionCategory::Purchase,
        QuestionCategory::Comparison,
    ];

    /// Display name, identical to the serialized form
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionCategory::Informational => "Informational",
            QuestionCategory::Usage => "Usage",
            QuestionCategory::Safety => "Safety",
            QuestionCategory::Purchase => "Purchase",
            QuestionCategory::Comparison => "Comparison",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A categorized question with its answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub category: QuestionCategory,
    pub question: String,
    pub answer: String,
}

impl Question {
    /// Create a new question
    pub fn new(
        category: QuestionCategory,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            category,
            question: question.into(),
            answer: answer.into(),
        }
    }
}
