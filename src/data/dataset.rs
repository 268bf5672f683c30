use std::collections::HashSet;
use std::ops::Deref;

use crate::models::Question;

/// Minimum number of options a question must offer.
pub const MIN_OPTIONS: usize = 2;

/// Reasons a question list cannot back a quiz.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    #[error("dataset contains no questions")]
    Empty,

    #[error("question {id} has {count} option(s), at least {min} are required", min = MIN_OPTIONS)]
    TooFewOptions { id: u32, count: usize },

    #[error("question {id} marks option {index} as correct but only has {count} option(s)")]
    CorrectOptionOutOfRange { id: u32, index: usize, count: usize },

    #[error("question id {0} is used more than once")]
    DuplicateId(u32),
}

/// An ordered, validated and immutable list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    questions: Vec<Question>,
}

impl Dataset {
    /// Validate `questions` and wrap them.
    ///
    /// Fails on the first violation found, scanning in question order.
    pub fn new(questions: Vec<Question>) -> Result<Self, DatasetError> {
        if questions.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(DatasetError::DuplicateId(question.id));
            }

            let count = question.options.len();
            if count < MIN_OPTIONS {
                return Err(DatasetError::TooFewOptions {
                    id: question.id,
                    count,
                });
            }

            if !question.has_option(question.correct_option_index) {
                return Err(DatasetError::CorrectOptionOutOfRange {
                    id: question.id,
                    index: question.correct_option_index,
                    count,
                });
            }
        }

        Ok(Self { questions })
    }

    pub fn last_index(&self) -> usize {
        self.questions.len() - 1
    }
}

impl Deref for Dataset {
    type Target = [Question];

    fn deref(&self) -> &Self::Target {
        &self.questions
    }
}
