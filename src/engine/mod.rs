//! Quiz engine: navigation state machine and scoring.
//!
//! [`transition`] and [`score`] are pure functions. [`QuizEngine`] pairs a
//! validated dataset with the current state and is what a front end holds.

mod action;
mod score;
mod transition;

pub use action::Action;
pub use score::{correct_count, score};
pub use transition::transition;

use crate::data::Dataset;
use crate::models::{Question, QuizState};

pub struct QuizEngine {
    dataset: Dataset,
    state: QuizState,
}

impl QuizEngine {
    pub fn new(dataset: Dataset) -> Self {
        let state = QuizState::initial(dataset.len());
        Self { dataset, state }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// Apply an action and return the new state.
    pub fn dispatch(&mut self, action: Action) -> &QuizState {
        self.state = transition(&self.dataset, &self.state, action);

        log::debug!(
            "{:?} -> question {}, {:?}",
            action,
            self.state.current_index,
            self.state.phase()
        );
        match action {
            Action::Submit => log::info!(
                "Quiz submitted with {}/{} answered, score {}%",
                self.state.answered_count(),
                self.dataset.len(),
                self.score()
            ),
            Action::Reset => log::info!("Quiz reset"),
            _ => {}
        }

        &self.state
    }

    pub fn score(&self) -> u32 {
        score(&self.state.answers, &self.dataset)
    }

    pub fn correct_count(&self) -> usize {
        correct_count(&self.state.answers, &self.dataset)
    }

    pub fn current_question(&self) -> &Question {
        &self.dataset[self.state.current_index]
    }

    pub fn selected_answer(&self) -> Option<usize> {
        self.state.answer(self.state.current_index)
    }

    pub fn total_questions(&self) -> usize {
        self.dataset.len()
    }

    pub fn can_go_previous(&self) -> bool {
        !self.state.complete && self.state.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        !self.state.complete && self.state.current_index < self.dataset.last_index()
    }

    pub fn is_last_question(&self) -> bool {
        self.state.current_index == self.dataset.last_index()
    }

    pub fn has_selected_answer(&self) -> bool {
        self.selected_answer().is_some()
    }

    /// Which questions currently have an answer, in question order.
    pub fn answered_steps(&self) -> Vec<bool> {
        self.state.answers.iter().map(Option::is_some).collect()
    }
}
