/// Which way the last navigation moved. Only used to pick a transition hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Coarse lifecycle of a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Answers can still be selected and questions navigated.
    InProgress,
    /// Submitted. Only a reset leaves this phase.
    Finished,
}

/// Progress through a quiz.
///
/// Values are only produced by [`QuizState::initial`] and the engine's
/// transition function, which keep `current_index` in bounds and every
/// recorded answer valid for its question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    pub current_index: usize,
    /// One slot per question, `None` while unanswered.
    pub answers: Vec<Option<usize>>,
    pub complete: bool,
    pub direction: Direction,
}

impl QuizState {
    /// Fresh state for a quiz with `question_count` questions.
    pub fn initial(question_count: usize) -> Self {
        Self {
            current_index: 0,
            answers: vec![None; question_count],
            complete: false,
            direction: Direction::Forward,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.complete {
            Phase::Finished
        } else {
            Phase::InProgress
        }
    }

    pub fn answer(&self, question_index: usize) -> Option<usize> {
        self.answers.get(question_index).copied().flatten()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = QuizState::initial(3);
        assert_eq!(state.current_index, 0);
        assert_eq!(state.answers, vec![None, None, None]);
        assert!(!state.complete);
        assert_eq!(state.direction, Direction::Forward);
        assert_eq!(state.phase(), Phase::InProgress);
    }

    #[test]
    fn test_answer_lookup() {
        let mut state = QuizState::initial(2);
        state.answers[1] = Some(0);
        assert_eq!(state.answer(0), None);
        assert_eq!(state.answer(1), Some(0));
        assert_eq!(state.answer(5), None);
        assert_eq!(state.answered_count(), 1);
    }
}
