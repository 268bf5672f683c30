use crate::data::Dataset;
use crate::models::{Direction, QuizState};

use super::Action;

/// Apply `action` to `state`, returning the resulting state.
///
/// Actions whose precondition does not hold return an unchanged copy. Once
/// the quiz is complete only [`Action::Reset`] has an effect.
pub fn transition(dataset: &Dataset, state: &QuizState, action: Action) -> QuizState {
    match action {
        Action::Reset => QuizState::initial(dataset.len()),
        _ if state.complete => state.clone(),
        Action::SelectAnswer { question, option } => {
            select_answer(dataset, state, question, option)
        }
        Action::Next if state.current_index < dataset.last_index() => QuizState {
            current_index: state.current_index + 1,
            direction: Direction::Forward,
            ..state.clone()
        },
        Action::Previous if state.current_index > 0 => QuizState {
            current_index: state.current_index - 1,
            direction: Direction::Backward,
            ..state.clone()
        },
        Action::Next | Action::Previous => state.clone(),
        Action::Submit => QuizState {
            complete: true,
            ..state.clone()
        },
    }
}

fn select_answer(
    dataset: &Dataset,
    state: &QuizState,
    question: usize,
    option: usize,
) -> QuizState {
    let valid = dataset.get(question).is_some_and(|q| q.has_option(option))
        && question < state.answers.len();

    debug_assert!(
        valid,
        "answer {} selected for question {} is out of range",
        option, question
    );

    if !valid {
        log::warn!(
            "Ignoring answer {} for question {}: out of range",
            option,
            question
        );
        return state.clone();
    }

    let mut next = state.clone();
    next.answers[question] = Some(option);
    next
}
