use crate::models::Question;

/// Number of questions whose recorded answer matches the correct option.
///
/// Unset slots never match. Questions without a slot count as unset and
/// surplus slots are ignored.
pub fn correct_count(answers: &[Option<usize>], questions: &[Question]) -> usize {
    questions
        .iter()
        .zip(answers.iter().copied().chain(std::iter::repeat(None)))
        .filter(|(question, answer)| answer.is_some_and(|a| question.is_correct(a)))
        .count()
}

/// Percentage of questions answered correctly, in `0..=100`.
///
/// Unanswered questions stay in the denominator. The ratio is rounded half
/// up, so 37.5% scores 38 and 12.5% scores 13. An empty question list
/// scores 0.
pub fn score(answers: &[Option<usize>], questions: &[Question]) -> u32 {
    let total = questions.len();
    if total == 0 {
        return 0;
    }

    let correct = correct_count(answers, questions);
    // round(correct / total * 100) == floor((200 * correct + total) / (2 * total))
    ((200 * correct + total) / (2 * total)) as u32
}
