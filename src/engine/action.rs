/// Everything the presentation layer can ask the engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Record `option` as the answer to `question`, replacing any earlier one.
    SelectAnswer { question: usize, option: usize },
    /// Advance to the next question.
    Next,
    /// Go back to the previous question.
    Previous,
    /// Finish the quiz, freezing answers as they are.
    Submit,
    /// Start over from the first question with no answers.
    Reset,
}
