mod question;
mod state;

pub use question::Question;
pub use state::{Direction, Phase, QuizState};
