//! # knowledge-quiz
//!
//! A multiple-choice quiz engine with a terminal front end.
//!
//! The [`engine`] module holds the navigation state machine and scoring; it
//! has no terminal dependencies and can back any front end.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use knowledge_quiz::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load questions from a JSON file
//!     let quiz = Quiz::from_json("questions.json")?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Driving the engine directly:
//!
//! ```rust
//! use knowledge_quiz::builtin_dataset;
//! use knowledge_quiz::engine::{Action, QuizEngine};
//!
//! let mut engine = QuizEngine::new(builtin_dataset().unwrap());
//! engine.dispatch(Action::SelectAnswer { question: 0, option: 1 });
//! engine.dispatch(Action::Submit);
//! assert_eq!(engine.score(), 25);
//! ```

mod app;
mod data;
pub mod engine;
mod models;
pub mod terminal;
#[cfg(test)]
mod test_log;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyEventKind};

pub use app::App;
pub use data::{
    builtin_dataset, load_questions_from_json, Dataset, DatasetError, LoadError, MIN_OPTIONS,
};
pub use models::{Direction, Phase, Question, QuizState};

/// Error type for quiz operations.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    /// Error loading questions.
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),
    /// IO error during quiz execution.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz from a validated dataset.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            app: App::new(dataset),
        }
    }

    /// Create a quiz over the built-in questions.
    pub fn builtin() -> Result<Self, QuizError> {
        Ok(Self::new(builtin_dataset()?))
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file containing questions.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use knowledge_quiz::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let dataset = load_questions_from_json(path)?;
        Ok(Self::new(dataset))
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut session = terminal::TerminalSession::enter()?;
        run_event_loop(session.terminal(), &mut self.app)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::QuizTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if app.handle_key(key.code) {
                break;
            }
        }
    }

    Ok(())
}
