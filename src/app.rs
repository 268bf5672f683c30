use crossterm::event::KeyCode;

use crate::data::Dataset;
use crate::engine::{Action, QuizEngine};
use crate::models::Phase;

/// Terminal front end state wrapped around a [`QuizEngine`].
///
/// Holds only what the engine does not: the option cursor and the scroll
/// offset of the result breakdown.
pub struct App {
    engine: QuizEngine,
    cursor: usize,
    result_scroll: usize,
}

impl App {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            engine: QuizEngine::new(dataset),
            cursor: 0,
            result_scroll: 0,
        }
    }

    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    pub fn phase(&self) -> Phase {
        self.engine.state().phase()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    /// Handle a key press. Returns true if the app should exit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
            return true;
        }

        match self.phase() {
            Phase::InProgress => self.handle_quiz_key(key),
            Phase::Finished => self.handle_result_key(key),
        }
        false
    }

    fn handle_quiz_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor_down(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            KeyCode::Char(c @ '1'..='9') => {
                let option = c as usize - '1' as usize;
                if option < self.option_count() {
                    self.cursor = option;
                    self.select(option);
                }
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
                if self.engine.can_go_next() {
                    self.navigate(Action::Next);
                }
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
                if self.engine.can_go_previous() {
                    self.navigate(Action::Previous);
                }
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                if self.engine.is_last_question() {
                    self.engine.dispatch(Action::Submit);
                    self.result_scroll = 0;
                }
            }
            _ => {}
        }
    }

    fn handle_result_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Down | KeyCode::Char('j') => self.scroll_results_down(),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_results_up(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            _ => {}
        }
    }

    fn option_count(&self) -> usize {
        self.engine.current_question().options.len()
    }

    fn move_cursor_down(&mut self) {
        self.cursor = (self.cursor + 1) % self.option_count();
    }

    fn move_cursor_up(&mut self) {
        let count = self.option_count();
        self.cursor = (self.cursor + count - 1) % count;
    }

    fn select(&mut self, option: usize) {
        let question = self.engine.state().current_index;
        self.engine.dispatch(Action::SelectAnswer { question, option });
    }

    fn navigate(&mut self, action: Action) {
        self.engine.dispatch(action);
        self.cursor = self.engine.selected_answer().unwrap_or(0);
    }

    fn scroll_results_down(&mut self) {
        if self.result_scroll + 1 < self.engine.total_questions() {
            self.result_scroll += 1;
        }
    }

    fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    fn restart(&mut self) {
        self.engine.dispatch(Action::Reset);
        self.cursor = 0;
        self.result_scroll = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_dataset;
    use crate::models::QuizState;

    fn app() -> App {
        App::new(builtin_dataset().unwrap())
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert!(!app.handle_key(*key));
        }
    }

    #[test]
    fn test_cursor_wraps_by_option_count() {
        let mut app = app();
        press(&mut app, &[KeyCode::Up]);
        assert_eq!(app.cursor(), 2);
        press(&mut app, &[KeyCode::Down]);
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn test_enter_selects_cursor_option() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('j'), KeyCode::Enter]);
        assert_eq!(app.engine().selected_answer(), Some(1));
    }

    #[test]
    fn test_digit_selects_directly() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('3')]);
        assert_eq!(app.engine().selected_answer(), Some(2));
        assert_eq!(app.cursor(), 2);

        press(&mut app, &[KeyCode::Char('9')]);
        assert_eq!(app.engine().selected_answer(), Some(2));
    }

    #[test]
    fn test_navigation_restores_cursor() {
        let mut app = app();
        press(
            &mut app,
            &[KeyCode::Char('2'), KeyCode::Right, KeyCode::Down, KeyCode::Down],
        );
        assert_eq!(app.engine().state().current_index, 1);
        assert_eq!(app.cursor(), 2);

        press(&mut app, &[KeyCode::Left]);
        assert_eq!(app.engine().state().current_index, 0);
        assert_eq!(app.cursor(), 1);
    }

    #[test]
    fn test_submit_only_on_last_question() {
        let mut app = app();
        press(&mut app, &[KeyCode::Char('s')]);
        assert_eq!(app.phase(), Phase::InProgress);

        press(
            &mut app,
            &[KeyCode::Right, KeyCode::Right, KeyCode::Right, KeyCode::Right],
        );
        assert!(app.engine().is_last_question());
        press(&mut app, &[KeyCode::Char('s')]);
        assert_eq!(app.phase(), Phase::Finished);
        assert_eq!(app.engine().score(), 0);
    }

    #[test]
    fn test_result_scroll_and_restart() {
        let mut app = app();
        press(
            &mut app,
            &[
                KeyCode::Char('2'),
                KeyCode::Right,
                KeyCode::Right,
                KeyCode::Right,
                KeyCode::Char('s'),
            ],
        );
        assert_eq!(app.engine().score(), 25);

        press(&mut app, &[KeyCode::Down; 10]);
        assert_eq!(app.result_scroll(), 3);
        press(&mut app, &[KeyCode::Up]);
        assert_eq!(app.result_scroll(), 2);

        press(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(app.phase(), Phase::InProgress);
        assert_eq!(app.engine().state(), &QuizState::initial(4));
        assert_eq!(app.result_scroll(), 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(app.handle_key(KeyCode::Esc));
    }
}
