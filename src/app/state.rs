//! Application state management
//!
//! Owns the active view and the answer record, and turns keyboard events
//! into navigation actions.

use crate::models::{AnswerUpdate, Answers};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

/// Funnel views, entered strictly in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Step-by-step questionnaire
    #[default]
    Quiz,
    /// Simulated profile analysis
    Loading,
    /// Personalised offer page
    Sales,
}

/// Single owner of the current view and the shared answers
#[derive(Debug, Default)]
pub struct ViewController {
    view: View,
    answers: Answers,
    should_quit: bool,
}

impl ViewController {
    /// Start at the quiz with empty answers
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current view
    pub fn view(&self) -> View {
        self.view
    }

    /// Read-only snapshot of the answers
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Apply an update from the quiz; ignored once the quiz is over
    pub fn apply(&mut self, update: AnswerUpdate) {
        if self.view != View::Quiz {
            debug!(?update, view = ?self.view, "ignored answer update outside quiz");
            return;
        }
        self.answers.apply(update);
    }

    /// Quiz -> Loading. Returns false if the quiz is not the active view
    pub fn on_quiz_complete(&mut self) -> bool {
        if self.view != View::Quiz {
            return false;
        }
        self.view = View::Loading;
        info!("view changed to loading");
        true
    }

    /// Loading -> Sales. Returns false if loading is not the active view
    pub fn on_loading_finished(&mut self) -> bool {
        if self.view != View::Loading {
            return false;
        }
        self.view = View::Sales;
        info!("view changed to sales");
        true
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Set the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

/// How printable keys are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Letters are shortcuts
    #[default]
    Navigate,
    /// Letters are typed into an answer
    TextEntry,
}

/// Navigation actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back (Esc)
    Back,
    /// Next item (Tab)
    Next,
    /// Previous item (Shift+Tab)
    Previous,
    /// Quit application (q, Q, Ctrl+C)
    Quit,
    /// Typed character
    Input(char),
    /// Delete the last typed character (Backspace)
    Erase,
    /// No action
    None,
}

impl NavigationAction {
    /// Convert keyboard event to navigation action
    pub fn from_key(key: KeyEvent, mode: InputMode) -> Self {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Self::Quit;
        }

        match (mode, key.code) {
            (InputMode::TextEntry, KeyCode::Char(c))
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                return Self::Input(c);
            }
            _ => {}
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => Self::Quit,

            KeyCode::Up | KeyCode::Char('k') => Self::Up,
            KeyCode::Down | KeyCode::Char('j') => Self::Down,
            KeyCode::Left | KeyCode::Char('h') => Self::Left,
            KeyCode::Right | KeyCode::Char('l') => Self::Right,

            KeyCode::Enter | KeyCode::Char(' ') => Self::Select,

            KeyCode::Esc => Self::Back,
            KeyCode::Backspace => Self::Erase,

            KeyCode::BackTab => Self::Previous,
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    Self::Previous
                } else {
                    Self::Next
                }
            }

            _ => Self::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListField, TextField};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_controller_creation() {
        let controller = ViewController::new();
        assert_eq!(controller.view(), View::Quiz);
        assert!(!controller.should_quit());
        assert_eq!(controller.answers(), &Answers::default());
    }

    #[test]
    fn test_view_order() {
        let mut controller = ViewController::new();

        assert!(!controller.on_loading_finished());
        assert_eq!(controller.view(), View::Quiz);

        assert!(controller.on_quiz_complete());
        assert_eq!(controller.view(), View::Loading);
        assert!(!controller.on_quiz_complete());

        assert!(controller.on_loading_finished());
        assert_eq!(controller.view(), View::Sales);
        assert!(!controller.on_loading_finished());
        assert!(!controller.on_quiz_complete());
        assert_eq!(controller.view(), View::Sales);
    }

    #[test]
    fn test_answers_frozen_after_quiz() {
        let mut controller = ViewController::new();
        controller.apply(AnswerUpdate::Set(TextField::Name, "Ana".into()));
        controller.on_quiz_complete();
        controller.apply(AnswerUpdate::Set(TextField::Name, "Bia".into()));
        controller.apply(AnswerUpdate::Toggle(ListField::Fruits, "Limão".into()));

        assert_eq!(controller.answers().name, "Ana");
        assert!(controller.answers().fruits.is_empty());
    }

    #[test]
    fn test_quit_handling() {
        let mut controller = ViewController::new();
        controller.quit();
        assert!(controller.should_quit());
    }

    #[test]
    fn test_navigate_keys() {
        let nav = |code| NavigationAction::from_key(key(code), InputMode::Navigate);

        assert_eq!(nav(KeyCode::Char('q')), NavigationAction::Quit);
        assert_eq!(nav(KeyCode::Char('Q')), NavigationAction::Quit);
        assert_eq!(nav(KeyCode::Up), NavigationAction::Up);
        assert_eq!(nav(KeyCode::Char('k')), NavigationAction::Up);
        assert_eq!(nav(KeyCode::Down), NavigationAction::Down);
        assert_eq!(nav(KeyCode::Char('j')), NavigationAction::Down);
        assert_eq!(nav(KeyCode::Char('h')), NavigationAction::Left);
        assert_eq!(nav(KeyCode::Right), NavigationAction::Right);
        assert_eq!(nav(KeyCode::Enter), NavigationAction::Select);
        assert_eq!(nav(KeyCode::Char(' ')), NavigationAction::Select);
        assert_eq!(nav(KeyCode::Esc), NavigationAction::Back);
        assert_eq!(nav(KeyCode::Backspace), NavigationAction::Erase);
        assert_eq!(nav(KeyCode::Tab), NavigationAction::Next);
        assert_eq!(nav(KeyCode::BackTab), NavigationAction::Previous);
        assert_eq!(nav(KeyCode::Char('x')), NavigationAction::None);
        assert_eq!(
            NavigationAction::from_key(
                KeyEvent::new(KeyCode::Tab, KeyModifiers::SHIFT),
                InputMode::Navigate
            ),
            NavigationAction::Previous
        );
    }

    #[test]
    fn test_text_entry_keys() {
        let typed = |code| NavigationAction::from_key(key(code), InputMode::TextEntry);

        assert_eq!(typed(KeyCode::Char('q')), NavigationAction::Input('q'));
        assert_eq!(typed(KeyCode::Char('k')), NavigationAction::Input('k'));
        assert_eq!(typed(KeyCode::Char(' ')), NavigationAction::Input(' '));
        assert_eq!(typed(KeyCode::Char('7')), NavigationAction::Input('7'));
        assert_eq!(typed(KeyCode::Backspace), NavigationAction::Erase);
        assert_eq!(typed(KeyCode::Enter), NavigationAction::Select);
        assert_eq!(typed(KeyCode::Esc), NavigationAction::Back);
        assert_eq!(typed(KeyCode::Up), NavigationAction::Up);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            NavigationAction::from_key(ctrl_c, InputMode::Navigate),
            NavigationAction::Quit
        );
        assert_eq!(
            NavigationAction::from_key(ctrl_c, InputMode::TextEntry),
            NavigationAction::Quit
        );
    }
}
