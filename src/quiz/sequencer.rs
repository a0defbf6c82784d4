//! Quiz step sequencer
//!
//! Walks the step catalog one position at a time. The sequencer never owns
//! the answers: each operation reads an immutable snapshot and returns the
//! update the controller should apply, together with the resulting
//! transition.

use crate::models::{AnswerUpdate, Answers};
use crate::quiz::catalog::{self, Step, StepKind};
use crate::quiz::input::{accept_numeric_edit, is_numeric_char};
use tracing::{debug, info};

/// Key-level input for the quiz view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizInput {
    /// Move the option cursor up
    Up,
    /// Move the option cursor down
    Down,
    /// Choose the option under the cursor, or continue
    Activate,
    /// Return to the previous step
    Back,
    /// Append a character to a text or number answer
    Type(char),
    /// Remove the last character of a text or number answer
    Erase,
}

/// Result of an input on the step index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Advanced,
    Retreated,
    /// The final step was confirmed; emitted exactly once
    Completed,
}

/// What the controller should do after an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizEffect {
    pub update: Option<AnswerUpdate>,
    pub transition: Transition,
}

impl QuizEffect {
    fn none() -> Self {
        Self { update: None, transition: Transition::Stay }
    }

    fn update(update: AnswerUpdate) -> Self {
        Self { update: Some(update), transition: Transition::Stay }
    }
}

/// Linear sequencer over the quiz catalog
#[derive(Debug)]
pub struct QuizSequencer {
    steps: Vec<Step>,
    index: usize,
    cursor: usize,
    input_limit: f64,
    completed: bool,
}

impl QuizSequencer {
    /// Create a sequencer over the standard catalog
    pub fn new(input_limit: f64) -> Self {
        Self::with_steps(catalog::steps(), input_limit)
    }

    /// Create a sequencer over a custom, non-empty step list
    pub fn with_steps(steps: Vec<Step>, input_limit: f64) -> Self {
        assert!(!steps.is_empty(), "quiz needs at least one step");
        Self {
            steps,
            index: 0,
            cursor: 0,
            input_limit,
            completed: false,
        }
    }

    /// Current step index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of steps
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Current step descriptor
    pub fn current(&self) -> &Step {
        &self.steps[self.index]
    }

    /// Position of the option cursor
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the final step has been confirmed
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether the cursor rests on the continue entry of a multi-select list
    pub fn cursor_on_continue(&self) -> bool {
        matches!(self.current().kind, StepKind::MultiSelect { .. })
            && self.cursor == self.current().options().len()
    }

    /// Whether the current step may advance with these answers
    pub fn can_continue(&self, answers: &Answers) -> bool {
        !self.completed && self.current().is_satisfied(answers)
    }

    /// Fraction of the quiz done, shown as the progress bar
    pub fn progress_ratio(&self) -> f64 {
        let last = self.steps.len().saturating_sub(1);
        if last == 0 {
            1.0
        } else {
            self.index as f64 / last as f64
        }
    }

    /// Dispatch key-level input
    pub fn handle(&mut self, input: QuizInput, answers: &Answers) -> QuizEffect {
        if self.completed {
            return QuizEffect::none();
        }

        match input {
            QuizInput::Up => {
                self.select_previous();
                QuizEffect::none()
            }
            QuizInput::Down => {
                self.select_next();
                QuizEffect::none()
            }
            QuizInput::Activate => {
                if self.cursor < self.current().options().len() {
                    self.select(self.cursor, answers)
                } else {
                    self.continue_step(answers)
                }
            }
            QuizInput::Back => self.back(answers),
            QuizInput::Type(c) => self.type_char(c, answers),
            QuizInput::Erase => self.erase(answers),
        }
    }

    /// Choose an option on a select step.
    ///
    /// Single-select records the value and advances; multi-select toggles
    /// membership and stays.
    pub fn select(&mut self, option: usize, answers: &Answers) -> QuizEffect {
        if self.completed {
            return QuizEffect::none();
        }

        let Some(choice) = self.current().options().get(option).copied() else {
            return QuizEffect::none();
        };

        match self.current().kind {
            StepKind::SingleSelect { field, .. } => {
                let update = AnswerUpdate::Set(field, choice.label.to_string());
                QuizEffect {
                    update: Some(update),
                    transition: self.advance(answers),
                }
            }
            StepKind::MultiSelect { field, .. } => {
                debug!(
                    step = self.index,
                    option = choice.label,
                    selected = !answers.contains(field, choice.label),
                    "toggled option"
                );
                QuizEffect::update(AnswerUpdate::Toggle(field, choice.label.to_string()))
            }
            _ => QuizEffect::none(),
        }
    }

    /// Advance past the current step if its precondition holds.
    ///
    /// On the final step this completes the quiz instead, exactly once.
    pub fn continue_step(&mut self, answers: &Answers) -> QuizEffect {
        if !self.can_continue(answers) {
            return QuizEffect::none();
        }
        QuizEffect {
            update: None,
            transition: self.advance(answers),
        }
    }

    /// Return to the previous step, keeping every answer.
    ///
    /// The cursor lands on the recorded choice, so confirming a revisited
    /// single-select step keeps its answer.
    pub fn back(&mut self, answers: &Answers) -> QuizEffect {
        if self.completed || self.index == 0 {
            return QuizEffect::none();
        }
        self.index -= 1;
        self.restore_cursor(answers);
        debug!(step = self.index, "retreated");
        QuizEffect {
            update: None,
            transition: Transition::Retreated,
        }
    }

    /// Append a character to the current text or number answer
    pub fn type_char(&mut self, c: char, answers: &Answers) -> QuizEffect {
        if self.completed || c.is_control() {
            return QuizEffect::none();
        }

        match self.current().kind {
            StepKind::TextInput { field, .. } => {
                let mut value = answers.text(field).to_string();
                value.push(c);
                QuizEffect::update(AnswerUpdate::Set(field, value))
            }
            StepKind::NumberInput { field, .. } => {
                if !is_numeric_char(c) {
                    return QuizEffect::none();
                }
                let mut candidate = answers.text(field).to_string();
                candidate.push(c);
                if accept_numeric_edit(&candidate, self.input_limit) {
                    QuizEffect::update(AnswerUpdate::Set(field, candidate))
                } else {
                    debug!(step = self.index, candidate = %candidate, "rejected numeric edit");
                    QuizEffect::none()
                }
            }
            _ => QuizEffect::none(),
        }
    }

    /// Remove the last character of the current text or number answer
    pub fn erase(&mut self, answers: &Answers) -> QuizEffect {
        if self.completed {
            return QuizEffect::none();
        }

        match self.current().kind {
            StepKind::TextInput { field, .. } | StepKind::NumberInput { field, .. } => {
                let mut value = answers.text(field).to_string();
                if value.pop().is_none() {
                    return QuizEffect::none();
                }
                if field.is_numeric() && !accept_numeric_edit(&value, self.input_limit) {
                    return QuizEffect::none();
                }
                QuizEffect::update(AnswerUpdate::Set(field, value))
            }
            _ => QuizEffect::none(),
        }
    }

    /// Number of cursor positions on the current step
    fn cursor_len(&self) -> usize {
        match self.current().kind {
            StepKind::SingleSelect { .. } => self.current().options().len(),
            StepKind::MultiSelect { .. } => self.current().options().len() + 1,
            _ => 0,
        }
    }

    fn select_previous(&mut self) {
        let len = self.cursor_len();
        if len == 0 {
            return;
        }
        if self.cursor > 0 {
            self.cursor -= 1;
        } else {
            self.cursor = len - 1;
        }
    }

    fn select_next(&mut self) {
        let len = self.cursor_len();
        if len == 0 {
            return;
        }
        if self.cursor < len - 1 {
            self.cursor += 1;
        } else {
            self.cursor = 0;
        }
    }

    /// Point the cursor at the recorded choice of a single-select step
    fn restore_cursor(&mut self, answers: &Answers) {
        self.cursor = match &self.current().kind {
            StepKind::SingleSelect { field, .. } => self
                .current()
                .options()
                .iter()
                .position(|choice| choice.label == answers.text(*field))
                .unwrap_or(0),
            _ => 0,
        };
    }

    fn advance(&mut self, answers: &Answers) -> Transition {
        if self.index + 1 >= self.steps.len() {
            self.completed = true;
            info!(steps = self.steps.len(), "quiz completed");
            Transition::Completed
        } else {
            self.index += 1;
            self.restore_cursor(answers);
            debug!(step = self.index, "advanced");
            Transition::Advanced
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListField, TextField};

    fn apply(answers: &mut Answers, effect: &QuizEffect) {
        if let Some(update) = effect.update.clone() {
            answers.apply(update);
        }
    }

    fn at_step(index: usize) -> (QuizSequencer, Answers) {
        let mut quiz = QuizSequencer::new(200.0);
        quiz.index = index;
        (quiz, Answers::new())
    }

    #[test]
    fn test_starts_at_landing() {
        let quiz = QuizSequencer::new(200.0);
        assert_eq!(quiz.index(), 0);
        assert_eq!(quiz.step_count(), 25);
        assert_eq!(quiz.progress_ratio(), 0.0);
        assert!(!quiz.is_completed());
    }

    #[test]
    fn test_intro_continues_without_answer() {
        let mut quiz = QuizSequencer::new(200.0);
        let answers = Answers::new();
        let effect = quiz.handle(QuizInput::Activate, &answers);
        assert_eq!(effect.transition, Transition::Advanced);
        assert_eq!(quiz.index(), 1);
    }

    #[test]
    fn test_single_select_records_and_advances() {
        let (mut quiz, mut answers) = at_step(2);
        let effect = quiz.select(1, &answers);
        apply(&mut answers, &effect);
        assert_eq!(effect.transition, Transition::Advanced);
        assert_eq!(quiz.index(), 3);
        assert_eq!(answers.weight_goal_range, "De 6 a 10 kg");
    }

    #[test]
    fn test_out_of_range_option_is_ignored() {
        let (mut quiz, answers) = at_step(3);
        let effect = quiz.select(7, &answers);
        assert_eq!(effect, QuizEffect::none());
        assert_eq!(quiz.index(), 3);
    }

    #[test]
    fn test_multi_select_requires_selection() {
        let (mut quiz, mut answers) = at_step(1);
        assert_eq!(quiz.continue_step(&answers).transition, Transition::Stay);

        let effect = quiz.select(0, &answers);
        apply(&mut answers, &effect);
        assert_eq!(effect.transition, Transition::Stay);
        assert_eq!(answers.goals, vec!["Perder peso"]);

        assert_eq!(quiz.continue_step(&answers).transition, Transition::Advanced);
        assert_eq!(quiz.index(), 2);
    }

    #[test]
    fn test_multi_select_cursor_reaches_continue_entry() {
        let (mut quiz, mut answers) = at_step(24);
        let effect = quiz.handle(QuizInput::Activate, &answers);
        apply(&mut answers, &effect);
        assert!(answers.contains(ListField::Fruits, "Melancia"));

        quiz.handle(QuizInput::Up, &answers);
        assert!(quiz.cursor_on_continue());
        let effect = quiz.handle(QuizInput::Activate, &answers);
        assert_eq!(effect.transition, Transition::Completed);
    }

    #[test]
    fn test_completion_fires_once() {
        let (mut quiz, mut answers) = at_step(24);
        assert_eq!(quiz.continue_step(&answers).transition, Transition::Stay);
        assert!(!quiz.is_completed());

        let effect = quiz.select(2, &answers);
        apply(&mut answers, &effect);
        assert_eq!(quiz.continue_step(&answers).transition, Transition::Completed);
        assert!(quiz.is_completed());

        assert_eq!(quiz.continue_step(&answers).transition, Transition::Stay);
        assert_eq!(quiz.handle(QuizInput::Activate, &answers), QuizEffect::none());
        assert_eq!(quiz.back(&answers), QuizEffect::none());
        assert_eq!(quiz.index(), 24);
    }

    #[test]
    fn test_text_input() {
        let (mut quiz, mut answers) = at_step(7);
        assert_eq!(quiz.continue_step(&answers).transition, Transition::Stay);
        for c in "Ana".chars() {
            let effect = quiz.handle(QuizInput::Type(c), &answers);
            apply(&mut answers, &effect);
        }
        assert_eq!(answers.name, "Ana");

        let effect = quiz.handle(QuizInput::Erase, &answers);
        apply(&mut answers, &effect);
        assert_eq!(answers.name, "An");

        assert_eq!(quiz.continue_step(&answers).transition, Transition::Advanced);
    }

    #[test]
    fn test_number_input_rejects_over_limit() {
        let (mut quiz, mut answers) = at_step(17);
        for c in "20".chars() {
            let effect = quiz.type_char(c, &answers);
            apply(&mut answers, &effect);
        }
        assert_eq!(answers.current_weight, "20");

        let effect = quiz.type_char('1', &answers);
        assert!(effect.update.is_none());
        apply(&mut answers, &effect);
        assert_eq!(answers.current_weight, "20");

        let effect = quiz.type_char('0', &answers);
        apply(&mut answers, &effect);
        assert_eq!(answers.current_weight, "200");
    }

    #[test]
    fn test_number_input_ignores_letters() {
        let (mut quiz, answers) = at_step(18);
        assert!(quiz.type_char('x', &answers).update.is_none());
        assert!(quiz.type_char('-', &answers).update.is_none());
    }

    #[test]
    fn test_type_on_select_step_is_noop() {
        let (mut quiz, answers) = at_step(3);
        assert_eq!(quiz.type_char('a', &answers), QuizEffect::none());
        assert_eq!(quiz.erase(&answers), QuizEffect::none());
    }

    #[test]
    fn test_back_keeps_answers() {
        let (mut quiz, mut answers) = at_step(3);
        let effect = quiz.select(1, &answers);
        apply(&mut answers, &effect);
        assert_eq!(quiz.index(), 4);

        assert_eq!(quiz.back(&answers).transition, Transition::Retreated);
        assert_eq!(quiz.index(), 3);
        assert_eq!(answers.text(TextField::Gender), "Feminino");
        assert_eq!(quiz.cursor(), 1);

        // An answered single-select step can be continued without re-selecting
        assert_eq!(quiz.continue_step(&answers).transition, Transition::Advanced);
    }

    #[test]
    fn test_back_at_start_is_noop() {
        let mut quiz = QuizSequencer::new(200.0);
        assert_eq!(quiz.back(&Answers::new()), QuizEffect::none());
        assert_eq!(quiz.index(), 0);
    }

    #[test]
    fn test_revisited_single_select_keeps_choice() {
        let (mut quiz, mut answers) = at_step(3);
        let effect = quiz.select(1, &answers);
        apply(&mut answers, &effect);
        quiz.back(&answers);

        let effect = quiz.handle(QuizInput::Activate, &answers);
        assert_eq!(effect.transition, Transition::Advanced);
        apply(&mut answers, &effect);
        assert_eq!(answers.gender, "Feminino");
    }

    #[test]
    fn test_forward_onto_answered_step_restores_cursor() {
        let (mut quiz, mut answers) = at_step(2);
        let effect = quiz.select(0, &answers);
        apply(&mut answers, &effect);
        let effect = quiz.select(1, &answers);
        apply(&mut answers, &effect);
        quiz.back(&answers);
        quiz.back(&answers);
        assert_eq!(quiz.index(), 2);

        // Moving forward again lands on the gender already chosen
        quiz.handle(QuizInput::Activate, &answers);
        assert_eq!(quiz.index(), 3);
        assert_eq!(quiz.cursor(), 1);
    }

    #[test]
    fn test_cursor_wraps() {
        let (mut quiz, answers) = at_step(3);
        quiz.handle(QuizInput::Up, &answers);
        assert_eq!(quiz.cursor(), 1);
        quiz.handle(QuizInput::Down, &answers);
        assert_eq!(quiz.cursor(), 0);
    }

    #[test]
    fn test_progress_ratio() {
        let (quiz, _) = at_step(12);
        assert_eq!(quiz.progress_ratio(), 0.5);
        let (quiz, _) = at_step(24);
        assert_eq!(quiz.progress_ratio(), 1.0);
    }
}
