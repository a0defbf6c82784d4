//! Quiz screen implementation
//!
//! One step at a time: progress gauge, heading, then an option list, an
//! input box or the BMI report depending on the step kind.

use super::{render_help, render_title, ACCENT};
use crate::app::state::{InputMode, NavigationAction};
use crate::models::{metrics, Answers};
use crate::quiz::{QuizEffect, QuizInput, QuizSequencer, Step, StepKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const BRAND: &str = "CHÁ SECA BARRIGA 21D";

/// Quiz view: the sequencer plus list selection state
#[derive(Debug)]
pub struct QuizScreen {
    sequencer: QuizSequencer,
    list_state: ListState,
}

impl QuizScreen {
    /// Create a quiz screen over the standard catalog
    pub fn new(input_limit: f64) -> Self {
        Self::from_sequencer(QuizSequencer::new(input_limit))
    }

    pub fn from_sequencer(sequencer: QuizSequencer) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            sequencer,
            list_state,
        }
    }

    pub fn sequencer(&self) -> &QuizSequencer {
        &self.sequencer
    }

    /// Text steps capture letters; every other step uses shortcuts
    pub fn input_mode(&self) -> InputMode {
        match self.sequencer.current().kind {
            StepKind::TextInput { .. } | StepKind::NumberInput { .. } => InputMode::TextEntry,
            _ => InputMode::Navigate,
        }
    }

    /// Map a navigation action onto quiz input
    pub fn input_for(action: NavigationAction) -> Option<QuizInput> {
        match action {
            NavigationAction::Up | NavigationAction::Previous => Some(QuizInput::Up),
            NavigationAction::Down | NavigationAction::Next => Some(QuizInput::Down),
            NavigationAction::Select => Some(QuizInput::Activate),
            NavigationAction::Back => Some(QuizInput::Back),
            NavigationAction::Input(c) => Some(QuizInput::Type(c)),
            NavigationAction::Erase => Some(QuizInput::Erase),
            _ => None,
        }
    }

    /// Feed input to the sequencer
    pub fn handle(&mut self, input: QuizInput, answers: &Answers) -> QuizEffect {
        let effect = self.sequencer.handle(input, answers);
        self.list_state.select(Some(self.sequencer.cursor()));
        effect
    }

    /// Render the current step
    pub fn render(&mut self, f: &mut Frame, answers: &Answers) {
        let size = f.size();
        let index = self.sequencer.index();
        let show_progress = index > 0 && index < self.sequencer.step_count();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                                  // Title
                Constraint::Length(if show_progress { 3 } else { 0 }), // Progress
                Constraint::Min(8),                                     // Step body
                Constraint::Length(3),                                  // Help text
            ])
            .split(size);

        render_title(f, chunks[0], BRAND, ACCENT);
        if show_progress {
            self.render_progress(f, chunks[1]);
        }
        self.render_step(f, chunks[2], answers);
        render_help(f, chunks[3], &self.help_hints());
    }

    fn render_progress(&self, f: &mut Frame, area: Rect) {
        let ratio = self.sequencer.progress_ratio().clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(ratio)
            .label(format!(
                "Etapa {} de {}",
                self.sequencer.index(),
                self.sequencer.step_count() - 1
            ));
        f.render_widget(gauge, area);
    }

    fn render_step(&mut self, f: &mut Frame, area: Rect, answers: &Answers) {
        let step = self.sequencer.current().clone();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(heading_height(&step, inner.width)),
                Constraint::Min(3),
            ])
            .split(inner);

        f.render_widget(heading(&step, answers), chunks[0]);

        match &step.kind {
            StepKind::Intro { .. } | StepKind::Info { .. } => {
                self.render_button(f, chunks[1], &step, answers)
            }
            StepKind::SingleSelect { .. } | StepKind::MultiSelect { .. } => {
                self.render_options(f, chunks[1], &step, answers)
            }
            StepKind::TextInput { .. } | StepKind::NumberInput { .. } => {
                self.render_input(f, chunks[1], &step, answers)
            }
            StepKind::BmiReport => self.render_bmi_report(f, chunks[1], &step, answers),
        }
    }

    fn render_options(&mut self, f: &mut Frame, area: Rect, step: &Step, answers: &Answers) {
        let mut items: Vec<ListItem> = step
            .options()
            .iter()
            .map(|choice| {
                let marker = match &step.kind {
                    StepKind::MultiSelect { field, .. } if answers.contains(*field, choice.label) => {
                        "[x] "
                    }
                    StepKind::MultiSelect { .. } => "[ ] ",
                    StepKind::SingleSelect { field, .. }
                        if answers.text(*field) == choice.label =>
                    {
                        "(•) "
                    }
                    _ => "( ) ",
                };
                let mut spans = vec![Span::raw(marker)];
                if let Some(icon) = choice.icon {
                    spans.push(Span::raw(format!("{} ", icon)));
                }
                spans.push(Span::styled(
                    choice.label,
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                if let Some(detail) = choice.detail {
                    spans.push(Span::styled(
                        format!("  {}", detail),
                        Style::default().fg(Color::Gray),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        if matches!(step.kind, StepKind::MultiSelect { .. }) {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("→ {}", step.cta()),
                self.button_style(answers),
            ))));
        }

        let list = List::new(items)
            .highlight_style(Style::default().bg(ACCENT).fg(Color::White))
            .highlight_symbol(">> ");

        self.list_state.select(Some(self.sequencer.cursor()));
        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn render_input(&self, f: &mut Frame, area: Rect, step: &Step, answers: &Answers) {
        let (value, placeholder, unit) = match &step.kind {
            StepKind::TextInput { field, placeholder } => (answers.text(*field), *placeholder, None),
            StepKind::NumberInput {
                field,
                unit,
                placeholder,
            } => (answers.text(*field), *placeholder, Some(*unit)),
            _ => return,
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(area);

        let mut spans = if value.is_empty() {
            vec![Span::styled(
                placeholder.to_string(),
                Style::default().fg(Color::DarkGray),
            )]
        } else {
            vec![Span::raw(value.to_string())]
        };
        spans.push(Span::styled("_", Style::default().fg(ACCENT)));

        let mut input_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT));
        if let Some(unit) = unit {
            input_block = input_block.title(unit);
        }
        f.render_widget(Paragraph::new(Line::from(spans)).block(input_block), chunks[0]);

        self.render_button(f, chunks[2], step, answers);
    }

    fn render_bmi_report(&self, f: &mut Frame, area: Rect, step: &Step, answers: &Answers) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(1)])
            .split(area);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[0]);

        let bmi = metrics::bmi(&answers.current_weight, &answers.height);
        let verdict = if metrics::needs_attention(bmi) {
            "Seu IMC indica que você precisa de atenção imediata para evitar complicações metabólicas."
        } else {
            "Mesmo dentro da faixa, seus sintomas indicam acúmulo de toxinas."
        };
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                "Índice de massa corporal (IMC)",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                metrics::format_bmi(bmi),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(metrics::BmiCategory::classify(bmi).label()),
            Line::from(""),
            Line::from(Span::styled(verdict, Style::default().fg(Color::Red))),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("IMC"));
        f.render_widget(card, columns[0]);

        let points = metrics::projection(&answers.current_weight);
        let data: Vec<(&str, u64)> = points
            .iter()
            .map(|point| (point.label, point.weight.round() as u64))
            .collect();
        let chart = BarChart::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Você pode perder de 9KG a 15KG em 3 semanas"),
            )
            .data(data.as_slice())
            .bar_width(8)
            .bar_gap(2)
            .bar_style(Style::default().fg(Color::Green))
            .value_style(Style::default().fg(Color::Black).bg(Color::Green));
        f.render_widget(chart, columns[1]);

        self.render_button(f, chunks[1], step, answers);
    }

    fn render_button(&self, f: &mut Frame, area: Rect, step: &Step, answers: &Answers) {
        let button = Paragraph::new(Line::from(Span::styled(
            format!("[ {} ]", step.cta()),
            self.button_style(answers),
        )))
        .alignment(Alignment::Center);
        f.render_widget(button, area);
    }

    fn button_style(&self, answers: &Answers) -> Style {
        if self.sequencer.can_continue(answers) {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    fn help_hints(&self) -> Vec<(&'static str, &'static str)> {
        let mut hints = match self.sequencer.current().kind {
            StepKind::SingleSelect { .. } => vec![("↑↓", "Navigate"), ("Enter", "Choose")],
            StepKind::MultiSelect { .. } => vec![("↑↓", "Navigate"), ("Enter", "Toggle")],
            StepKind::TextInput { .. } | StepKind::NumberInput { .. } => {
                vec![("Type", "Answer"), ("Enter", "Continue")]
            }
            _ => vec![("Enter", "Continue")],
        };
        if self.sequencer.index() > 0 {
            hints.push(("Esc", "Back"));
        }
        match self.input_mode() {
            InputMode::TextEntry => hints.push(("Ctrl+C", "Quit")),
            InputMode::Navigate => hints.push(("Q", "Quit")),
        }
        hints
    }
}

/// Rows needed by the heading and body text once wrapped to `width`
fn heading_height(step: &Step, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows = |text: &str| text.chars().count().div_ceil(width).max(1);
    let mut height = rows(step.title) + 1;
    if let Some(body) = step.body {
        height += rows(body) + 1;
    }
    u16::try_from(height).unwrap_or(u16::MAX)
}

fn heading(step: &Step, answers: &Answers) -> Paragraph<'static> {
    let mut lines = vec![Line::from(Span::styled(
        step.heading(answers),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(body) = step.body {
        lines.push(Line::from(""));
        lines.push(Line::from(body));
    }
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::test_util::render_to_string;
    use crate::models::{AnswerUpdate, TextField};

    fn advance_to(screen: &mut QuizScreen, answers: &mut Answers, target: usize) {
        while screen.sequencer().index() < target {
            let before = screen.sequencer().index();
            let step = screen.sequencer().current().clone();
            match &step.kind {
                StepKind::SingleSelect { .. } => {}
                StepKind::MultiSelect { .. } => {
                    let effect = screen.handle(QuizInput::Activate, answers);
                    answers.apply(effect.update.unwrap());
                    screen.handle(QuizInput::Up, answers);
                }
                StepKind::TextInput { field, .. } => {
                    answers.apply(AnswerUpdate::Set(*field, "Ana".into()))
                }
                StepKind::NumberInput { field, .. } => {
                    let value = if *field == TextField::Height { "165" } else { "70" };
                    answers.apply(AnswerUpdate::Set(*field, value.into()))
                }
                _ => {}
            }
            let effect = screen.handle(QuizInput::Activate, answers);
            if let Some(update) = effect.update {
                answers.apply(update);
            }
            assert!(screen.sequencer().index() > before);
        }
    }

    #[test]
    fn test_input_mode_follows_step() {
        let mut screen = QuizScreen::new(200.0);
        let mut answers = Answers::new();
        assert_eq!(screen.input_mode(), InputMode::Navigate);

        advance_to(&mut screen, &mut answers, 7);
        assert!(matches!(
            screen.sequencer().current().kind,
            StepKind::TextInput { .. }
        ));
        assert_eq!(screen.input_mode(), InputMode::TextEntry);
    }

    #[test]
    fn test_action_mapping() {
        assert_eq!(QuizScreen::input_for(NavigationAction::Select), Some(QuizInput::Activate));
        assert_eq!(QuizScreen::input_for(NavigationAction::Next), Some(QuizInput::Down));
        assert_eq!(QuizScreen::input_for(NavigationAction::Input('a')), Some(QuizInput::Type('a')));
        assert_eq!(QuizScreen::input_for(NavigationAction::Quit), None);
    }

    #[test]
    fn test_render_landing() {
        let mut screen = QuizScreen::new(200.0);
        let answers = Answers::new();
        let text = render_to_string(100, 30, |f| screen.render(f, &answers));
        assert!(text.contains("CHÁ SECA BARRIGA 21D"));
        assert!(text.contains("FAÇA O TESTE GRATUITO"));
        assert!(!text.contains("Etapa"));
    }

    #[test]
    fn test_render_progress_and_options() {
        let mut screen = QuizScreen::new(200.0);
        let mut answers = Answers::new();
        advance_to(&mut screen, &mut answers, 1);
        let text = render_to_string(100, 30, |f| screen.render(f, &answers));
        assert!(text.contains("Etapa 1 de 24"));
        assert!(text.contains("Perder peso"));
        assert!(text.contains("[ ]"));
    }

    #[test]
    fn test_render_bmi_report() {
        let mut screen = QuizScreen::new(200.0);
        let mut answers = Answers::new();
        advance_to(&mut screen, &mut answers, 20);
        let text = render_to_string(120, 40, |f| screen.render(f, &answers));
        assert!(text.contains("ATENÇÃO, Ana!"));
        assert!(text.contains("25.7"));
        assert!(text.contains("Início"));
    }
}
