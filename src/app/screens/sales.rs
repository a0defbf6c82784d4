//! Sales screen implementation
//!
//! Countdown header, a scrollable offer page built from the report and the
//! static copy, and the purchase popup drawn on top.

use super::{centered_rect, render_help, ACCENT};
use crate::app::state::NavigationAction;
use crate::config::SalesConfig;
use crate::models::Answers;
use crate::sales::{content, SalesState, SalesTimers};
use crate::timers::TimerEvent;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tokio::sync::mpsc;

/// Rows moved per scroll step
const SCROLL_STEP: u16 = 5;

/// Sales view
#[derive(Debug)]
pub struct SalesScreen {
    state: SalesState,
    timers: Option<SalesTimers>,
    scroll: u16,
}

impl SalesScreen {
    /// Build the page from the answers and start its timers
    pub fn start(answers: &Answers, config: &SalesConfig, tx: mpsc::Sender<TimerEvent>) -> Self {
        Self {
            state: SalesState::new(answers, config),
            timers: Some(SalesTimers::start(config, tx)),
            scroll: 0,
        }
    }

    /// Build the page without timers
    pub fn detached(answers: &Answers, config: &SalesConfig) -> Self {
        Self {
            state: SalesState::new(answers, config),
            timers: None,
            scroll: 0,
        }
    }

    pub fn state(&self) -> &SalesState {
        &self.state
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Whether the page's timers are running
    pub fn has_timers(&self) -> bool {
        self.timers.as_ref().is_some_and(|timers| !timers.is_cancelled())
    }

    /// Stop the countdown, popup and carousel
    pub fn stop_timers(&mut self) {
        if let Some(mut timers) = self.timers.take() {
            timers.cancel();
        }
    }

    /// Apply a timer event owned by this page
    pub fn handle_timer(&mut self, event: TimerEvent) -> bool {
        self.state.handle_timer(event)
    }

    /// Handle page navigation
    pub fn handle_action(&mut self, action: NavigationAction) {
        match action {
            NavigationAction::Up => self.state.faq.focus_previous(),
            NavigationAction::Down => self.state.faq.focus_next(),
            NavigationAction::Select => self.state.faq.toggle_focused(),
            NavigationAction::Left => self.state.carousel.previous(),
            NavigationAction::Right => self.state.carousel.advance(),
            NavigationAction::Next => {
                let max = u16::try_from(self.body_lines().len()).unwrap_or(u16::MAX);
                self.scroll = self.scroll.saturating_add(SCROLL_STEP).min(max);
            }
            NavigationAction::Previous => {
                self.scroll = self.scroll.saturating_sub(SCROLL_STEP);
            }
            _ => {}
        }
    }

    /// Render the sales screen
    pub fn render(&self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Countdown
                Constraint::Min(8),    // Offer page
                Constraint::Length(3), // Help text
            ])
            .split(size);

        self.render_countdown(f, chunks[0]);
        self.render_body(f, chunks[1]);
        render_help(
            f,
            chunks[2],
            &[
                ("Tab", "Scroll"),
                ("←→", "Depoimentos"),
                ("↑↓", "FAQ"),
                ("Enter", "Abrir"),
                ("Q", "Quit"),
            ],
        );
        self.render_popup(f, size);
    }

    fn render_countdown(&self, f: &mut Frame, area: Rect) {
        let countdown = &self.state.countdown;
        let text = if countdown.is_expired() {
            "Oferta encerrada, garanta enquanto ainda há vagas!".to_string()
        } else {
            format!("Esta oferta expira em {}", countdown.display())
        };
        let header = Paragraph::new(text)
            .style(Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Red)));
        f.render_widget(header, area);
    }

    fn render_body(&self, f: &mut Frame, area: Rect) {
        let body = Paragraph::new(self.body_lines())
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            );
        f.render_widget(body, area);
    }

    fn render_popup(&self, f: &mut Frame, size: Rect) {
        let Some(buyer) = self.state.popup.buyer() else {
            return;
        };
        let area = centered_rect(44, 4, size);
        let popup = Paragraph::new(vec![
            Line::from(Span::styled(buyer, Style::default().add_modifier(Modifier::BOLD))),
            Line::from("comprou o Chá Seca Barriga"),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
        f.render_widget(Clear, area);
        f.render_widget(popup, area);
    }

    fn body_lines(&self) -> Vec<Line<'static>> {
        let report = &self.state.report;
        let section = |title: &'static str| {
            Line::from(Span::styled(
                title,
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ))
        };
        let field = |label: &'static str, value: &str| {
            Line::from(vec![
                Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
                Span::styled(value.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            ])
        };

        let mut lines = vec![
            Line::from(Span::styled(
                report.greeting.clone(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            section("SUA ANÁLISE PERSONALIZADA"),
            field("Objetivo principal", &report.main_goal),
            field("Área de foco", &report.focus_area),
            field("Seu IMC", &report.bmi),
            field("Rotina", &report.routine),
            field("Faixa etária", &report.age_range),
            Line::from(""),
            section("ANTES x DEPOIS DO CHÁ"),
        ];
        for (before, after) in content::BEFORE.iter().zip(content::AFTER.iter()) {
            lines.push(Line::from(vec![
                Span::styled(format!("✗ {:<24}", before), Style::default().fg(Color::Red)),
                Span::styled(format!("✓ {}", after), Style::default().fg(Color::Green)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(section("O QUE DIZEM OS NOSSOS CLIENTES"));
        let index = self.state.carousel.index();
        lines.push(Line::from(vec![
            Span::styled("★★★★★ ", Style::default().fg(Color::Yellow)),
            Span::raw(format!("\"{}\"", content::CAROUSEL[index % content::CAROUSEL.len()])),
            Span::styled(
                format!("  ({}/{})", index + 1, content::CAROUSEL.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));

        lines.push(Line::from(""));
        lines.push(section("SUA JORNADA COM O CHÁ SECA BARRIGA 21D"));
        for (milestone, text) in content::JOURNEY {
            lines.push(Line::from(Span::styled(
                format!("✓ {}", milestone),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(text));
        }

        lines.push(Line::from(""));
        lines.push(section("GANHE 5 BÔNUS EXCLUSIVOS"));
        for (title, value) in content::BONUSES {
            lines.push(Line::from(vec![
                Span::raw(title),
                Span::styled(format!("  {}", value), Style::default().fg(Color::DarkGray)),
            ]));
        }
        lines.push(field("Valor total dos bônus", content::BONUS_TOTAL));

        lines.push(Line::from(""));
        lines.push(section("OFERTA ESPECIAL"));
        lines.push(Line::from(vec![
            Span::styled(
                format!("De {} ", content::PRICE_FROM),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT),
            ),
            Span::styled(
                format!("por apenas {}", content::PRICE),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from("Pagamento único • Acesso vitalício"));
        lines.push(Line::from(Span::styled(
            format!("[ {} ]", content::CTA),
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD),
        )));

        lines.push(Line::from(""));
        lines.push(section("GARANTIA TOTAL: RISCO ZERO"));
        lines.push(Line::from(content::GUARANTEE));

        lines.push(Line::from(""));
        lines.push(section("COMPARE OS CUSTOS PARA TENTAR EMAGRECER"));
        for (option, cost) in content::COMPARISON {
            lines.push(field(option, cost));
        }
        lines.push(field("Chá Seca Barriga 21D", content::PRICE));

        lines.push(Line::from(""));
        lines.push(section("PERGUNTAS FREQUENTES"));
        let faq = &self.state.faq;
        for (i, (question, answer)) in content::FAQ.iter().enumerate() {
            let focus = if faq.focus() == i { "> " } else { "  " };
            let sign = if faq.is_open(i) { "−" } else { "+" };
            let style = if faq.focus() == i {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            lines.push(Line::from(Span::styled(
                format!("{}{} {}", focus, sign, question),
                style,
            )));
            if faq.is_open(i) {
                lines.push(Line::from(format!("    {}", answer)));
            }
        }

        lines
    }
}
