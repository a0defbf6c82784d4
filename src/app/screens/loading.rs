//! Loading screen implementation
//!
//! Progress gauge with the rotating status line and testimonial. The screen
//! owns the ticker that drives the simulator; dropping the screen stops it.

use super::{render_help, render_title, ACCENT};
use crate::loading::{LoadingEvent, LoadingSimulator};
use crate::timers::{ScopedTask, TimerEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;
use tokio::sync::mpsc;

/// Loading view
#[derive(Debug)]
pub struct LoadingScreen {
    simulator: LoadingSimulator,
    ticker: Option<ScopedTask>,
}

impl LoadingScreen {
    /// Create the screen and start its ticker
    pub fn start(tick_interval: Duration, tx: mpsc::Sender<TimerEvent>) -> Self {
        Self {
            simulator: LoadingSimulator::new(),
            ticker: Some(ScopedTask::interval(tick_interval, tx, TimerEvent::LoadingTick)),
        }
    }

    /// Create the screen without a ticker; progress only moves via [`Self::tick`]
    pub fn detached() -> Self {
        Self {
            simulator: LoadingSimulator::new(),
            ticker: None,
        }
    }

    pub fn simulator(&self) -> &LoadingSimulator {
        &self.simulator
    }

    /// Advance the simulator; the ticker stops once loading has finished
    pub fn tick(&mut self) -> LoadingEvent {
        let event = self.simulator.tick();
        if event == LoadingEvent::Finished {
            self.ticker = None;
        }
        event
    }

    /// Whether a ticker task is still attached
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Render the loading screen
    pub fn render(&self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Progress bar
                Constraint::Length(3), // Status message
                Constraint::Min(6),    // Testimonial
                Constraint::Length(3), // Help text
            ])
            .split(size);

        render_title(f, chunks[0], "Analisando suas respostas", ACCENT);
        self.render_progress(f, chunks[1]);
        self.render_message(f, chunks[2]);
        self.render_testimonial(f, chunks[3]);
        render_help(f, chunks[4], &[("Ctrl+C", "Quit")]);
    }

    fn render_progress(&self, f: &mut Frame, area: Rect) {
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title("Progresso")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            )
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(self.simulator.ratio().clamp(0.0, 1.0))
            .label(format!("{}%", self.simulator.progress()));
        f.render_widget(gauge, area);
    }

    fn render_message(&self, f: &mut Frame, area: Rect) {
        let message = Paragraph::new(self.simulator.message())
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        f.render_widget(message, area);
    }

    fn render_testimonial(&self, f: &mut Frame, area: Rect) {
        let testimonial = self.simulator.testimonial();
        let stars = "★".repeat(usize::from(testimonial.stars));
        let lines = vec![
            Line::from(Span::styled(stars, Style::default().fg(Color::Yellow))),
            Line::from(""),
            Line::from(Span::styled(
                format!("\"{}\"", testimonial.text),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
            Line::from(""),
            Line::from(Span::styled(
                testimonial.name,
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
        ];
        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title("Quem já testou")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            );
        f.render_widget(card, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::test_util::render_to_string;
    use crate::loading::{MESSAGES, TESTIMONIALS};

    #[test]
    fn test_detached_tick() {
        let mut screen = LoadingScreen::detached();
        assert!(!screen.is_ticking());
        assert_eq!(screen.tick(), LoadingEvent::Progress(1));
        assert_eq!(screen.simulator().progress(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_detaches_when_finished() {
        let (tx, mut rx) = crate::timers::channel();
        let mut screen = LoadingScreen::start(Duration::from_millis(80), tx);
        assert!(screen.is_ticking());

        let mut finished = 0;
        while let Some(event) = rx.recv().await {
            assert_eq!(event, TimerEvent::LoadingTick);
            if screen.tick() == LoadingEvent::Finished {
                finished += 1;
                assert!(!screen.is_ticking());
            }
        }
        assert_eq!(finished, 1);
        assert_eq!(screen.simulator().progress(), 100);
    }

    #[test]
    fn test_render_shows_progress() {
        let mut screen = LoadingScreen::detached();
        for _ in 0..40 {
            screen.tick();
        }
        let text = render_to_string(100, 24, |f| screen.render(f));
        assert!(text.contains("40%"));
        assert!(text.contains(MESSAGES[2]));
        assert!(text.contains(TESTIMONIALS[1].name));
    }
}
