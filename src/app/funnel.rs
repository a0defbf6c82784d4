//! Funnel orchestration
//!
//! Ties the view controller to the three screens and the timer channel.
//! Nothing here touches the terminal, so the whole flow can be driven from
//! tests with synthetic key and timer events.

use crate::app::screens::{LoadingScreen, QuizScreen, SalesScreen};
use crate::app::state::{InputMode, NavigationAction, View, ViewController};
use crate::config::FunnelConfig;
use crate::loading::LoadingEvent;
use crate::models::Answers;
use crate::quiz::{QuizInput, Transition};
use crate::timers::{self, TimerEvent};
use crossterm::event::KeyEvent;
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The full quiz -> loading -> sales flow
#[derive(Debug)]
pub struct Funnel {
    controller: ViewController,
    config: FunnelConfig,
    quiz: QuizScreen,
    loading: Option<LoadingScreen>,
    sales: Option<SalesScreen>,
    timer_tx: mpsc::Sender<TimerEvent>,
    timer_rx: mpsc::Receiver<TimerEvent>,
}

impl Funnel {
    /// Create a funnel at the first quiz step
    pub fn new(config: FunnelConfig) -> Self {
        let (timer_tx, timer_rx) = timers::channel();
        Self {
            controller: ViewController::new(),
            quiz: QuizScreen::new(config.quiz.input_limit),
            config,
            loading: None,
            sales: None,
            timer_tx,
            timer_rx,
        }
    }

    pub fn view(&self) -> View {
        self.controller.view()
    }

    pub fn answers(&self) -> &Answers {
        self.controller.answers()
    }

    pub fn should_quit(&self) -> bool {
        self.controller.should_quit()
    }

    /// Stop every timer and mark the funnel finished
    pub fn quit(&mut self) {
        self.controller.quit();
        self.loading = None;
        if let Some(sales) = &mut self.sales {
            if sales.has_timers() {
                debug!("stopping offer page timers");
                sales.stop_timers();
            }
        }
    }

    pub fn quiz(&self) -> &QuizScreen {
        &self.quiz
    }

    pub fn loading(&self) -> Option<&LoadingScreen> {
        self.loading.as_ref()
    }

    pub fn sales(&self) -> Option<&SalesScreen> {
        self.sales.as_ref()
    }

    /// How keys should be read for the active view
    pub fn input_mode(&self) -> InputMode {
        match self.controller.view() {
            View::Quiz => self.quiz.input_mode(),
            View::Loading | View::Sales => InputMode::Navigate,
        }
    }

    /// Handle a raw key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = NavigationAction::from_key(key, self.input_mode());
        self.handle_action(action);
    }

    /// Handle a navigation action for the active view
    pub fn handle_action(&mut self, action: NavigationAction) {
        if action == NavigationAction::Quit {
            info!(view = ?self.controller.view(), "quit requested");
            self.quit();
            return;
        }

        match self.controller.view() {
            View::Quiz => self.handle_quiz_action(action),
            View::Loading => {}
            View::Sales => {
                if let Some(sales) = &mut self.sales {
                    sales.handle_action(action);
                }
            }
        }
    }

    fn handle_quiz_action(&mut self, action: NavigationAction) {
        let Some(input) = QuizScreen::input_for(action) else {
            return;
        };

        if input == QuizInput::Back && self.quiz.sequencer().index() == 0 {
            info!("left from the landing step");
            self.quit();
            return;
        }

        let effect = self.quiz.handle(input, self.controller.answers());
        if let Some(update) = effect.update {
            self.controller.apply(update);
        }
        if effect.transition == Transition::Completed {
            self.enter_loading();
        }
    }

    fn enter_loading(&mut self) {
        if !self.controller.on_quiz_complete() {
            return;
        }
        match serde_json::to_string(self.controller.answers()) {
            Ok(json) => info!(answers = %json, "quiz answers collected"),
            Err(e) => warn!(error = %e, "could not serialize answers"),
        }
        self.loading = Some(LoadingScreen::start(
            self.config.loading.tick_interval,
            self.timer_tx.clone(),
        ));
    }

    fn enter_sales(&mut self) {
        if !self.controller.on_loading_finished() {
            return;
        }
        self.loading = None;
        self.sales = Some(SalesScreen::start(
            self.controller.answers(),
            &self.config.sales,
            self.timer_tx.clone(),
        ));
    }

    /// Route a timer event to the active view; stale events are dropped
    pub fn handle_timer(&mut self, event: TimerEvent) {
        match (self.controller.view(), event) {
            (View::Loading, TimerEvent::LoadingTick) => {
                let finished = match &mut self.loading {
                    Some(loading) => loading.tick() == LoadingEvent::Finished,
                    None => false,
                };
                if finished {
                    self.enter_sales();
                }
            }
            (View::Sales, event) => {
                if let Some(sales) = &mut self.sales {
                    if !sales.handle_timer(event) {
                        debug!(?event, "stale timer event");
                    }
                }
            }
            (view, event) => debug!(?view, ?event, "stale timer event"),
        }
    }

    /// Apply every queued timer event without waiting; returns how many
    pub fn drain_timers(&mut self) -> usize {
        let mut count = 0;
        while let Ok(event) = self.timer_rx.try_recv() {
            self.handle_timer(event);
            count += 1;
        }
        count
    }

    /// Wait for the next timer event and apply it
    pub async fn next_timer(&mut self) -> Option<TimerEvent> {
        let event = self.timer_rx.recv().await?;
        self.handle_timer(event);
        Some(event)
    }

    /// Draw the active view
    pub fn render(&mut self, f: &mut Frame) {
        match self.controller.view() {
            View::Quiz => self.quiz.render(f, self.controller.answers()),
            View::Loading => {
                if let Some(loading) = &self.loading {
                    loading.render(f);
                }
            }
            View::Sales => {
                if let Some(sales) = &self.sales {
                    sales.render(f);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(funnel: &mut Funnel, code: KeyCode) {
        funnel.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    /// Answer a select or info step with the first option
    fn answer_step(funnel: &mut Funnel) {
        if funnel.quiz().sequencer().current().needs_continue()
            && !funnel.quiz().sequencer().current().options().is_empty()
        {
            press(funnel, KeyCode::Enter);
            press(funnel, KeyCode::Up);
        }
        press(funnel, KeyCode::Enter);
    }

    #[tokio::test]
    async fn test_starts_on_quiz() {
        let funnel = Funnel::new(FunnelConfig::default());
        assert_eq!(funnel.view(), View::Quiz);
        assert_eq!(funnel.input_mode(), InputMode::Navigate);
        assert!(funnel.loading().is_none());
        assert!(funnel.sales().is_none());
    }

    #[tokio::test]
    async fn test_esc_on_landing_quits() {
        let mut funnel = Funnel::new(FunnelConfig::default());
        press(&mut funnel, KeyCode::Esc);
        assert!(funnel.should_quit());
    }

    #[tokio::test]
    async fn test_typed_q_is_not_quit_on_name_step() {
        let mut funnel = Funnel::new(FunnelConfig::default());
        while funnel.input_mode() != InputMode::TextEntry {
            answer_step(&mut funnel);
        }
        press(&mut funnel, KeyCode::Char('Q'));
        press(&mut funnel, KeyCode::Char('u'));
        assert!(!funnel.should_quit());
        assert_eq!(funnel.answers().name, "Qu");

        press(&mut funnel, KeyCode::Backspace);
        assert_eq!(funnel.answers().name, "Q");
    }

    #[tokio::test]
    async fn test_backspace_on_select_step_keeps_place() {
        let mut funnel = Funnel::new(FunnelConfig::default());
        press(&mut funnel, KeyCode::Backspace);
        assert!(!funnel.should_quit());

        answer_step(&mut funnel);
        answer_step(&mut funnel);
        assert_eq!(funnel.quiz().sequencer().index(), 2);
        press(&mut funnel, KeyCode::Backspace);
        assert_eq!(funnel.quiz().sequencer().index(), 2);
        assert!(!funnel.should_quit());
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_stops_offer_timers() {
        let mut funnel = Funnel::new(FunnelConfig::default());
        funnel.enter_loading();
        funnel.enter_sales();
        assert_eq!(funnel.view(), View::Sales);
        assert!(funnel.sales().is_some_and(|sales| sales.has_timers()));

        funnel.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(funnel.should_quit());
        assert!(funnel.sales().is_some_and(|sales| !sales.has_timers()));
    }

    #[tokio::test]
    async fn test_stale_timer_events_are_ignored() {
        let mut funnel = Funnel::new(FunnelConfig::default());
        funnel.handle_timer(TimerEvent::LoadingTick);
        funnel.handle_timer(TimerEvent::CountdownTick);
        assert_eq!(funnel.view(), View::Quiz);
        assert_eq!(funnel.drain_timers(), 0);
    }
}
