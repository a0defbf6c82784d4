//! Personalised offer page
//!
//! The report is a read-only projection of the finished answers. The
//! countdown, purchase popup and carousel are cosmetic state driven by
//! scoped timers; none of them reads or writes the answers.

pub mod content;

use crate::config::SalesConfig;
use crate::models::{metrics, Answers};
use crate::timers::{sleep_or_cancel, ScopedTask, TimerEvent};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, trace};

/// Goal shown when none was selected
const DEFAULT_GOAL: &str = "Perder Peso";

/// Answer-derived fields interpolated into the offer page
#[derive(Debug, Clone, PartialEq)]
pub struct SalesReport {
    pub greeting: String,
    pub main_goal: String,
    pub focus_area: String,
    pub bmi: String,
    pub routine: String,
    pub age_range: String,
}

impl SalesReport {
    /// Build the report from a finished answer record
    pub fn from_answers(answers: &Answers) -> Self {
        let name = answers.name.trim();
        let greeting = if name.is_empty() {
            "Aqui está o seu PLANO PESSOAL para alcançar o seu peso ideal.".to_string()
        } else {
            format!("{}, aqui está o seu PLANO PESSOAL para alcançar o seu peso ideal.", name)
        };

        Self {
            greeting,
            main_goal: answers
                .goals
                .first()
                .cloned()
                .unwrap_or_else(|| DEFAULT_GOAL.to_string()),
            focus_area: answers.body_part.clone(),
            bmi: metrics::format_bmi(metrics::bmi(&answers.current_weight, &answers.height)),
            routine: answers.routine.clone(),
            age_range: answers.age_range.clone(),
        }
    }
}

/// Offer expiry countdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining_secs: u64,
}

impl Countdown {
    pub fn new(duration: Duration) -> Self {
        Self {
            remaining_secs: duration.as_secs(),
        }
    }

    /// Remove one second, stopping at zero
    pub fn tick(&mut self) {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Remaining time as `m:ss`
    pub fn display(&self) -> String {
        format!("{}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }
}

/// "Someone just bought" notification
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurchasePopup {
    buyer: Option<usize>,
    visible: bool,
}

impl PurchasePopup {
    pub fn show(&mut self, buyer: usize) {
        self.buyer = Some(buyer % content::RECENT_BUYERS.len());
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Buyer to show, if the popup is visible
    pub fn buyer(&self) -> Option<&'static str> {
        match (self.visible, self.buyer) {
            (true, Some(index)) => Some(content::RECENT_BUYERS[index]),
            _ => None,
        }
    }
}

/// Auto-advancing testimonial carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move forward, wrapping to the first item after the last
    pub fn advance(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Move backward, wrapping to the last item
    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }
}

/// FAQ accordion with a focus cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faq {
    open: Vec<bool>,
    focus: usize,
}

impl Faq {
    pub fn new(len: usize) -> Self {
        Self {
            open: vec![false; len],
            focus: 0,
        }
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn toggle_focused(&mut self) {
        if let Some(open) = self.open.get_mut(self.focus) {
            *open = !*open;
        }
    }

    pub fn focus_next(&mut self) {
        if !self.open.is_empty() {
            self.focus = (self.focus + 1) % self.open.len();
        }
    }

    pub fn focus_previous(&mut self) {
        if !self.open.is_empty() {
            self.focus = (self.focus + self.open.len() - 1) % self.open.len();
        }
    }
}

/// Everything the offer page displays
#[derive(Debug, Clone)]
pub struct SalesState {
    pub report: SalesReport,
    pub countdown: Countdown,
    pub popup: PurchasePopup,
    pub carousel: Carousel,
    pub faq: Faq,
}

impl SalesState {
    pub fn new(answers: &Answers, config: &SalesConfig) -> Self {
        Self {
            report: SalesReport::from_answers(answers),
            countdown: Countdown::new(config.countdown),
            popup: PurchasePopup::default(),
            carousel: Carousel::new(content::CAROUSEL.len()),
            faq: Faq::new(content::FAQ.len()),
        }
    }

    /// Apply a timer event; returns false for events this page does not own
    pub fn handle_timer(&mut self, event: TimerEvent) -> bool {
        match event {
            TimerEvent::CountdownTick => self.countdown.tick(),
            TimerEvent::PopupShow(buyer) => self.popup.show(buyer),
            TimerEvent::PopupHide => self.popup.hide(),
            TimerEvent::CarouselAdvance => self.carousel.advance(),
            TimerEvent::LoadingTick => return false,
        }
        trace!(?event, "sales timer event");
        true
    }
}

/// Timers owned by the offer page; dropping this stops all of them
#[derive(Debug)]
pub struct SalesTimers {
    countdown: ScopedTask,
    popup: ScopedTask,
    carousel: ScopedTask,
}

impl SalesTimers {
    /// Start the countdown, popup and carousel timers
    pub fn start(config: &SalesConfig, tx: mpsc::Sender<TimerEvent>) -> Self {
        debug!("starting offer page timers");
        Self {
            countdown: ScopedTask::interval(
                Duration::from_secs(1),
                tx.clone(),
                TimerEvent::CountdownTick,
            ),
            popup: popup_task(PopupSchedule::from(config), tx.clone()),
            carousel: ScopedTask::interval(
                config.carousel_interval,
                tx,
                TimerEvent::CarouselAdvance,
            ),
        }
    }

    /// Stop every timer
    pub fn cancel(&mut self) {
        self.countdown.cancel();
        self.popup.cancel();
        self.carousel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.countdown.is_cancelled() && self.popup.is_cancelled() && self.carousel.is_cancelled()
    }
}

/// Popup timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupSchedule {
    pub initial_delay: Duration,
    pub visible: Duration,
    pub gap_min: Duration,
    pub gap_max: Duration,
}

impl From<&SalesConfig> for PopupSchedule {
    fn from(config: &SalesConfig) -> Self {
        Self {
            initial_delay: config.popup_initial_delay,
            visible: config.popup_visible,
            gap_min: config.popup_gap_min,
            gap_max: config.popup_gap_max,
        }
    }
}

impl PopupSchedule {
    /// Random hidden gap between two popups
    fn gap<R: Rng>(&self, rng: &mut R) -> Duration {
        let min = u64::try_from(self.gap_min.as_millis()).unwrap_or(u64::MAX);
        let max = u64::try_from(self.gap_max.as_millis())
            .unwrap_or(u64::MAX)
            .max(min);
        Duration::from_millis(rng.gen_range(min..=max))
    }
}

/// Spawn the popup loop: wait, show a random buyer, hide, wait a random gap
pub fn popup_task(schedule: PopupSchedule, tx: mpsc::Sender<TimerEvent>) -> ScopedTask {
    ScopedTask::spawn(move |cancel| async move {
        let mut rng = SmallRng::from_entropy();
        if !sleep_or_cancel(schedule.initial_delay, &cancel).await {
            return;
        }
        loop {
            let buyer = rng.gen_range(0..content::RECENT_BUYERS.len());
            if tx.send(TimerEvent::PopupShow(buyer)).await.is_err() {
                return;
            }
            if !sleep_or_cancel(schedule.visible, &cancel).await {
                return;
            }
            if tx.send(TimerEvent::PopupHide).await.is_err() {
                return;
            }
            if !sleep_or_cancel(schedule.gap(&mut rng), &cancel).await {
                return;
            }
        }
    })
}
