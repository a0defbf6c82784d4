//! Simulated profile analysis
//!
//! A tick-driven counter from 0 to 100 with rotating status messages and
//! testimonials. Everything shown is a pure function of the progress value,
//! so redrawing any number of times cannot skip or repeat a rotation.

use tracing::{debug, info};

/// Final progress value
pub const PROGRESS_MAX: u8 = 100;

/// Progress values between testimonial rotations
const TESTIMONIAL_PERIOD: u8 = 33;

/// Status lines shown while the counter runs
pub const MESSAGES: [&str; 6] = [
    "Analisando seu metabolismo...",
    "Calculando necessidades calóricas...",
    "Identificando bloqueios de emagrecimento...",
    "Selecionando a combinação ideal de chás...",
    "Personalizando seu Método CARNAVAL BARRIGA SECA...",
    "Finalizando seu plano exclusivo...",
];

/// A short customer quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub text: &'static str,
    pub stars: u8,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Mariana Costa",
        text: "Não acreditava que chá pudesse fazer tanta diferença. Perdi 4kg na primeira semana!",
        stars: 5,
    },
    Testimonial {
        name: "Patrícia Lima",
        text: "Meu inchaço sumiu em 3 dias. Recomendo muito!",
        stars: 5,
    },
    Testimonial {
        name: "Fernanda Souza",
        text: "Finalmente algo natural que funciona de verdade. Estou amando.",
        stars: 5,
    },
];

/// Outcome of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingEvent {
    /// The counter moved to this value
    Progress(u8),
    /// The counter has shown 100; emitted exactly once
    Finished,
    /// Nothing left to do
    Idle,
}

/// Loading counter state
#[derive(Debug, Default)]
pub struct LoadingSimulator {
    progress: u8,
    finished: bool,
}

impl LoadingSimulator {
    /// Create a simulator at 0%
    pub fn new() -> Self {
        Self::default()
    }

    /// Current progress, 0..=100
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Progress as a 0.0..=1.0 ratio
    pub fn ratio(&self) -> f64 {
        f64::from(self.progress) / f64::from(PROGRESS_MAX)
    }

    /// Whether the finished event has been emitted
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one tick.
    ///
    /// The counter climbs by one per tick; the tick after it reaches 100
    /// reports [`LoadingEvent::Finished`], and every tick after that is idle.
    pub fn tick(&mut self) -> LoadingEvent {
        if self.finished {
            return LoadingEvent::Idle;
        }
        if self.progress >= PROGRESS_MAX {
            self.finished = true;
            info!("loading finished");
            return LoadingEvent::Finished;
        }

        self.progress += 1;
        if self.progress % TESTIMONIAL_PERIOD == 0 {
            debug!(progress = self.progress, "testimonial rotated");
        }
        LoadingEvent::Progress(self.progress)
    }

    /// Status line for the current progress
    pub fn message(&self) -> &'static str {
        let index = usize::from(self.progress) * MESSAGES.len() / usize::from(PROGRESS_MAX);
        MESSAGES[index.min(MESSAGES.len() - 1)]
    }

    /// Index of the testimonial for the current progress
    pub fn testimonial_index(&self) -> usize {
        usize::from(self.progress / TESTIMONIAL_PERIOD) % TESTIMONIALS.len()
    }

    /// Testimonial for the current progress
    pub fn testimonial(&self) -> &'static Testimonial {
        &TESTIMONIALS[self.testimonial_index()]
    }
}
