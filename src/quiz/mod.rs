//! Quiz module
//!
//! Step catalog, input validation and the linear step sequencer.

pub mod catalog;
pub mod input;
pub mod sequencer;

pub use catalog::{Choice, Step, StepKind};
pub use sequencer::{QuizEffect, QuizInput, QuizSequencer, Transition};
