//! Data models module
//!
//! Contains the answer record collected by the quiz and the body metrics
//! derived from it.

pub mod answers;
pub mod metrics;

// Re-export commonly used types
pub use answers::{AnswerUpdate, Answers, ListField, TextField};
pub use metrics::{BmiCategory, ProjectionPoint};
