//! TUI application module
//!
//! Contains the terminal user interface components, screen management,
//! and application state handling.

pub mod app;
pub mod funnel;
pub mod screens;
pub mod state;
pub mod tui;

pub use app::App;
pub use funnel::Funnel;
pub use screens::{LoadingScreen, QuizScreen, SalesScreen};
pub use state::{InputMode, NavigationAction, View, ViewController};
pub use tui::Tui;
