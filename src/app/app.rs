//! Main application controller
//!
//! Owns the terminal and the funnel, and runs the draw/input loop.

use crate::{
    app::{funnel::Funnel, tui::Tui},
    config::FunnelConfig,
    FunnelError, Result,
};
use tracing::info;

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    /// Views, answers and timers
    funnel: Funnel,
}

impl App {
    /// Create a new application instance
    pub fn new(config: FunnelConfig) -> Result<Self> {
        Ok(Self {
            tui: Tui::new(config.ui.tick_rate)?,
            funnel: Funnel::new(config),
        })
    }

    /// Initialize the application and TUI
    pub fn init(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| FunnelError::TuiError(format!("failed to initialise terminal: {}", e)))?;
        info!("terminal initialised");
        Ok(())
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.funnel.should_quit() {
            self.funnel.drain_timers();
            self.draw()?;
            self.handle_events()?;
            // Let timer tasks run between polls
            tokio::task::yield_now().await;
        }
        Ok(())
    }

    /// Restore the terminal
    pub fn restore(&mut self) -> Result<()> {
        self.tui.restore()?;
        Ok(())
    }

    /// Draw the current screen
    fn draw(&mut self) -> Result<()> {
        let funnel = &mut self.funnel;
        self.tui.draw(|f| funnel.render(f))?;
        Ok(())
    }

    /// Handle keyboard events and update state
    fn handle_events(&mut self) -> Result<()> {
        if let Some(key) = self.tui.next_key()? {
            self.funnel.handle_key(key);
        }
        Ok(())
    }
}
