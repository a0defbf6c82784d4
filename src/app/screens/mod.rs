//! TUI screen components
//!
//! Contains the renderers for the three funnel views.

pub mod loading;
pub mod quiz;
pub mod sales;

pub use loading::LoadingScreen;
pub use quiz::QuizScreen;
pub use sales::SalesScreen;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Accent used for titles and key hints
pub(crate) const ACCENT: Color = Color::Magenta;

/// Render a bordered, centered title
pub(crate) fn render_title(f: &mut Frame, area: Rect, title: &str, color: Color) {
    let title = Paragraph::new(title.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(title, area);
}

/// Render the key hint line, e.g. `[("↑↓", "Navigate"), ("Q", "Quit")]`
pub(crate) fn render_help(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, action)) in hints.iter().enumerate() {
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
        let gap = if i + 1 < hints.len() { "  " } else { "" };
        spans.push(Span::raw(format!(" {}{}", action, gap)));
    }

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(help, area);
}

/// Rectangle of the given size centered in `area`, clamped to fit
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height - height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width - width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
pub(crate) mod test_util {
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    /// Draw with a test backend and return the buffer text, one line per row
    pub fn render_to_string<F>(width: u16, height: u16, draw: F) -> String
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(draw).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    pub fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_clamps() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(20, 4, area);
        assert_eq!(rect, Rect::new(10, 3, 20, 4));

        let rect = centered_rect(100, 100, area);
        assert_eq!(rect, area);
    }
}
