//! Toast notification component
//!
//! Non-blocking overlay in the bottom-right corner that auto-dismisses.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// A toast notification that auto-dismisses
pub struct Toast {
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    /// Create a new toast with the default 2-second duration
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration: Duration::from_secs(2),
        }
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Box width: message display columns plus borders and padding,
    /// clamped to the available area
    fn box_width(&self, area_width: u16) -> u16 {
        (self.message.width() as u16 + 4).min(area_width.saturating_sub(4))
    }

    /// Render in the bottom-right corner, on top of other content
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let width = self.box_width(area.width);
        let height = 3;

        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.fg))
            .block(block);

        // Clear first so the toast sits above whatever is underneath
        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_width_counts_display_columns_not_bytes() {
        // "✓" is 3 bytes but 1 column; byte counting would add 2 phantom cells
        let toast = Toast::new("✓ Copied to clipboard");
        assert_eq!(toast.box_width(80), 21 + 4);
    }

    #[test]
    fn box_width_is_clamped_to_the_area() {
        let toast = Toast::new("a very long message that cannot possibly fit");
        assert_eq!(toast.box_width(20), 16);
    }
}
