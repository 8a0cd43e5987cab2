// Status bar component
//
// Bottom line: uptime, server reachability, history window, cache hit
// rate, current theme, and the key hint for help.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    let health = match app.healthy {
        Some(true) => "● online",
        Some(false) => "○ offline",
        None => "◌ checking",
    };

    let hit_rate = app
        .cache
        .stats
        .as_ref()
        .map(|s| format!("{:.0}%", s.hit_rate))
        .unwrap_or_else(|| "--".to_string());

    let status_text = if bp.at_least(Breakpoint::Normal) {
        format!(
            " {} │ {} │ history {}/{} │ cache {} │ {} │ ? help · q quit",
            app.uptime(),
            health,
            app.history.records.len(),
            app.history.total,
            hit_rate,
            app.theme_kind.name(),
        )
    } else {
        format!(
            " {} │ {} │ {}/{} │ {}",
            app.uptime(),
            health,
            app.history.records.len(),
            app.history.total,
            hit_rate,
        )
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
