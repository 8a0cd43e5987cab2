// Cache performance panel
//
// Renders the latest metrics snapshot: key counts, hit rate with a gauge,
// hits/misses, memory, and the backend connectivity indicator. The hook
// polls on its own interval; this panel only reads the snapshot.

use super::formatters::format_memory;
use crate::client::models::CacheStatus;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the hit-rate bar in cells
const BAR_WIDTH: usize = 20;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(" Cache Performance ");

    let lines: Vec<Line> = if let Some(message) = &app.cache.error {
        vec![
            Line::default(),
            Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(theme.error),
            )),
            Line::from(Span::styled(
                "  Press r to retry",
                Style::default().fg(theme.muted),
            )),
        ]
    } else if let Some(stats) = &app.cache.stats {
        let rate_color = theme.hit_rate_color(stats.hit_rate);
        let filled = ((stats.hit_rate / 100.0 * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));

        let (status_color, status_label) = match stats.status {
            CacheStatus::Connected => (theme.hit_good, "Redis connected"),
            CacheStatus::Disconnected => (theme.error, "Redis disconnected"),
        };

        let refresh_note = if app.cache.auto_refresh_enabled() {
            format!(" · auto-refreshes every {}s", app.cache.interval_ms() / 1000)
        } else {
            String::new()
        };

        let keys_line = if bp.at_least(Breakpoint::Wide) {
            Line::from(vec![
                Span::styled("  Keys: ", Style::default().fg(theme.muted)),
                Span::styled(stats.total_keys.to_string(), Style::default().fg(theme.fg)),
                Span::styled(
                    format!(" ({} sentiment)", stats.sentiment_keys),
                    Style::default().fg(theme.muted),
                ),
                Span::styled("   Memory: ", Style::default().fg(theme.muted)),
                Span::styled(
                    format_memory(stats.memory_used_mb),
                    Style::default().fg(theme.fg),
                ),
            ])
        } else {
            Line::from(vec![
                Span::styled("  Keys: ", Style::default().fg(theme.muted)),
                Span::styled(stats.total_keys.to_string(), Style::default().fg(theme.fg)),
                Span::styled("  Mem: ", Style::default().fg(theme.muted)),
                Span::styled(
                    format_memory(stats.memory_used_mb),
                    Style::default().fg(theme.fg),
                ),
            ])
        };

        vec![
            Line::default(),
            Line::from(vec![
                Span::styled("  Hit rate: ", Style::default().fg(theme.muted)),
                Span::styled(
                    format!("{:.1}%", stats.hit_rate),
                    Style::default().fg(rate_color).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(bar, Style::default().fg(rate_color)),
            ]),
            Line::from(vec![
                Span::styled("  Hits / Misses: ", Style::default().fg(theme.muted)),
                Span::styled(
                    format!("{} / {}", stats.hits, stats.misses),
                    Style::default().fg(theme.fg),
                ),
            ]),
            keys_line,
            Line::default(),
            Line::from(vec![
                Span::styled("  ● ", Style::default().fg(status_color)),
                Span::styled(
                    format!("{}{}", status_label, refresh_note),
                    Style::default().fg(theme.muted),
                ),
            ]),
        ]
    } else {
        vec![
            Line::default(),
            Line::from(Span::styled(
                if app.cache.loading {
                    "  Loading cache stats…"
                } else {
                    "  No cache stats yet"
                },
                Style::default().fg(theme.muted),
            )),
        ]
    };

    f.render_widget(Paragraph::new(lines).block(block), area);
}
