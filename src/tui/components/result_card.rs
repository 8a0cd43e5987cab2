// Result card
//
// Shows the outcome of the latest analyze call: label, confidence with a
// gauge, latency, and a cache badge. While loading it shows a spinner
// line; on failure the normalized error message.

use super::formatters::{confidence_level, format_confidence, format_processing_time};
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Width of the confidence bar in cells
const BAR_WIDTH: usize = 24;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(" Result ");

    let lines: Vec<Line> = if app.analysis.loading {
        vec![
            Line::default(),
            Line::from(Span::styled(
                "  Analyzing…",
                Style::default().fg(theme.accent),
            )),
        ]
    } else if let Some(message) = &app.analysis.error {
        vec![
            Line::default(),
            Line::from(Span::styled(
                format!("  ✗ {}", message),
                Style::default().fg(theme.error),
            )),
            Line::default(),
            Line::from(Span::styled(
                "  Press Enter to try again",
                Style::default().fg(theme.muted),
            )),
        ]
    } else if let Some(result) = &app.analysis.result {
        let color = theme.sentiment_color(result.sentiment.is_positive());
        let icon = if result.sentiment.is_positive() { "☺" } else { "☹" };

        let filled = ((result.confidence * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));

        let mut meta = vec![
            Span::styled("  ⏱ ", Style::default().fg(theme.muted)),
            Span::styled(
                format_processing_time(result.processing_time_ms),
                Style::default().fg(theme.fg),
            ),
        ];
        if result.cached {
            meta.push(Span::raw("  "));
            meta.push(Span::styled(
                "⚡ cached",
                Style::default().fg(theme.cached_badge),
            ));
        }

        vec![
            Line::default(),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{} {}", icon, result.sentiment.as_str()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    format_confidence(result.confidence),
                    Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(bar, Style::default().fg(color)),
                Span::raw(" "),
                Span::styled(
                    confidence_level(result.confidence),
                    Style::default().fg(theme.muted),
                ),
            ]),
            Line::from(meta),
            Line::default(),
            Line::from(Span::styled(
                format!("  \"{}\"", result.text),
                Style::default().fg(theme.muted),
            )),
        ]
    } else {
        vec![
            Line::default(),
            Line::from(Span::styled(
                "  Enter some text above and press Enter to analyze it.",
                Style::default().fg(theme.muted),
            )),
        ]
    };

    let card = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    f.render_widget(card, area);
}
