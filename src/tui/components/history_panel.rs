// History panel
//
// Scrollable list of past analyses with the sentiment filter and the
// load-more affordance. Rows show truncated text; the selected row expands
// to the full text. The "Load More (N remaining)" line appears exactly
// while the server holds records beyond the fetched window.

use super::formatters::{format_confidence, format_relative_time};
use crate::tui::app::App;
use crate::util::truncate_with_ellipsis;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Row text is clipped to this many display columns unless expanded
const ROW_TEXT_WIDTH: usize = 60;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let records = app.filtered_history();

    let title = if app.history.total > 0 {
        format!(
            " Recent Analyses ({}) · Filter: {} ",
            app.history.total,
            app.filter.label()
        )
    } else {
        " Recent Analyses ".to_string()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(title);

    if let Some(message) = &app.history.error {
        let items = vec![
            ListItem::new(Line::default()),
            ListItem::new(Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(theme.error),
            ))),
            ListItem::new(Line::from(Span::styled(
                "  Press r to try again",
                Style::default().fg(theme.muted),
            ))),
        ];
        f.render_widget(List::new(items).block(block), area);
        return;
    }

    if records.is_empty() {
        let hint = if app.history.loading {
            "  Loading history…"
        } else {
            "  No analysis history yet. Analyze your first text above!"
        };
        let items = vec![
            ListItem::new(Line::default()),
            ListItem::new(Line::from(Span::styled(
                hint,
                Style::default().fg(theme.muted),
            ))),
        ];
        f.render_widget(List::new(items).block(block), area);
        return;
    }

    // Keep the selected row inside the viewport
    let viewport = area.height.saturating_sub(2) as usize;
    let offset = match app.selected {
        Some(idx) if idx >= viewport => idx + 1 - viewport,
        _ => 0,
    };

    let mut items: Vec<ListItem> = Vec::new();
    for (idx, record) in records.iter().enumerate().skip(offset) {
        let is_selected = app.selected == Some(idx);
        let color = theme.sentiment_color(record.sentiment.is_positive());
        let marker = if record.sentiment.is_positive() { "+" } else { "-" };

        let text = if is_selected {
            record.text.clone()
        } else {
            truncate_with_ellipsis(&record.text, ROW_TEXT_WIDTH)
        };

        let mut line = vec![
            Span::styled(format!(" {} ", marker), Style::default().fg(color)),
            Span::styled(text, Style::default().fg(theme.fg)),
            Span::raw("  "),
            Span::styled(
                format_confidence(record.confidence),
                Style::default().fg(color),
            ),
            Span::raw(" · "),
            Span::styled(
                format_relative_time(record.created_at),
                Style::default().fg(theme.muted),
            ),
        ];
        if is_selected {
            line.insert(0, Span::styled("▶", Style::default().fg(theme.accent)));
        } else {
            line.insert(0, Span::raw(" "));
        }

        let style = if is_selected {
            Style::default()
                .bg(theme.selected_bg)
                .fg(theme.selected_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        items.push(ListItem::new(Line::from(line)).style(style));
    }

    if app.history.has_more() {
        items.push(ListItem::new(Line::from(Span::styled(
            format!("  ⌄ Load More ({} remaining) · press m", app.history.remaining()),
            Style::default().fg(theme.accent),
        ))));
    }

    f.render_widget(List::new(items).block(block), area);
}
