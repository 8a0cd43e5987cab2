// UI rendering logic
//
// The frame is assembled here on every draw: title bar, the active view's
// content, and the status bar. Individual panels live in `components`.

use super::app::{App, View};
use super::components::{analyzer_panel, cache_panel, history_panel, result_card, status_bar};
use super::layout::Breakpoint;
use crate::logging::{LogEntry, LogLevel};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Main render function, called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Active view
            Constraint::Length(2), // Status bar
        ])
        .split(f.area());

    render_title(f, chunks[0], app);

    match app.view {
        View::Main => render_main_view(f, chunks[1], app),
        View::Logs => render_logs_view(f, chunks[1], app),
        View::Help => render_help_view(f, chunks[1], app),
    }

    status_bar::render(f, chunks[2], app);

    if let Some(toast) = &app.toast {
        let area = f.area();
        toast.render(f, area, &app.theme);
    }
}

fn render_title(f: &mut Frame, area: Rect, app: &App) {
    let title_text = format!(
        " ◍ Sentiscope v{} ──── {}",
        crate::config::VERSION,
        app.view.name()
    );

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border))
                .title_top(Line::from(" ? ").right_aligned()),
        );

    f.render_widget(title, area);
}

/// Render the main view: analyzer and result on one side, history and
/// cache stats on the other. Stacks vertically below the Normal breakpoint.
fn render_main_view(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);

    if bp.at_least(Breakpoint::Normal) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(8)])
            .split(columns[0]);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(9)])
            .split(columns[1]);

        analyzer_panel::render(f, left[0], app);
        result_card::render(f, left[1], app);
        history_panel::render(f, right[0], app);
        cache_panel::render(f, right[1], app);
    } else {
        // Narrow terminal: single column, cache stats drop off
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7),
                Constraint::Length(8),
                Constraint::Min(6),
            ])
            .split(area);

        analyzer_panel::render(f, rows[0], app);
        result_card::render(f, rows[1], app);
        history_panel::render(f, rows[2], app);
    }
}

/// Render the logs view: captured tracing output, newest at the bottom
fn render_logs_view(f: &mut Frame, area: Rect, app: &App) {
    let entries = app.log_buffer.get_all();
    let height = area.height.saturating_sub(2) as usize;
    let total = entries.len();

    // logs_scroll counts lines back from the tail
    let end = total.saturating_sub(app.logs_scroll);
    let start = end.saturating_sub(height);

    let items: Vec<ListItem> = entries[start..end]
        .iter()
        .map(|entry| {
            let style = Style::default().fg(log_level_color(app, &entry.level));
            ListItem::new(format_log_entry(entry)).style(style)
        })
        .collect();

    let title = format!(" Logs ({}) ─ ↑/↓ scroll, Esc to go back ", total);
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border))
            .title(title),
    );

    f.render_widget(list, area);
}

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn log_level_color(app: &App, level: &LogLevel) -> ratatui::style::Color {
    match level {
        LogLevel::Error => app.theme.log_error,
        LogLevel::Warn => app.theme.log_warn,
        LogLevel::Info => app.theme.log_info,
        LogLevel::Debug => app.theme.log_debug,
        LogLevel::Trace => app.theme.log_trace,
    }
}

/// Render the help view
fn render_help_view(f: &mut Frame, area: Rect, app: &App) {
    let content = format!(
        r#"
  Keyboard Shortcuts
  ──────────────────────────────────

  Analyzer
    i           Edit input text
    Enter       Submit for analysis
    Esc         Stop editing
    x           Clear result and input
    y           Copy result to clipboard

  History
    ↑/↓         Select / expand a row
    f           Cycle sentiment filter
    m           Load more records
    r           Refresh history and stats

  Views
    Esc / F1    Analyze (main view)
    l / F2      Logs
    ?           Help (this screen)

  General
    t           Cycle theme
    q           Quit

  ──────────────────────────────────
  Theme: {}
    "#,
        app.theme_kind.name()
    );

    let paragraph = Paragraph::new(content)
        .style(Style::default().fg(app.theme.fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border))
                .title(" Help (?) ─ Press Esc to go back "),
        );

    f.render_widget(paragraph, area);
}
