// Analyzer input panel
//
// The text-entry box plus its character counter and inline validation
// message. In insert mode the border highlights and a cursor block is
// shown at the end of the buffer.

use crate::tui::app::App;
use crate::validate::MAX_TEXT_LENGTH;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let border_color = if app.insert_mode {
        theme.border_focused
    } else {
        theme.border
    };

    let count = app.input.chars().count();
    let counter_color = if count > MAX_TEXT_LENGTH {
        theme.error
    } else {
        theme.muted
    };

    let title = if app.insert_mode {
        " Text to analyze (Enter to submit, Esc to stop editing) "
    } else {
        " Text to analyze (press i to edit) "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(title)
        .title_bottom(Line::from(vec![Span::styled(
            format!(" {}/{} ", count, MAX_TEXT_LENGTH),
            Style::default().fg(counter_color),
        )]));

    let mut spans = vec![Span::styled(
        app.input.as_str(),
        Style::default().fg(theme.fg),
    )];
    if app.insert_mode {
        spans.push(Span::styled(
            "█",
            Style::default().fg(theme.accent).add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let mut lines = vec![Line::from(spans)];
    if let Some(message) = &app.validation_error {
        lines.push(Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(theme.error),
        )));
    }

    let input = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);

    f.render_widget(input, area);
}
