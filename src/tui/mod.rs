// TUI module - Terminal User Interface
//
// Manages the terminal with ratatui: setup and cleanup, the event loop,
// and dispatch of keyboard input and fetch completion events into `App`.

pub mod app;
pub mod clipboard;
pub mod components;
pub mod layout;
pub mod theme;
pub mod ui;

use crate::client::ApiClient;
use crate::config::Config;
use crate::events::ApiEvent;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, View};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal on
/// exit. The receiver side of the event channel delivers fetch completions
/// from the hooks' spawned tasks.
pub async fn run_tui(
    client: ApiClient,
    tx: mpsc::Sender<ApiEvent>,
    mut event_rx: mpsc::Receiver<ApiEvent>,
    config: Config,
    log_buffer: LogBuffer,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Constructing App issues the mount-time fetches (history window, cache
    // stats) and starts the stats ticker when auto-refresh is enabled
    let mut app = App::new(client, tx, &config, log_buffer);

    let result = run_event_loop(&mut terminal, &mut app, &mut event_rx).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// tokio::select! waits on keyboard input, the redraw tick, and fetch
/// completion events at the same time. All state changes happen on this
/// task; the spawned fetches only ever talk back through the channel.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_rx: &mut mpsc::Receiver<ApiEvent>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick: toast expiry and redraw
            _ = tick_interval.tick() => {
                app.tick();
            }

            // Fetch completions (and ticker/health signals)
            Some(api_event) = event_rx.recv() => {
                app.apply_event(api_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
///
/// Insert mode captures everything for the input buffer; normal mode treats
/// keys as commands.
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    if app.insert_mode {
        handle_insert_mode(app, key_event.code);
    } else {
        handle_normal_mode(app, key_event.code);
    }
}

fn handle_insert_mode(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Enter => {
            if !app.should_debounce_action() {
                app.submit();
            }
        }
        KeyCode::Esc => {
            app.insert_mode = false;
        }
        KeyCode::Backspace => {
            app.input.pop();
            app.validation_error = None;
        }
        KeyCode::Char(c) => {
            app.input.push(c);
            app.validation_error = None;
        }
        _ => {}
    }
}

fn handle_normal_mode(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if !app.should_debounce_action() {
                app.should_quit = true;
            }
        }

        // View switching
        KeyCode::Esc | KeyCode::F(1) => {
            if app.view != View::Main {
                app.view = View::Main;
            } else if app.selected.is_some() {
                app.selected = None;
            }
        }
        KeyCode::F(2) | KeyCode::Char('l') => {
            app.view = View::Logs;
            app.logs_scroll = 0;
        }
        KeyCode::Char('?') => {
            app.view = View::Help;
        }

        // Analyzer
        KeyCode::Char('i') => {
            if app.view == View::Main {
                app.insert_mode = true;
            }
        }
        KeyCode::Enter => {
            if app.view == View::Main && !app.should_debounce_action() {
                app.submit();
            }
        }
        KeyCode::Char('x') => {
            if app.view == View::Main {
                app.reset_analysis();
            }
        }
        KeyCode::Char('y') => {
            if let Some(text) = app.copy_result_text() {
                if clipboard::copy_to_clipboard(&text).is_ok() {
                    app.show_toast("✓ Copied to clipboard");
                } else {
                    app.show_toast("✗ Failed to copy");
                }
            }
        }

        // History and cache
        KeyCode::Char('r') => {
            if !app.should_debounce_action() {
                app.refresh_all();
            }
        }
        KeyCode::Char('m') => {
            if !app.should_debounce_action() {
                app.load_more();
            }
        }
        KeyCode::Char('f') => {
            app.cycle_filter();
        }

        // Navigation: history selection on Main, scrollback on Logs
        KeyCode::Up | KeyCode::Char('k') => match app.view {
            View::Main => app.select_previous(),
            View::Logs => app.logs_scroll = app.logs_scroll.saturating_add(1),
            View::Help => {}
        },
        KeyCode::Down | KeyCode::Char('j') => match app.view {
            View::Main => app.select_next(),
            View::Logs => app.logs_scroll = app.logs_scroll.saturating_sub(1),
            View::Help => {}
        },

        KeyCode::Char('t') => {
            app.next_theme();
        }
        _ => {}
    }
}
