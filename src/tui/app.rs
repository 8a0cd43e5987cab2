// TUI application state
//
// Owns the three hooks and all view-local state (input buffer, filter,
// selection, theme, toast). Completion events from fetch tasks are applied
// here; the only cross-hook coupling is top-level refresh signaling - a
// successful analysis refreshes the history window.

use super::components::toast::Toast;
use super::theme::{Theme, ThemeKind};
use crate::client::models::HistoryRecord;
use crate::client::ApiClient;
use crate::config::Config;
use crate::events::ApiEvent;
use crate::hooks::{AnalysisHook, CacheStatsHook, HistoryHook};
use crate::logging::LogBuffer;
use crate::validate::validate_text;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Different views the TUI can display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Main, // Analyzer + history + cache panels
    Logs, // Captured tracing output
    Help, // Keybindings
}

impl View {
    /// Display name for the title bar
    pub fn name(&self) -> &'static str {
        match self {
            View::Main => "Analyze",
            View::Logs => "Logs",
            View::Help => "Help",
        }
    }
}

/// History list filter; a view concern that never touches hook state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentimentFilter {
    #[default]
    All,
    Positive,
    Negative,
}

impl SentimentFilter {
    pub fn next(self) -> Self {
        match self {
            SentimentFilter::All => SentimentFilter::Positive,
            SentimentFilter::Positive => SentimentFilter::Negative,
            SentimentFilter::Negative => SentimentFilter::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SentimentFilter::All => "All",
            SentimentFilter::Positive => "Positive",
            SentimentFilter::Negative => "Negative",
        }
    }

    fn matches(&self, record: &HistoryRecord) -> bool {
        match self {
            SentimentFilter::All => true,
            SentimentFilter::Positive => record.sentiment.is_positive(),
            SentimentFilter::Negative => !record.sentiment.is_positive(),
        }
    }
}

/// Debounce duration for action keys (Enter, Esc, q)
/// Prevents rapid-fire triggers on terminals that don't send release events
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// Main application state for the TUI
pub struct App {
    /// Current view being displayed
    pub view: View,

    /// Whether keystrokes edit the input buffer (insert mode) or act as
    /// commands (normal mode)
    pub insert_mode: bool,

    /// Analyzer input buffer
    pub input: String,

    /// Pre-flight validation message shown instead of issuing a request
    pub validation_error: Option<String>,

    pub analysis: AnalysisHook,
    pub history: HistoryHook,
    pub cache: CacheStatsHook,

    /// Startup health probe outcome (None until it resolves)
    pub healthy: Option<bool>,

    /// Sentiment filter applied to the rendered history list
    pub filter: SentimentFilter,

    /// Expanded history row (index into the filtered list)
    pub selected: Option<usize>,

    /// Scroll offset for the logs view
    pub logs_scroll: usize,

    pub theme_kind: ThemeKind,
    pub theme: Theme,

    pub toast: Option<Toast>,
    pub should_quit: bool,
    pub log_buffer: LogBuffer,

    /// When the app started (for uptime display)
    start_time: Instant,

    /// Last time an action key was triggered (for debouncing)
    last_action_time: Option<Instant>,
}

impl App {
    pub fn new(
        client: ApiClient,
        tx: mpsc::Sender<ApiEvent>,
        config: &Config,
        log_buffer: LogBuffer,
    ) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme);

        Self {
            view: View::default(),
            insert_mode: false,
            input: String::new(),
            validation_error: None,
            analysis: AnalysisHook::new(client.clone(), tx.clone()),
            history: HistoryHook::new(client.clone(), tx.clone(), config.history_initial_limit),
            cache: CacheStatsHook::new(client, tx, config.stats_refresh_ms),
            healthy: None,
            filter: SentimentFilter::default(),
            selected: None,
            logs_scroll: 0,
            theme_kind,
            theme: theme_kind.theme(),
            toast: None,
            should_quit: false,
            log_buffer,
            start_time: Instant::now(),
            last_action_time: None,
        }
    }

    /// Apply a completion event to the owning hook
    pub fn apply_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::AnalysisCompleted { seq, outcome } => {
                let accepted = seq == self.analysis.current_seq();
                self.analysis.apply(seq, outcome);

                // Top-level refresh signaling: a new record exists, so the
                // visible history window is stale
                if accepted && self.analysis.result.is_some() {
                    self.history.refresh();
                }
            }
            ApiEvent::HistoryLoaded { seq, outcome } => {
                self.history.apply(seq, outcome);
                self.clamp_selection();
            }
            ApiEvent::CacheStatsLoaded { seq, outcome } => self.cache.apply(seq, outcome),
            ApiEvent::StatsTick => self.cache.refresh(),
            ApiEvent::HealthChecked { healthy } => self.healthy = Some(healthy),
        }
    }

    /// Validate the input buffer and submit it for analysis
    ///
    /// Invalid text never issues a request; the message is shown inline.
    pub fn submit(&mut self) {
        match validate_text(&self.input) {
            Ok(trimmed) => {
                self.validation_error = None;
                self.insert_mode = false;
                self.analysis.analyze(trimmed.to_string());
            }
            Err(message) => {
                self.validation_error = Some(message);
            }
        }
    }

    /// Clear the result card, input, and validation state
    pub fn reset_analysis(&mut self) {
        self.analysis.reset();
        self.input.clear();
        self.validation_error = None;
    }

    /// Manual refresh of both data panels
    pub fn refresh_all(&mut self) {
        self.history.refresh();
        self.cache.refresh();
    }

    /// Grow the history window when the server holds more records
    pub fn load_more(&mut self) {
        if self.history.has_more() && !self.history.loading {
            self.history.load_more();
        }
    }

    /// Cycle the history filter: all -> positive -> negative
    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.selected = None;
    }

    /// History records passing the current filter, in server order
    pub fn filtered_history(&self) -> Vec<&HistoryRecord> {
        self.history
            .records
            .iter()
            .filter(|r| self.filter.matches(r))
            .collect()
    }

    /// Move the history selection down
    pub fn select_next(&mut self) {
        let count = self.filtered_history().len();
        if count == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1).min(count - 1),
            None => 0,
        });
    }

    /// Move the history selection up
    pub fn select_previous(&mut self) {
        self.selected = match self.selected {
            Some(0) | None => None,
            Some(idx) => Some(idx - 1),
        };
    }

    fn clamp_selection(&mut self) {
        let count = self.filtered_history().len();
        if let Some(idx) = self.selected {
            if idx >= count {
                self.selected = count.checked_sub(1);
            }
        }
    }

    /// Cycle to the next theme
    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
    }

    /// Text to copy for the current result, if any
    pub fn copy_result_text(&self) -> Option<String> {
        use super::components::formatters::{format_confidence, format_processing_time};

        self.analysis.result.as_ref().map(|r| {
            format!(
                "{} ({}) - \"{}\" [{}{}]",
                r.sentiment.as_str(),
                format_confidence(r.confidence),
                r.text,
                format_processing_time(r.processing_time_ms),
                if r.cached { ", cached" } else { "" },
            )
        })
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }

    /// Check if an action should be debounced
    /// Returns true if the action should be blocked (too soon since last)
    pub fn should_debounce_action(&mut self) -> bool {
        let now = Instant::now();
        if let Some(last) = self.last_action_time {
            if now.duration_since(last) < ACTION_DEBOUNCE {
                return true;
            }
        }
        self.last_action_time = Some(now);
        false
    }

    /// Uptime as HH:MM:SS for the status bar
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::HistoryPage;

    fn app() -> App {
        let client = ApiClient::new("http://localhost:8000", Duration::from_secs(10)).unwrap();
        let (tx, _rx) = mpsc::channel(16);
        let mut config = Config::default();
        config.stats_refresh_ms = 0; // no ticker task in tests
        App::new(client, tx, &config, LogBuffer::new())
    }

    fn page(total: usize, positives: usize, negatives: usize) -> HistoryPage {
        let mut analyses = Vec::new();
        for i in 0..(positives + negatives) {
            let sentiment = if i < positives { "POSITIVE" } else { "NEGATIVE" };
            analyses.push(
                serde_json::from_str(&format!(
                    r#"{{"id":{i},"text":"item {i}","sentiment":"{sentiment}",
                        "confidence":0.9,"processing_time_ms":5,
                        "created_at":"2026-01-15T10:30:00Z"}}"#
                ))
                .unwrap(),
            );
        }
        HistoryPage { total, analyses }
    }

    #[tokio::test]
    async fn invalid_input_blocks_the_request() {
        let mut app = app();
        app.input = "   ".to_string();

        let seq_before = app.analysis.current_seq();
        app.submit();

        assert_eq!(app.analysis.current_seq(), seq_before);
        assert!(!app.analysis.loading);
        assert_eq!(
            app.validation_error.as_deref(),
            Some("Please enter some text to analyze")
        );
    }

    #[tokio::test]
    async fn valid_input_issues_exactly_one_request() {
        let mut app = app();
        app.input = "I love this!".to_string();

        let seq_before = app.analysis.current_seq();
        app.submit();

        assert_eq!(app.analysis.current_seq(), seq_before + 1);
        assert!(app.analysis.loading);
        assert!(app.validation_error.is_none());
    }

    #[tokio::test]
    async fn successful_analysis_refreshes_history() {
        let mut app = app();
        app.input = "great".to_string();
        app.submit();

        let history_seq = app.history.current_seq();
        let result = serde_json::from_str(
            r#"{"text":"great","sentiment":"POSITIVE","confidence":0.97,
                "processing_time_ms":42,"cached":false}"#,
        )
        .unwrap();
        app.apply_event(ApiEvent::AnalysisCompleted {
            seq: app.analysis.current_seq(),
            outcome: Ok(result),
        });

        assert!(app.analysis.result.is_some());
        assert_eq!(app.history.current_seq(), history_seq + 1);
    }

    #[tokio::test]
    async fn failed_analysis_does_not_refresh_history() {
        let mut app = app();
        app.input = "meh".to_string();
        app.submit();

        let history_seq = app.history.current_seq();
        app.apply_event(ApiEvent::AnalysisCompleted {
            seq: app.analysis.current_seq(),
            outcome: Err("An error occurred".into()),
        });

        assert_eq!(app.analysis.error.as_deref(), Some("An error occurred"));
        assert_eq!(app.history.current_seq(), history_seq);
    }

    #[tokio::test]
    async fn filter_cycles_and_narrows_the_list() {
        let mut app = app();
        app.history
            .apply(app.history.current_seq(), Ok(page(5, 3, 2)));

        assert_eq!(app.filtered_history().len(), 5);

        app.cycle_filter();
        assert_eq!(app.filter, SentimentFilter::Positive);
        assert_eq!(app.filtered_history().len(), 3);

        app.cycle_filter();
        assert_eq!(app.filter, SentimentFilter::Negative);
        assert_eq!(app.filtered_history().len(), 2);

        app.cycle_filter();
        assert_eq!(app.filter, SentimentFilter::All);
    }

    #[tokio::test]
    async fn selection_stays_within_the_filtered_list() {
        let mut app = app();
        app.history
            .apply(app.history.current_seq(), Ok(page(3, 2, 1)));

        app.select_next();
        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.selected, Some(2));

        app.select_previous();
        assert_eq!(app.selected, Some(1));

        // Narrowing the filter clamps a now-out-of-range selection
        app.selected = Some(2);
        app.history
            .apply(app.history.current_seq(), Ok(page(3, 2, 1)));
        app.filter = SentimentFilter::Negative;
        app.clamp_selection();
        assert_eq!(app.selected, Some(0));
    }

    #[tokio::test]
    async fn reset_clears_result_input_and_validation() {
        let mut app = app();
        app.input = "x".repeat(600);
        app.submit();
        assert!(app.validation_error.is_some());

        app.reset_analysis();
        assert!(app.input.is_empty());
        assert!(app.validation_error.is_none());
        assert!(app.analysis.result.is_none());
        assert!(!app.analysis.loading);
    }
}
