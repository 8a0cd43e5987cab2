// Completion events that flow from spawned fetch tasks back to the TUI loop
//
// Hooks own their state on the TUI task; network calls run in spawned tasks
// and report back over an mpsc channel. Each data-bearing event carries the
// sequence number its request was issued with, so a hook can discard
// completions that resolve after a newer request was started.

use crate::client::models::{AnalysisResult, CacheMetrics, HistoryPage};

/// Outcome of a single API call, already flattened to a display message
/// on the error side (hooks only ever show errors, never inspect them)
pub type Outcome<T> = Result<T, String>;

/// Events consumed by the TUI event loop
#[derive(Debug)]
pub enum ApiEvent {
    /// An analyze call finished
    AnalysisCompleted {
        seq: u64,
        outcome: Outcome<AnalysisResult>,
    },

    /// A history window fetch finished
    HistoryLoaded {
        seq: u64,
        outcome: Outcome<HistoryPage>,
    },

    /// A cache metrics fetch finished
    CacheStatsLoaded {
        seq: u64,
        outcome: Outcome<CacheMetrics>,
    },

    /// The cache-stats poll interval elapsed; the hook should re-fetch
    StatsTick,

    /// Startup health probe resolved
    HealthChecked { healthy: bool },
}
