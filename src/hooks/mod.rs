// Stateful data-fetching hooks
//
// Each hook owns its slice of state exclusively and drives one fetch
// lifecycle against the API client. Network calls run in spawned tasks;
// completions come back through the shared mpsc channel and are applied
// on the TUI task via `apply()`.
//
// Stale-response discipline: every request is tagged with the hook's
// monotonically increasing sequence number at issue time. A completion
// whose sequence is not the latest issued is dropped - the most recent
// request always wins, and a reset detaches anything still in flight.

pub mod analysis;
pub mod cache_stats;
pub mod history;

pub use analysis::AnalysisHook;
pub use cache_stats::CacheStatsHook;
pub use history::HistoryHook;
