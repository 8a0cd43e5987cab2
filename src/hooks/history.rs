// History hook - limit-bounded view over server-side analysis history
//
// A single `limit` counter drives everything: the initial mount fetch,
// manual refreshes (current limit), and load-more (limit + 10, then a
// full re-fetch of the window). Re-fetching the whole window instead of
// requesting a delta cannot produce gaps when the server gains records
// between calls.

use crate::client::models::{HistoryPage, HistoryRecord};
use crate::client::ApiClient;
use crate::events::{ApiEvent, Outcome};
use tokio::sync::mpsc;

/// How much `load_more()` grows the window by
pub const LOAD_MORE_STEP: usize = 10;

pub struct HistoryHook {
    pub records: Vec<HistoryRecord>,
    pub total: usize,
    pub loading: bool,
    pub error: Option<String>,

    /// Current fetch window; monotonically non-decreasing
    limit: usize,

    seq: u64,
    client: ApiClient,
    tx: mpsc::Sender<ApiEvent>,
}

impl HistoryHook {
    /// Create the hook and issue the initial mount fetch
    pub fn new(client: ApiClient, tx: mpsc::Sender<ApiEvent>, initial_limit: usize) -> Self {
        let mut hook = Self {
            records: Vec::new(),
            total: 0,
            loading: false,
            error: None,
            limit: initial_limit,
            seq: 0,
            client,
            tx,
        };
        hook.fetch();
        hook
    }

    /// Re-fetch at the current limit (does not reset to the initial value)
    pub fn refresh(&mut self) {
        self.fetch();
    }

    /// Grow the window by a fixed step and re-fetch it in full
    pub fn load_more(&mut self) {
        self.limit += LOAD_MORE_STEP;
        self.fetch();
    }

    fn fetch(&mut self) {
        self.seq += 1;
        let seq = self.seq;
        let limit = self.limit;

        self.loading = true;
        self.error = None;

        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = client.fetch_history(limit).await.map_err(|e| e.to_string());
            let _ = tx.send(ApiEvent::HistoryLoaded { seq, outcome }).await;
        });
    }

    /// Apply a completion event; the window is replaced wholesale
    pub fn apply(&mut self, seq: u64, outcome: Outcome<HistoryPage>) {
        if seq != self.seq {
            tracing::debug!("Dropping stale history response (seq {} < {})", seq, self.seq);
            return;
        }

        self.loading = false;
        match outcome {
            Ok(page) => {
                self.records = page.analyses;
                self.total = page.total;
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
    }

    /// True while the server holds records beyond the fetched window
    pub fn has_more(&self) -> bool {
        self.records.len() < self.total
    }

    /// Records not yet in the window (drives the "Load More (N remaining)" label)
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.records.len())
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn current_seq(&self) -> u64 {
        self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn hook() -> HistoryHook {
        let client = ApiClient::new("http://localhost:8000", Duration::from_secs(10)).unwrap();
        let (tx, _rx) = mpsc::channel(16);
        HistoryHook::new(client, tx, 10)
    }

    fn page(total: usize, count: usize) -> HistoryPage {
        let analyses = (0..count)
            .map(|i| {
                serde_json::from_str(&format!(
                    r#"{{"id":{i},"text":"item {i}","sentiment":"POSITIVE",
                        "confidence":0.9,"processing_time_ms":5,
                        "created_at":"2026-01-15T10:30:00Z"}}"#
                ))
                .unwrap()
            })
            .collect();
        HistoryPage { total, analyses }
    }

    #[tokio::test]
    async fn mount_fetch_uses_initial_limit() {
        let hook = hook();
        assert_eq!(hook.limit(), 10);
        assert!(hook.loading);
        assert_eq!(hook.current_seq(), 1);
    }

    #[tokio::test]
    async fn load_more_grows_limit_by_exactly_ten() {
        let mut hook = hook();
        hook.apply(hook.current_seq(), Ok(page(25, 10)));

        hook.load_more();
        assert_eq!(hook.limit(), 20);

        hook.load_more();
        assert_eq!(hook.limit(), 30);
    }

    #[tokio::test]
    async fn refresh_keeps_the_current_limit() {
        let mut hook = hook();
        hook.load_more();
        hook.refresh();
        assert_eq!(hook.limit(), 20);
    }

    #[tokio::test]
    async fn remaining_count_tracks_the_window() {
        let mut hook = hook();
        hook.apply(hook.current_seq(), Ok(page(25, 10)));

        assert!(hook.has_more());
        assert_eq!(hook.remaining(), 15);

        hook.load_more();
        hook.apply(hook.current_seq(), Ok(page(25, 20)));
        assert_eq!(hook.remaining(), 5);

        hook.load_more();
        hook.apply(hook.current_seq(), Ok(page(25, 25)));
        assert!(!hook.has_more());
        assert_eq!(hook.remaining(), 0);
    }

    #[tokio::test]
    async fn records_never_exceed_total_in_well_formed_pages() {
        let mut hook = hook();
        hook.apply(hook.current_seq(), Ok(page(25, 10)));
        assert!(hook.records.len() <= hook.total);
    }

    #[tokio::test]
    async fn stale_window_loses_to_newer_request() {
        let mut hook = hook();
        let stale_seq = hook.current_seq();

        // A load_more raced past the mount fetch
        hook.load_more();
        hook.apply(hook.current_seq(), Ok(page(25, 20)));

        // The slower, smaller window resolves afterwards and is dropped
        hook.apply(stale_seq, Ok(page(25, 10)));
        assert_eq!(hook.records.len(), 20);
    }

    #[tokio::test]
    async fn fetch_failure_keeps_previous_window() {
        let mut hook = hook();
        hook.apply(hook.current_seq(), Ok(page(25, 10)));

        hook.refresh();
        hook.apply(hook.current_seq(), Err("Failed to load history".into()));

        assert_eq!(hook.error.as_deref(), Some("Failed to load history"));
        assert_eq!(hook.records.len(), 10);
        assert!(!hook.loading);
    }
}
