// Cache-stats hook - periodic polling over the metrics endpoint
//
// Fetches once on construction, then re-fetches on every tick of a
// dedicated ticker task. The ticker handle is owned by the hook and
// aborted on drop, so a hook going away can never leave a timer running.
// Manual refresh() fetches out-of-band without touching the schedule.

use crate::client::models::CacheMetrics;
use crate::client::ApiClient;
use crate::events::{ApiEvent, Outcome};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub struct CacheStatsHook {
    pub stats: Option<CacheMetrics>,
    pub loading: bool,
    pub error: Option<String>,

    /// Poll interval in milliseconds; 0 means auto-refresh is disabled
    interval_ms: u64,

    seq: u64,
    client: ApiClient,
    tx: mpsc::Sender<ApiEvent>,
    ticker: Option<JoinHandle<()>>,
}

impl CacheStatsHook {
    /// Create the hook, fetch immediately, and arm the ticker
    pub fn new(client: ApiClient, tx: mpsc::Sender<ApiEvent>, interval_ms: u64) -> Self {
        let ticker = if interval_ms > 0 {
            Some(spawn_ticker(tx.clone(), interval_ms))
        } else {
            None
        };

        let mut hook = Self {
            stats: None,
            loading: false,
            error: None,
            interval_ms,
            seq: 0,
            client,
            tx,
            ticker,
        };
        hook.refresh();
        hook
    }

    /// Fetch a fresh snapshot (used for mount, ticks, and manual refresh)
    pub fn refresh(&mut self) {
        self.seq += 1;
        let seq = self.seq;

        self.loading = true;
        self.error = None;

        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = client.fetch_cache_stats().await.map_err(|e| e.to_string());
            let _ = tx.send(ApiEvent::CacheStatsLoaded { seq, outcome }).await;
        });
    }

    /// Apply a completion event; the snapshot is replaced wholesale
    pub fn apply(&mut self, seq: u64, outcome: Outcome<CacheMetrics>) {
        if seq != self.seq {
            tracing::debug!("Dropping stale cache-stats response (seq {} < {})", seq, self.seq);
            return;
        }

        self.loading = false;
        match outcome {
            Ok(metrics) => {
                self.stats = Some(metrics);
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
    }

    pub fn auto_refresh_enabled(&self) -> bool {
        self.ticker.is_some()
    }

    /// Poll interval for display purposes
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}

impl Drop for CacheStatsHook {
    fn drop(&mut self) {
        // Release the ticker on every exit path; a dropped hook must never
        // keep polling
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }
}

/// Spawn the repeating poll timer
///
/// Sends a `StatsTick` per elapsed interval; the mount fetch covers t=0, so
/// the interval's immediate first tick is swallowed. Exits when the TUI side
/// of the channel is gone.
fn spawn_ticker(tx: mpsc::Sender<ApiEvent>, interval_ms: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        interval.tick().await;

        loop {
            interval.tick().await;
            if tx.send(ApiEvent::StatsTick).await.is_err() {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::CacheStatus;

    fn client() -> ApiClient {
        ApiClient::new("http://localhost:8000", Duration::from_secs(10)).unwrap()
    }

    fn metrics(hits: u64) -> CacheMetrics {
        serde_json::from_str(&format!(
            r#"{{"status":"connected","total_keys":10,"sentiment_keys":9,
                "memory_used_mb":0.5,"hits":{hits},"misses":2,"hit_rate":83.3}}"#
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn mount_fetches_immediately() {
        let (tx, _rx) = mpsc::channel(16);
        let hook = CacheStatsHook::new(client(), tx, 30_000);
        assert!(hook.loading);
        assert!(hook.auto_refresh_enabled());
    }

    #[tokio::test]
    async fn zero_interval_disables_auto_refresh() {
        let (tx, _rx) = mpsc::channel(16);
        let mut hook = CacheStatsHook::new(client(), tx, 0);
        assert!(!hook.auto_refresh_enabled());

        // Manual refresh still works
        let before = hook.seq;
        hook.refresh();
        assert_eq!(hook.seq, before + 1);
    }

    #[tokio::test]
    async fn snapshot_is_replaced_wholesale() {
        let (tx, _rx) = mpsc::channel(16);
        let mut hook = CacheStatsHook::new(client(), tx, 0);

        hook.apply(hook.seq, Ok(metrics(80)));
        assert_eq!(hook.stats.as_ref().unwrap().hits, 80);
        assert_eq!(hook.stats.as_ref().unwrap().status, CacheStatus::Connected);

        hook.refresh();
        hook.apply(hook.seq, Ok(metrics(81)));
        assert_eq!(hook.stats.as_ref().unwrap().hits, 81);
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_fires_exactly_once_per_elapsed_interval() {
        let (tx, mut rx) = mpsc::channel(16);
        let handle = spawn_ticker(tx, 5_000);

        // Let the ticker register its timer before advancing the clock
        tokio::task::yield_now().await;

        for _ in 0..3 {
            tokio::time::advance(Duration::from_millis(5_000)).await;
            tokio::task::yield_now().await;
        }

        let mut ticks = 0;
        while let Ok(event) = rx.try_recv() {
            assert!(matches!(event, ApiEvent::StatsTick));
            ticks += 1;
        }
        assert_eq!(ticks, 3);

        // Cancelling stops further ticks
        handle.abort();
        tokio::time::advance(Duration::from_millis(20_000)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_hook_releases_the_ticker() {
        let (tx, mut rx) = mpsc::channel(16);
        let hook = CacheStatsHook::new(client(), tx, 5_000);
        tokio::task::yield_now().await;

        drop(hook);
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(20_000)).await;
        tokio::task::yield_now().await;

        // Only completions from the mount fetch may be pending, never ticks
        while let Ok(event) = rx.try_recv() {
            assert!(!matches!(event, ApiEvent::StatsTick));
        }
    }
}
