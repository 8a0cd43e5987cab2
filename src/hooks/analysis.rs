// Analysis hook - drives a single analyze-request lifecycle
//
// State machine: idle -> loading -> {success, failure}, back to idle on
// reset or on the next analyze() call. On completion exactly one of
// result/error is populated, never both.

use crate::client::ApiClient;
use crate::events::{ApiEvent, Outcome};
use crate::client::models::AnalysisResult;
use tokio::sync::mpsc;

pub struct AnalysisHook {
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
    pub loading: bool,

    /// Sequence of the most recently issued request; completions carrying
    /// an older value are silently dropped
    seq: u64,

    client: ApiClient,
    tx: mpsc::Sender<ApiEvent>,
}

impl AnalysisHook {
    pub fn new(client: ApiClient, tx: mpsc::Sender<ApiEvent>) -> Self {
        Self {
            result: None,
            error: None,
            loading: false,
            seq: 0,
            client,
            tx,
        }
    }

    /// Issue an analyze request
    ///
    /// No input validation happens here; the caller is expected to have
    /// validated the text already. Discards the prior result/error and
    /// re-enters loading immediately.
    pub fn analyze(&mut self, text: String) {
        self.seq += 1;
        let seq = self.seq;

        self.loading = true;
        self.error = None;
        self.result = None;

        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = client.analyze(&text).await.map_err(|e| e.to_string());
            let _ = tx.send(ApiEvent::AnalysisCompleted { seq, outcome }).await;
        });
    }

    /// Return to a state indistinguishable from initial construction
    ///
    /// Does not cancel an in-flight request; bumping the sequence detaches
    /// its eventual completion from state instead.
    pub fn reset(&mut self) {
        self.seq += 1;
        self.result = None;
        self.error = None;
        self.loading = false;
    }

    /// Apply a completion event
    pub fn apply(&mut self, seq: u64, outcome: Outcome<AnalysisResult>) {
        if seq != self.seq {
            tracing::debug!("Dropping stale analysis response (seq {} < {})", seq, self.seq);
            return;
        }

        self.loading = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
                self.result = None;
            }
        }
    }

    /// Sequence of the latest issued request (completions must echo it back)
    pub fn current_seq(&self) -> u64 {
        self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::Sentiment;
    use std::time::Duration;

    fn hook() -> AnalysisHook {
        let client = ApiClient::new("http://localhost:8000", Duration::from_secs(10)).unwrap();
        let (tx, _rx) = mpsc::channel(16);
        AnalysisHook::new(client, tx)
    }

    fn sample_result() -> AnalysisResult {
        serde_json::from_str(
            r#"{"text":"I love this!","sentiment":"POSITIVE","confidence":0.97,
                "processing_time_ms":42,"cached":false}"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn analyze_enters_loading_and_clears_prior_state() {
        let mut hook = hook();
        hook.error = Some("old error".into());
        hook.result = Some(sample_result());

        hook.analyze("new text".into());

        assert!(hook.loading);
        assert!(hook.error.is_none());
        assert!(hook.result.is_none());
        assert_eq!(hook.current_seq(), 1);
    }

    #[tokio::test]
    async fn success_sets_result_only() {
        let mut hook = hook();
        hook.analyze("I love this!".into());

        hook.apply(hook.current_seq(), Ok(sample_result()));

        assert!(!hook.loading);
        assert!(hook.error.is_none());
        let result = hook.result.as_ref().unwrap();
        assert_eq!(result.sentiment, Sentiment::Positive);
    }

    #[tokio::test]
    async fn failure_sets_error_only_and_discards_prior_result() {
        let mut hook = hook();
        hook.analyze("first".into());
        hook.apply(hook.current_seq(), Ok(sample_result()));

        hook.analyze("second".into());
        hook.apply(hook.current_seq(), Err("Analysis failed".into()));

        assert!(!hook.loading);
        assert!(hook.result.is_none());
        assert_eq!(hook.error.as_deref(), Some("Analysis failed"));
    }

    #[tokio::test]
    async fn stale_completion_is_dropped() {
        let mut hook = hook();
        hook.analyze("first".into());
        let stale_seq = hook.current_seq();

        hook.analyze("second".into());
        hook.apply(stale_seq, Ok(sample_result()));

        // Still waiting on the second request
        assert!(hook.loading);
        assert!(hook.result.is_none());
    }

    #[tokio::test]
    async fn reset_returns_to_initial_state_and_detaches_in_flight() {
        let mut hook = hook();
        hook.analyze("text".into());
        let in_flight = hook.current_seq();

        hook.reset();
        assert!(hook.result.is_none());
        assert!(hook.error.is_none());
        assert!(!hook.loading);

        // The late response lands nowhere
        hook.apply(in_flight, Ok(sample_result()));
        assert!(hook.result.is_none());
        assert!(!hook.loading);
    }
}
