// Wire types for the sentiment API
//
// These structs mirror the JSON bodies the service returns. They are
// transient view models: replaced wholesale on the next successful fetch,
// never persisted or mutated locally.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Binary classification label produced by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    pub fn is_positive(&self) -> bool {
        matches!(self, Sentiment::Positive)
    }

    /// Wire-format label, also used for display
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Negative => "NEGATIVE",
        }
    }
}

/// Result of a single analyze call
///
/// Owned exclusively by the analysis hook; the view only reads it.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisResult {
    pub text: String,
    pub sentiment: Sentiment,
    /// Confidence score in [0, 1]
    pub confidence: f64,
    pub processing_time_ms: u64,
    /// True when the result was served from the cache layer
    pub cached: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A server-persisted analysis record
///
/// Read-only projection: the client never mutates or deletes individual
/// records, only re-fetches the whole visible window.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryRecord {
    pub id: i64,
    pub text: String,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub processing_time_ms: u64,
    pub created_at: DateTime<Utc>,
}

/// One window of history, server-ordered most-recent-first
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryPage {
    pub total: usize,
    pub analyses: Vec<HistoryRecord>,
}

/// Cache backend connectivity as reported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheStatus {
    Connected,
    Disconnected,
}

/// Snapshot of cache performance metrics, replaced on every poll
#[derive(Debug, Clone, Deserialize)]
pub struct CacheMetrics {
    pub status: CacheStatus,
    pub total_keys: u64,
    pub sentiment_keys: u64,
    pub memory_used_mb: f64,
    pub hits: u64,
    pub misses: u64,
    /// Hit rate as a percentage (0-100)
    pub hit_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_result_deserializes() {
        let json = r#"{
            "text": "I love this!",
            "sentiment": "POSITIVE",
            "confidence": 0.97,
            "processing_time_ms": 42,
            "cached": false,
            "created_at": "2026-01-15T10:30:00Z"
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert!((result.confidence - 0.97).abs() < f64::EPSILON);
        assert_eq!(result.processing_time_ms, 42);
        assert!(!result.cached);
        assert!(result.created_at.is_some());
    }

    #[test]
    fn analysis_result_without_created_at() {
        let json = r#"{
            "text": "terrible",
            "sentiment": "NEGATIVE",
            "confidence": 0.88,
            "processing_time_ms": 3,
            "cached": true
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert!(result.cached);
        assert!(result.created_at.is_none());
    }

    #[test]
    fn history_page_deserializes() {
        let json = r#"{
            "total": 25,
            "analyses": [
                {
                    "id": 7,
                    "text": "great product",
                    "sentiment": "POSITIVE",
                    "confidence": 0.95,
                    "processing_time_ms": 12,
                    "created_at": "2026-01-15T10:30:00Z"
                }
            ]
        }"#;

        let page: HistoryPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.total, 25);
        assert_eq!(page.analyses.len(), 1);
        assert_eq!(page.analyses[0].id, 7);
    }

    #[test]
    fn cache_metrics_deserializes() {
        let json = r#"{
            "status": "connected",
            "total_keys": 120,
            "sentiment_keys": 118,
            "memory_used_mb": 1.75,
            "hits": 80,
            "misses": 20,
            "hit_rate": 80.0
        }"#;

        let metrics: CacheMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.status, CacheStatus::Connected);
        assert_eq!(metrics.hits, 80);
        assert!((metrics.hit_rate - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_sentiment_is_rejected() {
        let json = r#""NEUTRAL""#;
        assert!(serde_json::from_str::<Sentiment>(json).is_err());
    }
}
