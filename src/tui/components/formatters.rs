// Display formatters
//
// Shared formatting for the result card, history rows, and cache panel.

use chrono::{DateTime, Utc};

/// Format a confidence score in [0, 1] as a percentage with one decimal
///
/// 0.97 -> "97.0%"
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

/// Format a processing time: milliseconds under a second, seconds above
///
/// 42 -> "42ms", 1234 -> "1.23s"
pub fn format_processing_time(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else {
        format!("{:.2}s", ms as f64 / 1000.0)
    }
}

/// Format a timestamp relative to now ("just now", "5 mins ago", ...)
pub fn format_relative_time(timestamp: DateTime<Utc>) -> String {
    let seconds = (Utc::now() - timestamp).num_seconds().max(0);

    if seconds < 60 {
        return "just now".to_string();
    }

    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{} min{} ago", minutes, if minutes > 1 { "s" } else { "" });
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{} hour{} ago", hours, if hours > 1 { "s" } else { "" });
    }

    let days = hours / 24;
    if days < 7 {
        return format!("{} day{} ago", days, if days > 1 { "s" } else { "" });
    }

    timestamp.format("%Y-%m-%d").to_string()
}

/// Format a memory size given in megabytes
///
/// Below 1 MB switches to whole kilobytes.
pub fn format_memory(mb: f64) -> String {
    if mb < 1.0 {
        format!("{:.0} KB", mb * 1024.0)
    } else {
        format!("{:.2} MB", mb)
    }
}

/// Qualitative banding for a confidence score
pub fn confidence_level(confidence: f64) -> &'static str {
    if confidence >= 0.9 {
        "High confidence"
    } else if confidence >= 0.7 {
        "Medium confidence"
    } else {
        "Low confidence"
    }
}
