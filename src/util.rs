//! Shared utility functions

use unicode_width::UnicodeWidthChar;

/// Truncate a string to at most `max_width` display columns, appending an
/// ellipsis when anything was cut.
///
/// Measures unicode display width rather than bytes or chars so wide
/// glyphs (CJK, emoji) never overflow their terminal column budget.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }

    // A budget that cannot even hold the suffix yields a clipped suffix,
    // never more columns than asked for
    if max_width < 3 {
        return ".".repeat(max_width);
    }

    // Leave room for the "..." suffix (3 columns)
    let target = max_width - 3;
    let mut current = 0;
    let mut truncated = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > target {
            break;
        }
        current += w;
        truncated.push(c);
    }

    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
    }

    #[test]
    fn exact_width_is_untouched() {
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello...");
    }

    #[test]
    fn wide_glyphs_count_double() {
        // Each CJK glyph occupies 2 columns; 7 columns fit two plus "..."
        assert_eq!(truncate_with_ellipsis("日本語テキスト", 7), "日本...");
    }

    #[test]
    fn tiny_budget_never_exceeds_its_columns() {
        assert_eq!(truncate_with_ellipsis("hello", 2), "..");
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
        assert_eq!(truncate_with_ellipsis("hello", 3), "...");
    }

    #[test]
    fn empty_text() {
        assert_eq!(truncate_with_ellipsis("", 5), "");
    }
}
