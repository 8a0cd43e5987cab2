// Pre-flight text validation
//
// Mirrors the server's constraints client-side so invalid input never
// produces a network call: text must be non-empty after trimming and at
// most MAX_TEXT_LENGTH characters.

/// Longest text the service accepts
pub const MAX_TEXT_LENGTH: usize = 512;

/// Validate input text before submitting it for analysis
///
/// Returns the trimmed text on success, or a user-facing message that the
/// view displays in place of issuing a request.
pub fn validate_text(text: &str) -> Result<&str, String> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err("Please enter some text to analyze".to_string());
    }

    if trimmed.chars().count() > MAX_TEXT_LENGTH {
        return Err(format!("Text must be {} characters or less", MAX_TEXT_LENGTH));
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_text() {
        assert_eq!(validate_text("I love this!"), Ok("I love this!"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(validate_text("  hello  "), Ok("hello"));
    }

    #[test]
    fn rejects_empty_and_whitespace_only() {
        assert!(validate_text("").is_err());
        assert!(validate_text("   \t\n").is_err());
        assert_eq!(
            validate_text("  ").unwrap_err(),
            "Please enter some text to analyze"
        );
    }

    #[test]
    fn accepts_exactly_max_length() {
        let text = "a".repeat(MAX_TEXT_LENGTH);
        assert!(validate_text(&text).is_ok());
    }

    #[test]
    fn rejects_over_max_length() {
        let text = "a".repeat(MAX_TEXT_LENGTH + 1);
        assert_eq!(
            validate_text(&text).unwrap_err(),
            "Text must be 512 characters or less"
        );
    }

    #[test]
    fn length_is_counted_in_characters_not_bytes() {
        // 512 three-byte characters: over in bytes, fine in chars
        let text = "日".repeat(MAX_TEXT_LENGTH);
        assert!(validate_text(&text).is_ok());
    }
}
