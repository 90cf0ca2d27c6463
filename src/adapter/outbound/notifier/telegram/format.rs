//! Message helpers for Telegram delivery.

/// Longest text the Bot API accepts in one message.
pub const MAX_MESSAGE_CHARS: usize = 4096;

/// Truncate a string with ellipsis (Unicode-safe). The result, ellipsis
/// included, is at most `max_chars` characters.
pub fn truncate(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count > max_chars {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// Mask a bot token for display, keeping a short prefix and suffix.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() >= 15 {
        let head: String = chars[..10].iter().collect();
        let tail: String = chars[chars.len() - 5..].iter().collect();
        format!("{head}...{tail}")
    } else {
        let head: String = chars.iter().take(10).collect();
        format!("{head}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("ab", 2), "ab");
    }

    #[test]
    fn test_truncate_fits_message_limit() {
        let long = "x".repeat(MAX_MESSAGE_CHARS + 100);
        assert_eq!(truncate(&long, MAX_MESSAGE_CHARS).chars().count(), MAX_MESSAGE_CHARS);
    }

    #[test]
    fn test_truncate_unicode() {
        assert_eq!(truncate("환율정보조회", 5), "환율...");
        assert_eq!(truncate("🇺🇸🇪🇺", 10), "🇺🇸🇪🇺");
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(
            mask_token("123456789:ABCDEFGHIJKLMNOP"),
            "123456789:...LMNOP"
        );
        assert_eq!(mask_token("short"), "short...");
    }
}
