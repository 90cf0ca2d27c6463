//! Telegram HTML helpers.

/// Escape text for Telegram's HTML parse mode.
///
/// Only `<`, `>` and `&` are significant to the Bot API parser.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '&' => result.push_str("&amp;"),
            _ => result.push(c),
        }
    }
    result
}
