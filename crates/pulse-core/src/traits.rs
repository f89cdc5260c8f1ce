use async_trait::async_trait;

use crate::{Classification, PulseError};

/// Character budget handed to classifiers; longer input is truncated, never
/// rejected.
pub const MAX_CLASSIFY_CHARS: usize = 512;

/// Trait for three-class sentiment classifiers.
///
/// Implementations must truncate input to their budget rather than fail on
/// long text. Whether a transient backend failure degrades to a neutral
/// result or propagates is an implementation policy, not part of the
/// contract.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Classification, PulseError>;

    fn name(&self) -> &'static str;
}

/// Truncate to at most `max_chars` characters, respecting char boundaries.
pub fn truncate_input(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_input_untouched() {
        assert_eq!(truncate_input("abc", 512), "abc");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let text = "ééééé";
        assert_eq!(truncate_input(text, 3), "ééé");
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate_input("abcd", 4), "abcd");
        assert_eq!(truncate_input("abcd", 3), "abc");
    }
}
