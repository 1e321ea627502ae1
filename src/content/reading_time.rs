//! Reading time estimation

use serde::Serialize;

/// Average adult reading speed
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Estimated time to read a piece of text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadingTime {
    /// Display string, e.g. "2 min read"
    pub text: String,
    /// Fractional minutes
    pub minutes: f64,
    /// Estimate in milliseconds
    pub time: u64,
    /// Counted words
    pub words: usize,
}

impl ReadingTime {
    /// Estimate reading time at the default speed
    pub fn of(text: &str) -> Self {
        Self::with_speed(text, DEFAULT_WORDS_PER_MINUTE)
    }

    /// Estimate reading time at `words_per_minute`
    pub fn with_speed(text: &str, words_per_minute: u32) -> Self {
        let wpm = if words_per_minute == 0 {
            DEFAULT_WORDS_PER_MINUTE
        } else {
            words_per_minute
        };

        let words = count_words(text);
        let minutes = words as f64 / f64::from(wpm);
        let time = (minutes * 60_000.0).round() as u64;
        // Round to two decimals first so 2.0000001 still reads as 2
        let displayed = ((minutes * 100.0).round() / 100.0).ceil() as u64;

        Self {
            text: format!("{} min read", displayed),
            minutes,
            time,
            words,
        }
    }
}

/// Count words: runs of letters or digits, plus one per CJK character
pub fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if is_cjk(c) {
            count += 1;
            in_word = false;
        } else if c.is_alphanumeric() {
            if !in_word {
                in_word = true;
                count += 1;
            }
        } else if in_word && (c == '\'' || c == '’' || c == '-') {
            // Joiners only continue a word when a letter follows: don't, well-known
            in_word = chars
                .peek()
                .is_some_and(|next| next.is_alphanumeric() && !is_cjk(*next));
        } else {
            in_word = false;
        }
    }

    count
}

fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{30FF}'   // Hiragana, Katakana
        | '\u{3400}'..='\u{4DBF}' // CJK Extension A
        | '\u{4E00}'..='\u{9FFF}' // CJK Unified Ideographs
        | '\u{F900}'..='\u{FAFF}' // CJK Compatibility Ideographs
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_ascii_words() {
        assert_eq!(count_words("Hello, world! This is Rust."), 5);
        assert_eq!(count_words("  spaced\n\tout  "), 2);
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn test_joiners_inside_words() {
        assert_eq!(count_words("don't stop well-known"), 3);
        assert_eq!(count_words("end - of - line"), 3);
        assert_eq!(count_words("2024-01-01"), 1);
    }

    #[test]
    fn test_count_cjk_characters() {
        assert_eq!(count_words("你好世界"), 4);
        assert_eq!(count_words("Rust 很好"), 3);
    }

    #[test]
    fn test_count_accented_words() {
        assert_eq!(count_words("café naïve"), 2);
    }

    #[test]
    fn test_four_hundred_words_is_two_minutes() {
        let text = "word ".repeat(400);
        let rt = ReadingTime::of(&text);
        assert_eq!(rt.words, 400);
        assert_eq!(rt.text, "2 min read");
        assert_eq!(rt.time, 120_000);
    }

    #[test]
    fn test_partial_minute_rounds_up() {
        let rt = ReadingTime::of(&"word ".repeat(250));
        assert_eq!(rt.text, "2 min read");
        let rt = ReadingTime::of("one two three");
        assert_eq!(rt.text, "1 min read");
    }

    #[test]
    fn test_empty_text_is_non_empty_string() {
        let rt = ReadingTime::of("");
        assert_eq!(rt.words, 0);
        assert_eq!(rt.text, "0 min read");
    }

    #[test]
    fn test_custom_speed() {
        let rt = ReadingTime::with_speed(&"word ".repeat(300), 100);
        assert_eq!(rt.text, "3 min read");
        // Zero speed falls back to the default
        let rt = ReadingTime::with_speed(&"word ".repeat(400), 0);
        assert_eq!(rt.text, "2 min read");
    }

    #[test]
    fn test_deterministic() {
        let text = "Some text that is read twice.";
        assert_eq!(ReadingTime::of(text), ReadingTime::of(text));
    }
}
