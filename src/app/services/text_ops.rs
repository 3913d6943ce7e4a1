/// Length of `text` in UTF-16 code units
///
/// This is what the journal's character counter shows and what the
/// sentiment threshold is measured against.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// True once `text` is strictly longer than `threshold`
pub fn exceeds_threshold(text: &str, threshold: usize) -> bool {
    utf16_len(text) > threshold
}

/// True if `text` has nothing but whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Shorten text for a one-line preview
///
/// Collapses all whitespace runs to single spaces. If the result is longer
/// than `max_chars` characters it is cut at the last word boundary that
/// fits and "..." is appended.
pub fn preview(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }

    let cut = collapsed
        .char_indices()
        .nth(max_chars)
        .map(|(i, _)| i)
        .unwrap_or(collapsed.len());
    let head = &collapsed[..cut];
    let head = match head.rfind(' ') {
        Some(space) if space > 0 => &head[..space],
        _ => head,
    };
    format!("{}...", head.trim_end_matches(|c: char| matches!(c, ',' | '.' | ';' | ':')))
}

/// Count whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// True if `word` occurs in `text` without being part of a longer word.
///
/// An edge of `word` that is a letter, digit or underscore must not touch
/// another such character in `text`. Works on any script, not only ASCII.
pub fn contains_word(text: &str, word: &str) -> bool {
    let (Some(first), Some(last)) = (word.chars().next(), word.chars().next_back()) else {
        return false;
    };
    let mut from = 0;
    while let Some(offset) = text[from..].find(word) {
        let start = from + offset;
        let end = start + word.len();
        let open = !is_word_char(first)
            || !text[..start].chars().next_back().is_some_and(is_word_char);
        let close = !is_word_char(last) || !text[end..].chars().next().is_some_and(is_word_char);
        if open && close {
            return true;
        }
        // Step one character so overlapping occurrences are tried too
        from = start + first.len_utf8();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf16_len_ascii() {
        assert_eq!(utf16_len(""), 0);
        assert_eq!(utf16_len("hello"), 5);
    }

    #[test]
    fn test_utf16_len_non_ascii() {
        // BMP characters are one unit, astral characters are two
        assert_eq!(utf16_len("世界"), 2);
        assert_eq!(utf16_len("🎉"), 2);
        assert_eq!(utf16_len("é"), 1);
    }

    #[test]
    fn test_exceeds_threshold_is_strict() {
        let twenty = "a".repeat(20);
        let twenty_one = "a".repeat(21);
        assert!(!exceeds_threshold(&twenty, 20));
        assert!(exceeds_threshold(&twenty_one, 20));
        assert!(!exceeds_threshold("", 0));
        assert!(exceeds_threshold("a", 0));
    }

    #[test]
    fn test_exceeds_threshold_counts_utf16() {
        // Ten emoji are 20 UTF-16 units
        let emoji = "🙂".repeat(10);
        assert!(!exceeds_threshold(&emoji, 20));
        assert!(exceeds_threshold(&format!("{}!", emoji), 20));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   \n\t "));
        assert!(!is_blank("  x "));
    }

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("Had a great day", 40), "Had a great day");
    }

    #[test]
    fn test_preview_collapses_whitespace() {
        assert_eq!(preview("  line one\n\nline   two ", 40), "line one line two");
    }

    #[test]
    fn test_preview_cuts_at_word_boundary() {
        let text = "Had a great study session today. Feeling productive and motivated";
        assert_eq!(preview(text, 30), "Had a great study session...");
    }

    #[test]
    fn test_preview_single_long_word() {
        assert_eq!(preview("abcdefghij", 4), "abcd...");
    }

    #[test]
    fn test_preview_unicode() {
        assert_eq!(preview("日本語 テキスト です", 6), "日本語...");
    }

    #[test]
    fn test_contains_word_whole_words_only() {
        assert!(contains_word("sad, but fine", "sad"));
        assert!(contains_word("so sad", "sad"));
        assert!(!contains_word("sadly", "sad"));
        assert!(!contains_word("badminton", "bad"));
        assert!(!contains_word("snake_sad", "sad"));
        assert!(!contains_word("", "sad"));
        assert!(!contains_word("sad", ""));
    }

    #[test]
    fn test_contains_word_non_ascii() {
        assert!(contains_word("a café today", "café"));
        assert!(!contains_word("two cafés", "café"));
        assert!(contains_word("ich bin müde.", "müde"));
        assert!(!contains_word("übermüde", "müde"));
        assert!(!contains_word("müdeé", "müde"));
    }

    #[test]
    fn test_contains_word_tries_later_occurrences() {
        assert!(contains_word("sadly sad", "sad"));
        // Overlapping candidate: the first "aa" is glued to a letter, the second is not
        assert!(!contains_word("aaa", "aa"));
        assert!(contains_word("baa aa", "aa"));
    }

    #[test]
    fn test_contains_word_punctuation_edges() {
        assert!(contains_word("feeling :) today", ":)"));
        assert!(contains_word("ok:)", ":)"));
        assert!(contains_word("a feel-good day", "feel-good"));
        assert!(!contains_word("a feel-goodish day", "feel-good"));
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("What made me smile this week?"), 6);
    }
}
