use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static RE_THOUGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Thought for \d+ seconds\n").unwrap());
static RE_FIRST_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#+\s*.*$").unwrap());
static RE_ZERO_WIDTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{200b}-\x{200d}\x{feff}]").unwrap());

// The first entry is a cp1252 mis-decode of U+25A0 and contains an en dash,
// so it must be rewritten before the bare en dash rule.
const DASH_LOOKALIKES: &[(&str, &str)] = &[
    ("\u{e2}\u{2013}\u{a0}", "-"),
    ("\u{2011}", "-"),
    ("\u{2012}", "-"),
    ("\u{ad}", "-"),
    ("\u{2013}", "-"),
    ("\u{2014}", "-"),
];

pub fn sanitize(raw: &str) -> String {
    let text: String = raw.nfc().collect();
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let text = RE_THOUGHT.replace(text.trim(), "").to_string();

    // Everything before the first heading is preamble chatter
    let mut text = match RE_FIRST_HEADING.find(&text) {
        Some(m) => text[m.start()..].to_string(),
        None => text,
    };

    for (from, to) in DASH_LOOKALIKES {
        text = text.replace(from, to);
    }
    let text = RE_ZERO_WIDTH.replace_all(&text, "");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thought_line_stripped() {
        let result = sanitize("Thought for 12 seconds\n# Title\nBody");
        assert_eq!(result, "# Title\nBody");
    }

    #[test]
    fn test_preamble_before_heading_dropped() {
        let result = sanitize("Sure, here you go:\n\n# Report\nContent");
        assert_eq!(result, "# Report\nContent");
    }

    #[test]
    fn test_no_heading_leaves_text_unchanged() {
        let result = sanitize("just some text\nwith no heading");
        assert_eq!(result, "just some text\nwith no heading");
    }

    #[test]
    fn test_dash_lookalikes_replaced() {
        let result = sanitize("a\u{2013}b c\u{2014}d e\u{2011}f g\u{ad}h");
        assert_eq!(result, "a-b c-d e-f g-h");
    }

    #[test]
    fn test_misdecoded_black_square_replaced() {
        let result = sanitize("item \u{e2}\u{2013}\u{a0} detail");
        assert_eq!(result, "item - detail");
    }

    #[test]
    fn test_zero_width_characters_removed() {
        let result = sanitize("a\u{200b}b\u{200c}c\u{200d}d\u{feff}e");
        assert_eq!(result, "abcde");
    }

    #[test]
    fn test_crlf_normalized() {
        let result = sanitize("# Title\r\nline\rmore");
        assert_eq!(result, "# Title\nline\nmore");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_thought_line_is_case_sensitive() {
        let result = sanitize("thought for 5 seconds\nrest");
        assert_eq!(result, "thought for 5 seconds\nrest");
    }
}
