use fancy_regex::Regex as FancyRegex;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static RE_BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*|__(.*?)__").unwrap());
static RE_ITALIC: LazyLock<FancyRegex> = LazyLock::new(|| {
    FancyRegex::new(r"(?<!\*)\*([^*\s].*?[^*\s])\*(?!\*)|(?<!_)_([^_\s].*?[^_\s])_(?!_)")
        .unwrap()
});
static RE_STRIKE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~(.*?)~~").unwrap());
static RE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static RE_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());
static RE_ANGLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[<>]").unwrap());
static RE_MULTI_SPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmphasisKind {
    Bold,
    Italic,
    Strike,
    Code,
}

/// One stripped emphasis span. The list is informational only; both
/// renderers consume plain text.
#[derive(Debug, Clone, PartialEq)]
pub struct Emphasis {
    pub kind: EmphasisKind,
    pub text: String,
}

pub fn clean_inline(text: &str) -> String {
    clean_inline_spans(text).0
}

pub fn clean_inline_spans(text: &str) -> (String, Vec<Emphasis>) {
    let mut spans: Vec<Emphasis> = Vec::new();

    let text = RE_BOLD.replace_all(text, |caps: &Captures| {
        let inner = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map_or("", |m| m.as_str());
        spans.push(Emphasis {
            kind: EmphasisKind::Bold,
            text: inner.to_string(),
        });
        inner.to_string()
    });

    let text = RE_ITALIC.replace_all(&text, |caps: &fancy_regex::Captures| {
        let inner = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map_or("", |m| m.as_str());
        spans.push(Emphasis {
            kind: EmphasisKind::Italic,
            text: inner.to_string(),
        });
        inner.to_string()
    });

    let text = RE_STRIKE.replace_all(&text, |caps: &Captures| {
        spans.push(Emphasis {
            kind: EmphasisKind::Strike,
            text: caps[1].to_string(),
        });
        caps[1].to_string()
    });

    let text = RE_CODE.replace_all(&text, |caps: &Captures| {
        spans.push(Emphasis {
            kind: EmphasisKind::Code,
            text: caps[1].to_string(),
        });
        caps[1].to_string()
    });

    let text = RE_LINK.replace_all(&text, "${1} (${2})");
    let text = RE_ANGLE.replace_all(&text, "");
    let text = text.replace(r"\*", "*").replace(r"\_", "_");
    let text = RE_MULTI_SPACE.replace_all(&text, " ");

    (text.trim().to_string(), spans)
}

/// Whole-paragraph `_text_` marks a framing sentence as italic. This is the
/// one inline marker honored after cleaning, and only for text the export
/// layer constructs itself.
pub fn italic_wrapped(text: &str) -> Option<&str> {
    let t = text.trim();
    if t.len() > 2 && t.starts_with('_') && t.ends_with('_') {
        Some(&t[1..t.len() - 1])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold_stripped() {
        assert_eq!(clean_inline("**bold**"), "bold");
        assert_eq!(clean_inline("__bold__"), "bold");
    }

    #[test]
    fn test_italic_stripped() {
        assert_eq!(clean_inline("*italic*"), "italic");
        assert_eq!(clean_inline("_italic_"), "italic");
    }

    #[test]
    fn test_bold_and_italic_mixed() {
        assert_eq!(clean_inline("**bold** and *italic*"), "bold and italic");
    }

    #[test]
    fn test_strike_and_code_stripped() {
        assert_eq!(clean_inline("~~gone~~ and `code`"), "gone and code");
    }

    #[test]
    fn test_link_rewritten() {
        assert_eq!(
            clean_inline("[docs](https://example.com)"),
            "docs (https://example.com)"
        );
    }

    #[test]
    fn test_angle_brackets_removed() {
        assert_eq!(clean_inline("a <b> c"), "a b c");
    }

    #[test]
    fn test_escapes_unwrapped() {
        assert_eq!(clean_inline(r"3 \* 4 \* 5"), "3 * 4 * 5");
        assert_eq!(clean_inline(r"snake\_case"), "snake_case");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(clean_inline("  a \t b\u{a0} c  "), "a b c");
    }

    #[test]
    fn test_unmatched_markers_left_alone() {
        assert_eq!(clean_inline("a * b"), "a * b");
        assert_eq!(clean_inline("**open"), "**open");
    }

    #[test]
    fn test_idempotent_on_clean_text() {
        let once = clean_inline("**bold** [x](u) *it*");
        assert_eq!(clean_inline(&once), once);
    }

    #[test]
    fn test_spans_recorded() {
        let (text, spans) = clean_inline_spans("**a** *bb* ~~c~~ `d`");
        assert_eq!(text, "a bb c d");
        let kinds: Vec<EmphasisKind> = spans.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EmphasisKind::Bold,
                EmphasisKind::Italic,
                EmphasisKind::Strike,
                EmphasisKind::Code
            ]
        );
        assert_eq!(spans[1].text, "bb");
    }

    #[test]
    fn test_italic_wrapped() {
        assert_eq!(italic_wrapped("_intro text_"), Some("intro text"));
        assert_eq!(italic_wrapped("_x_"), Some("x"));
        assert_eq!(italic_wrapped("__"), None);
        assert_eq!(italic_wrapped("plain"), None);
        assert_eq!(italic_wrapped("_unterminated"), None);
    }
}
