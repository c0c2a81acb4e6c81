//! Plain-text helpers for HTML fragments.
//!
//! Content bodies arrive as rendered HTML. Schema fields want plain text, so
//! these helpers flatten markup and shorten text without splitting a
//! multi-byte character.

use regex::Regex;
use std::sync::LazyLock;

/// `<script>` and `<style>` elements, including their content.
static RE_SCRIPT_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script[^>]*?>.*?</script>|<style[^>]*?>.*?</style>").unwrap()
});

/// Any remaining tag, comment or doctype.
static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

/// Strip all markup from an HTML fragment and trim the result.
///
/// Script and style elements are removed together with their content,
/// every other tag is removed and its text kept. Entities are left as-is.
pub fn strip_tags(html: &str) -> String {
    let without_code = RE_SCRIPT_STYLE.replace_all(html, "");
    RE_TAG.replace_all(&without_code, "").trim().to_owned()
}

/// Cap `text` at `limit` characters.
///
/// Text longer than `limit` is cut to `limit - marker.len()` characters and
/// `marker` is appended, so the result is never longer than `limit`.
pub fn truncate_chars(text: &str, limit: usize, marker: &str) -> String {
    if text.chars().count() <= limit {
        return text.to_owned();
    }
    let keep = limit.saturating_sub(marker.chars().count());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(marker);
    out
}

/// Keep the first `count` whitespace-separated words of `text`.
///
/// Appends `…` when words were dropped. Runs of whitespace collapse to a
/// single space.
pub fn trim_words(text: &str, count: usize) -> String {
    let mut words = text.split_whitespace();
    let kept: Vec<&str> = words.by_ref().take(count).collect();
    let mut out = kept.join(" ");
    if words.next().is_some() {
        out.push('…');
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags_plain() {
        assert_eq!(strip_tags("hello"), "hello");
        assert_eq!(strip_tags("  padded  "), "padded");
    }

    #[test]
    fn test_strip_tags_nested() {
        assert_eq!(
            strip_tags("<p>Hello <strong>world</strong></p>"),
            "Hello world"
        );
    }

    #[test]
    fn test_strip_tags_removes_script_and_style_content() {
        let html = "<p>Keep</p><script type=\"x\">alert(1)</script><STYLE>p{}</STYLE> me";
        assert_eq!(strip_tags(html), "Keep me");
    }

    #[test]
    fn test_strip_tags_multiline_tag() {
        assert_eq!(strip_tags("<a\n href=\"/\">link</a>"), "link");
    }

    #[test]
    fn test_strip_tags_comment() {
        assert_eq!(strip_tags("<!-- wp:paragraph -->text<!-- /wp:paragraph -->"), "text");
    }

    #[test]
    fn test_truncate_chars_short() {
        assert_eq!(truncate_chars("short", 160, "..."), "short");
    }

    #[test]
    fn test_truncate_chars_long() {
        let text = "a".repeat(200);
        let out = truncate_chars(&text, 160, "...");
        assert_eq!(out.chars().count(), 160);
        assert!(out.ends_with("..."));
        assert_eq!(&out[..157], "a".repeat(157));
    }

    #[test]
    fn test_truncate_chars_unicode() {
        let text = "é".repeat(161);
        let out = truncate_chars(&text, 160, "...");
        assert_eq!(out.chars().count(), 160);
        assert!(out.starts_with("éé"));
    }

    #[test]
    fn test_trim_words() {
        assert_eq!(trim_words("one two three", 5), "one two three");
        assert_eq!(trim_words("one  two\nthree four", 2), "one two…");
        assert_eq!(trim_words("", 3), "");
    }
}
