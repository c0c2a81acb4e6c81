//! Question/answer extraction from accordion markup.
//!
//! Two passes, the second only when the first finds nothing:
//!
//! 1. **Structured**: top-level `core/details` blocks. The question is the
//!    `<summary>` text (or the block's `summary` attribute), the answer is
//!    the text of the nested blocks.
//! 2. **Markup**: `<details><summary>Q</summary>A</details>` sequences in the
//!    rendered body HTML.
//!
//! A pair is kept only when both question and answer have text.

use super::SchemaObject;
use crate::{content::Block, utils::html::strip_tags};
use regex::Regex;
use std::sync::LazyLock;

/// Text of the first `<summary>` element.
static RE_SUMMARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?si)<summary[^>]*>(.*?)</summary>").unwrap());

/// Everything between `</summary>` and `</details>`.
static RE_AFTER_SUMMARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?si)</summary>(.*?)</details>").unwrap());

/// A whole `<details>` element with its summary.
static RE_DETAILS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?si)<details[^>]*>\s*<summary[^>]*>(.*?)</summary>(.*?)</details>").unwrap()
});

/// One extracted question with its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    fn new(question: String, answer: String) -> Option<Self> {
        (!question.is_empty() && !answer.is_empty()).then_some(Self { question, answer })
    }

    /// `Question` object with a nested `Answer`.
    pub fn to_schema(&self) -> SchemaObject {
        let answer = SchemaObject::typed("Answer").with("text", self.answer.as_str());
        SchemaObject::typed("Question")
            .with("name", self.question.as_str())
            .with("acceptedAnswer", answer)
    }
}

fn capture_text(re: &Regex, html: &str) -> Option<String> {
    re.captures(html).map(|caps| strip_tags(&caps[1]))
}

fn summary_text(block: &Block) -> String {
    capture_text(&RE_SUMMARY, &block.inner_html)
        .or_else(|| block.attr_str("summary").map(|s| s.trim().to_owned()))
        .unwrap_or_default()
}

fn answer_text(block: &Block) -> String {
    let parts: Vec<String> = block
        .inner_blocks
        .iter()
        .map(|child| strip_tags(&child.render()))
        .filter(|text| !text.is_empty())
        .collect();

    if !parts.is_empty() {
        return parts.join(" ");
    }
    capture_text(&RE_AFTER_SUMMARY, &block.inner_html).unwrap_or_default()
}

/// Questions from top-level accordion blocks, in document order.
pub fn extract_from_blocks(blocks: &[Block]) -> Vec<FaqEntry> {
    blocks
        .iter()
        .filter(|block| block.is_details())
        .filter_map(|block| FaqEntry::new(summary_text(block), answer_text(block)))
        .collect()
}

/// Questions from `<details>` elements in rendered HTML.
pub fn extract_from_html(html: &str) -> Vec<FaqEntry> {
    RE_DETAILS
        .captures_iter(html)
        .filter_map(|caps| FaqEntry::new(strip_tags(&caps[1]), strip_tags(&caps[2])))
        .collect()
}

/// Run the structured pass, falling back to the markup pass when it finds
/// no questions.
pub fn extract_faq(blocks: &[Block], body_html: &str) -> Vec<FaqEntry> {
    let entries = extract_from_blocks(blocks);
    if entries.is_empty() {
        extract_from_html(body_html)
    } else {
        entries
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::DETAILS_BLOCK;
    use serde_json::json;

    fn details(summary_html: &str, answer: &str) -> Block {
        Block::new(
            DETAILS_BLOCK,
            format!("<details class=\"wp-block-details\"><summary>{summary_html}</summary></details>"),
        )
        .with_children(vec![Block::new("core/paragraph", format!("<p>{answer}</p>"))])
    }

    #[test]
    fn test_blocks_in_order_skipping_empty_summary() {
        let blocks = vec![
            details("What is it?", "A widget."),
            Block::new("core/paragraph", "<p>Intro</p>"),
            details("", "Orphan answer."),
            details("How much?", "<strong>Five</strong> pounds."),
        ];
        let entries = extract_from_blocks(&blocks);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].question, "What is it?");
        assert_eq!(entries[0].answer, "A widget.");
        assert_eq!(entries[1].question, "How much?");
        assert_eq!(entries[1].answer, "Five pounds.");
    }

    #[test]
    fn test_summary_attribute_fallback() {
        let block = Block::new(DETAILS_BLOCK, "<details></details>")
            .with_attr("summary", "  From attrs  ")
            .with_children(vec![Block::new("core/paragraph", "<p>Yes.</p>")]);
        let entries = extract_from_blocks(&[block]);
        assert_eq!(entries[0].question, "From attrs");
    }

    #[test]
    fn test_answer_parts_joined() {
        let block = Block::new(DETAILS_BLOCK, "<details><summary>Q</summary></details>").with_children(vec![
            Block::new("core/paragraph", "<p>One.</p>"),
            Block::new("core/paragraph", "<p>  </p>"),
            Block::new("core/list", "<ul></ul>")
                .with_children(vec![Block::new("core/list-item", "<li>Two.</li>")]),
        ]);
        let entries = extract_from_blocks(&[block]);
        assert_eq!(entries[0].answer, "One. Two.");
    }

    #[test]
    fn test_answer_from_inner_html_without_children() {
        let block = Block::new(
            DETAILS_BLOCK,
            "<details><summary>Q</summary><p>Inline answer</p></details>",
        );
        let entries = extract_from_blocks(&[block]);
        assert_eq!(entries[0].answer, "Inline answer");
    }

    #[test]
    fn test_nested_details_ignored() {
        let group = Block::new("core/group", "").with_children(vec![details("Hidden?", "Yes.")]);
        assert!(extract_from_blocks(&[group]).is_empty());
    }

    #[test]
    fn test_html_pass() {
        let html = r#"
            <DETAILS open><summary class="q">First?</summary><p>Answer one.</p></DETAILS>
            <p>Between</p>
            <details>
              <summary>Second?</summary>
              <div>Answer
              two.</div>
            </details>
            <details><summary>No answer</summary></details>
        "#;
        let entries = extract_from_html(html);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].question, "First?");
        assert_eq!(entries[1].answer, "Answer\n              two.");
    }

    #[test]
    fn test_fallback_only_when_blocks_yield_nothing() {
        let html = "<details><summary>From HTML</summary>Body</details>";

        let entries = extract_faq(&[], html);
        assert_eq!(entries[0].question, "From HTML");

        let blocks = vec![details("From blocks", "Body")];
        let entries = extract_faq(&blocks, html);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].question, "From blocks");
    }

    #[test]
    fn test_question_schema() {
        let entry = FaqEntry::new("Q?".into(), "A.".into()).unwrap();
        assert_eq!(
            entry.to_schema().into_value(),
            json!({
                "@type": "Question",
                "name": "Q?",
                "acceptedAnswer": {"@type": "Answer", "text": "A."}
            })
        );
    }
}
