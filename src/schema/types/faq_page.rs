use crate::schema::{BuildContext, SchemaBuilder, SchemaObject, faq::extract_faq, finish};
use serde_json::Value;

/// `FAQPage` listing the accordion questions found in an item.
pub struct FaqPageBuilder;

impl SchemaBuilder for FaqPageBuilder {
    fn schema_type(&self) -> &'static str {
        "FAQPage"
    }

    fn build(&self, ctx: &BuildContext) -> SchemaObject {
        let Some(item) = ctx.item else {
            return SchemaObject::new();
        };

        let questions: Vec<Value> = extract_faq(&item.blocks, &item.body)
            .iter()
            .map(|entry| entry.to_schema().into_value())
            .collect();

        let mut data = SchemaObject::new();
        data.set_str("name", &item.title).set_str("url", &item.url);
        if !questions.is_empty() {
            data.set("mainEntity", questions);
        }
        finish(self.schema_type(), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::SiteConfig,
        content::{Block, ContentItem, DETAILS_BLOCK},
    };

    #[test]
    fn test_faq_page_from_blocks() {
        let settings = SiteConfig::default();
        let item = ContentItem {
            title: "Help".into(),
            url: "https://acme.test/help/".into(),
            blocks: vec![
                Block::new(DETAILS_BLOCK, "<details><summary>Why?</summary></details>")
                    .with_children(vec![Block::new("core/paragraph", "<p>Because.</p>")]),
            ],
            ..Default::default()
        };
        let value = FaqPageBuilder
            .build(&BuildContext::new(&settings).with_item(Some(&item)))
            .into_value();

        assert_eq!(value["@type"], "FAQPage");
        assert_eq!(value["mainEntity"][0]["name"], "Why?");
        assert_eq!(value["mainEntity"][0]["acceptedAnswer"]["text"], "Because.");
    }

    #[test]
    fn test_faq_page_without_questions() {
        let settings = SiteConfig::default();
        let item = ContentItem {
            title: "Help".into(),
            body: "<p>No accordions here.</p>".into(),
            ..Default::default()
        };
        let obj = FaqPageBuilder.build(&BuildContext::new(&settings).with_item(Some(&item)));
        assert_eq!(obj.get_str("name"), Some("Help"));
        assert!(!obj.contains_key("mainEntity"));
    }

    #[test]
    fn test_faq_page_without_item() {
        let settings = SiteConfig::default();
        assert!(FaqPageBuilder.build(&BuildContext::new(&settings)).is_empty());
    }
}
