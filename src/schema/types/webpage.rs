use crate::{
    content::ContentItem,
    schema::{BuildContext, SchemaBuilder, SchemaObject, finish},
    utils::html::{strip_tags, truncate_chars},
};

/// Longest body-derived description, marker included.
const DESCRIPTION_LIMIT: usize = 160;

/// `WebPage` for a single item, linked to its site.
pub struct WebPageBuilder;

/// Excerpt if set, otherwise the start of the body text.
fn description(item: &ContentItem) -> String {
    if !item.excerpt.is_empty() {
        return strip_tags(&item.excerpt);
    }
    let text = strip_tags(&item.body);
    if text.chars().count() > DESCRIPTION_LIMIT {
        truncate_chars(&text, DESCRIPTION_LIMIT, "...")
    } else {
        text
    }
}

impl SchemaBuilder for WebPageBuilder {
    fn schema_type(&self) -> &'static str {
        "WebPage"
    }

    fn build(&self, ctx: &BuildContext) -> SchemaObject {
        let Some(item) = ctx.item else {
            return SchemaObject::new();
        };
        let site = &ctx.settings.site;

        let author = (!item.author.is_empty())
            .then(|| SchemaObject::typed("Person").with("name", item.author.as_str()));
        let is_part_of = SchemaObject::typed("WebSite")
            .with("name", site.name.as_str())
            .with("url", site.home_url());

        let mut data = SchemaObject::new();
        data.set_str("name", &item.title)
            .set_str("url", &item.url)
            .set_str("description", &description(item))
            .set_str("datePublished", &item.published)
            .set_str("dateModified", &item.modified)
            .set_object("author", author)
            .set_object("isPartOf", Some(is_part_of));

        finish(self.schema_type(), data)
    }
}
