use crate::schema::{BuildContext, SchemaBuilder, SchemaObject, finish};

/// Placeholder search engines substitute in the search URL.
const QUERY_INPUT: &str = "required name=search_term_string";

/// `WebSite` with a sitelinks search action.
pub struct WebSiteBuilder;

impl SchemaBuilder for WebSiteBuilder {
    fn schema_type(&self) -> &'static str {
        "WebSite"
    }

    fn build(&self, ctx: &BuildContext) -> SchemaObject {
        let site = &ctx.settings.site;

        let target = SchemaObject::typed("EntryPoint").with("urlTemplate", site.search_url_template());
        let action = SchemaObject::typed("SearchAction")
            .with("target", target)
            .with("query-input", QUERY_INPUT);

        let data = SchemaObject::new()
            .with("name", site.name.as_str())
            .with("url", site.home_url())
            .with_str("description", &site.description)
            .with("potentialAction", action);

        finish(self.schema_type(), data)
    }
}
