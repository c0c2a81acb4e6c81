use crate::schema::{BuildContext, SchemaBuilder, SchemaObject, breadcrumb::build_trail, wrap};
use serde_json::Value;

/// `BreadcrumbList` for the current item, or for the home page alone.
///
/// List items pass through as assembled, without cleaning.
pub struct BreadcrumbListBuilder;

impl SchemaBuilder for BreadcrumbListBuilder {
    fn schema_type(&self) -> &'static str {
        "BreadcrumbList"
    }

    fn build(&self, ctx: &BuildContext) -> SchemaObject {
        let items: Vec<Value> = build_trail(ctx.settings, ctx.item)
            .iter()
            .map(|crumb| crumb.to_schema().into_value())
            .collect();

        if items.is_empty() {
            return SchemaObject::new();
        }
        wrap(self.schema_type(), SchemaObject::new().with("itemListElement", items))
    }
}
