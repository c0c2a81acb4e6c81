use super::organization::organization_fields;
use crate::schema::{
    BuildContext, SchemaBuilder, SchemaObject, finish, hours::opening_hours_specification,
};
use serde_json::Value;

/// `LocalBusiness`: an organisation with a price range and opening hours.
pub struct LocalBusinessBuilder;

impl SchemaBuilder for LocalBusinessBuilder {
    fn schema_type(&self) -> &'static str {
        "LocalBusiness"
    }

    fn build(&self, ctx: &BuildContext) -> SchemaObject {
        let business = &ctx.settings.local_business;
        let mut data = organization_fields(&ctx.settings.organization);
        data.set_str("priceRange", &business.price_range);

        let hours: Vec<Value> = opening_hours_specification(&business.opening_hours)
            .into_iter()
            .map(SchemaObject::into_value)
            .collect();
        if !hours.is_empty() {
            data.set("openingHoursSpecification", hours);
        }

        finish(self.schema_type(), data)
    }
}
