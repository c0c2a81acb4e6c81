use super::organization::organization_fields;
use crate::schema::{BuildContext, SchemaBuilder, SchemaObject, finish};

/// `ProfessionalService`: an organisation typed by the configured service.
pub struct ProfessionalServiceBuilder;

impl SchemaBuilder for ProfessionalServiceBuilder {
    fn schema_type(&self) -> &'static str {
        "ProfessionalService"
    }

    fn build(&self, ctx: &BuildContext) -> SchemaObject {
        let settings = ctx.settings;
        let mut data = organization_fields(&settings.organization);
        data.set_str("priceRange", &settings.local_business.price_range)
            .set_str("additionalType", &settings.service.service_type);
        finish(self.schema_type(), data)
    }
}
