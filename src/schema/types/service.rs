use crate::{
    config::OrganizationSection,
    schema::{BuildContext, SchemaBuilder, SchemaObject, finish},
};

/// `Service` from the `[service]` section, provided by the organisation.
pub struct ServiceBuilder;

fn provider(org: &OrganizationSection) -> Option<SchemaObject> {
    super::organization_ref("Organization", org).map(|p| p.with_str("url", &org.url))
}

impl SchemaBuilder for ServiceBuilder {
    fn schema_type(&self) -> &'static str {
        "Service"
    }

    fn build(&self, ctx: &BuildContext) -> SchemaObject {
        let service = &ctx.settings.service;
        let mut data = SchemaObject::new();
        data.set_str("name", &service.name)
            .set_str("description", &service.description)
            .set_str("url", &service.url)
            .set_str("areaServed", &service.area)
            .set_str("serviceType", &service.service_type)
            .set_object("provider", provider(&ctx.settings.organization));
        finish(self.schema_type(), data)
    }
}
