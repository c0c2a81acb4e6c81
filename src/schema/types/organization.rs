use crate::{
    config::OrganizationSection,
    schema::{BuildContext, SchemaBuilder, SchemaObject, address::build_address, finish},
};

/// `Organization` from the `[organization]` section.
pub struct OrganizationBuilder;

/// Fields every organisation-like type shares.
pub(super) fn organization_fields(org: &OrganizationSection) -> SchemaObject {
    let mut data = SchemaObject::new();
    data.set_str("name", &org.name)
        .set_str("url", &org.url)
        .set_str("logo", &org.logo)
        .set_str("telephone", &org.phone)
        .set_str("email", &org.email)
        .set_object("address", build_address(org));
    data
}

impl SchemaBuilder for OrganizationBuilder {
    fn schema_type(&self) -> &'static str {
        "Organization"
    }

    fn build(&self, ctx: &BuildContext) -> SchemaObject {
        finish(self.schema_type(), organization_fields(&ctx.settings.organization))
    }
}
