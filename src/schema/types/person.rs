use crate::schema::{BuildContext, SchemaBuilder, SchemaObject, finish};

/// `Person` from the `[person]` section.
pub struct PersonBuilder;

impl SchemaBuilder for PersonBuilder {
    fn schema_type(&self) -> &'static str {
        "Person"
    }

    fn build(&self, ctx: &BuildContext) -> SchemaObject {
        let person = &ctx.settings.person;
        let data = SchemaObject::new()
            .with_str("name", &person.name)
            .with_str("url", &person.url)
            .with_str("jobTitle", &person.job_title)
            .with_str("image", &person.image);
        finish(self.schema_type(), data)
    }
}
