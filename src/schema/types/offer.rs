use super::organization_ref;
use crate::{
    content::{CommerceItem, ContentItem},
    schema::{BuildContext, SchemaBuilder, SchemaObject, finish},
};

const NEW_CONDITION: &str = "https://schema.org/NewCondition";

/// `Offer` for a product, or a bare offer naming the item and seller.
pub struct OfferBuilder;

/// Offer nested in a Product's `offers`.
pub(super) fn nested_offer(
    ctx: &BuildContext,
    item: &ContentItem,
    commerce: &CommerceItem,
) -> SchemaObject {
    let mut offer = SchemaObject::typed("Offer");
    offer
        .set_str("url", &item.url)
        .set_str("priceCurrency", &commerce.currency)
        .set_str("price", &commerce.price)
        .set("availability", commerce.stock_status.availability_iri())
        .set("priceValidUntil", ctx.price_valid_until())
        .set_object("seller", organization_ref("Organization", &ctx.settings.organization));
    offer
}

impl OfferBuilder {
    fn build_commerce(&self, ctx: &BuildContext, item: &ContentItem, commerce: &CommerceItem) -> SchemaObject {
        let mut data = SchemaObject::new();
        data.set_str("url", &item.url)
            .set_str("priceCurrency", &commerce.currency)
            .set_str("price", &commerce.price)
            .set("itemCondition", NEW_CONDITION)
            .set_str("name", &item.title)
            .set("availability", commerce.stock_status.availability_iri())
            .set("priceValidUntil", ctx.price_valid_until())
            .set_object("seller", organization_ref("Organization", &ctx.settings.organization));
        finish(self.schema_type(), data)
    }

    fn build_generic(&self, ctx: &BuildContext) -> SchemaObject {
        let mut data = SchemaObject::new();
        if let Some(item) = ctx.item {
            data.set_str("name", &item.title).set_str("url", &item.url);
        }
        data.set_object("seller", organization_ref("Organization", &ctx.settings.organization));
        finish(self.schema_type(), data)
    }
}

impl SchemaBuilder for OfferBuilder {
    fn schema_type(&self) -> &'static str {
        "Offer"
    }

    fn build(&self, ctx: &BuildContext) -> SchemaObject {
        match ctx.product_commerce() {
            Some((item, commerce)) => self.build_commerce(ctx, item, commerce),
            None => self.build_generic(ctx),
        }
    }
}
