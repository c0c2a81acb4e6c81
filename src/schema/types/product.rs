use super::{offer::nested_offer, organization_ref};
use crate::{
    content::{CommerceItem, ContentItem},
    schema::{BuildContext, SchemaBuilder, SchemaObject, finish},
    utils::html::{strip_tags, trim_words},
};

/// Words of body text used when a product has no excerpt.
const FALLBACK_WORDS: usize = 30;

/// `Product` with a nested offer when commerce data is available.
pub struct ProductBuilder;

impl ProductBuilder {
    fn build_commerce(&self, ctx: &BuildContext, item: &ContentItem, commerce: &CommerceItem) -> SchemaObject {
        let org = &ctx.settings.organization;
        let description = if commerce.short_description.is_empty() {
            &commerce.description
        } else {
            &commerce.short_description
        };
        let rating = commerce.rating.filter(|r| r.count > 0).map(|r| {
            SchemaObject::typed("AggregateRating")
                .with("ratingValue", r.value)
                .with("reviewCount", r.count)
        });
        let offer = nested_offer(ctx, item, commerce);

        let mut data = SchemaObject::new();
        data.set_str("name", &item.title)
            .set_str("url", &item.url)
            .set_str("description", &strip_tags(description))
            .set_str("image", &commerce.image)
            .set_str("sku", &commerce.sku)
            .set_object("brand", organization_ref("Brand", org))
            .set_object("aggregateRating", rating)
            .set_object("offers", Some(offer));
        finish(self.schema_type(), data)
    }

    fn build_generic(&self, ctx: &BuildContext) -> SchemaObject {
        let mut data = SchemaObject::new();
        if let Some(item) = ctx.item {
            let description = if item.excerpt.is_empty() {
                trim_words(&strip_tags(&item.body), FALLBACK_WORDS)
            } else {
                strip_tags(&item.excerpt)
            };
            data.set_str("name", &item.title)
                .set_str("url", &item.url)
                .set_str("description", &description)
                .set_str("image", &item.featured_image);
        }
        data.set_object("brand", organization_ref("Brand", &ctx.settings.organization));
        finish(self.schema_type(), data)
    }
}

impl SchemaBuilder for ProductBuilder {
    fn schema_type(&self) -> &'static str {
        "Product"
    }

    fn build(&self, ctx: &BuildContext) -> SchemaObject {
        match ctx.product_commerce() {
            Some((item, commerce)) => self.build_commerce(ctx, item, commerce),
            None => self.build_generic(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        content::{ContentKind, Rating, StockStatus},
        schema::types::test_support::{date, org_settings},
    };
    use serde_json::json;

    fn product() -> ContentItem {
        ContentItem {
            title: "Widget".into(),
            url: "https://acme.test/widget/".into(),
            kind: ContentKind::Product,
            featured_image: "https://acme.test/thumb.jpg".into(),
            body: "<p>A very fine widget.</p>".into(),
            ..Default::default()
        }
    }

    fn commerce() -> CommerceItem {
        CommerceItem {
            price: "19.99".into(),
            currency: "GBP".into(),
            stock_status: StockStatus::BackOrder,
            sku: "W-1".into(),
            rating: Some(Rating { value: 4.5, count: 12 }),
            image: "https://acme.test/widget.jpg".into(),
            short_description: "".into(),
            description: "<p>Long <b>description</b></p>".into(),
        }
    }

    #[test]
    fn test_commerce_product() {
        let settings = org_settings();
        let item = product();
        let commerce = commerce();
        let ctx = BuildContext::new(&settings)
            .with_item(Some(&item))
            .with_commerce(Some(&commerce))
            .on(date());

        assert_eq!(
            ProductBuilder.build(&ctx).into_value(),
            json!({
                "@context": "https://schema.org",
                "@type": "Product",
                "name": "Widget",
                "url": "https://acme.test/widget/",
                "description": "Long description",
                "image": "https://acme.test/widget.jpg",
                "sku": "W-1",
                "brand": {"@type": "Brand", "name": "Acme Ltd"},
                "aggregateRating": {"@type": "AggregateRating", "ratingValue": 4.5, "reviewCount": 12},
                "offers": {
                    "@type": "Offer",
                    "url": "https://acme.test/widget/",
                    "priceCurrency": "GBP",
                    "price": "19.99",
                    "availability": "https://schema.org/BackOrder",
                    "priceValidUntil": "2026-12-31",
                    "seller": {"@type": "Organization", "name": "Acme Ltd"}
                }
            })
        );
    }

    #[test]
    fn test_short_description_preferred() {
        let settings = org_settings();
        let item = product();
        let commerce = CommerceItem {
            short_description: "Short".into(),
            ..commerce()
        };
        let ctx = BuildContext::new(&settings)
            .with_item(Some(&item))
            .with_commerce(Some(&commerce));
        assert_eq!(ProductBuilder.build(&ctx).get_str("description"), Some("Short"));
    }

    #[test]
    fn test_no_rating_without_reviews() {
        let settings = org_settings();
        let item = product();
        let commerce = CommerceItem {
            rating: Some(Rating { value: 0.0, count: 0 }),
            ..commerce()
        };
        let ctx = BuildContext::new(&settings)
            .with_item(Some(&item))
            .with_commerce(Some(&commerce));
        assert!(!ProductBuilder.build(&ctx).contains_key("aggregateRating"));
    }

    #[test]
    fn test_generic_product() {
        let settings = org_settings();
        let item = product();
        let ctx = BuildContext::new(&settings).with_item(Some(&item));

        assert_eq!(
            ProductBuilder.build(&ctx).into_value(),
            json!({
                "@context": "https://schema.org",
                "@type": "Product",
                "name": "Widget",
                "url": "https://acme.test/widget/",
                "description": "A very fine widget.",
                "image": "https://acme.test/thumb.jpg",
                "brand": {"@type": "Brand", "name": "Acme Ltd"}
            })
        );
    }

    #[test]
    fn test_generic_description_trims_words() {
        let settings = org_settings();
        let item = ContentItem {
            body: "word ".repeat(40),
            ..product()
        };
        let ctx = BuildContext::new(&settings).with_item(Some(&item));
        let obj = ProductBuilder.build(&ctx);
        let description = obj.get_str("description").unwrap();
        assert_eq!(description.split_whitespace().count(), 30);
        assert!(description.ends_with('…'));
    }
}
