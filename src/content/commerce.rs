//! Commerce data for product-like items.
//!
//! Present only when a store extension supplies it. The Product and Offer
//! builders read it; everything else ignores it.

use serde::{Deserialize, Serialize};

/// Store-side view of a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CommerceItem {
    /// Decimal price as the store formats it, e.g. `"19.99"`.
    pub price: String,
    /// ISO 4217 currency code.
    pub currency: String,
    pub stock_status: StockStatus,
    pub sku: String,
    pub rating: Option<Rating>,
    /// Primary image URL.
    pub image: String,
    pub short_description: String,
    pub description: String,
}

/// Review aggregate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rating {
    /// Average rating.
    pub value: f64,
    /// Number of reviews.
    pub count: u32,
}

/// Stock status of a product.
///
/// Accepts the store's slugs (`instock`, `outofstock`, `onbackorder`) and the
/// schema.org names. Anything else reads as in stock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StockStatus {
    #[default]
    InStock,
    OutOfStock,
    BackOrder,
}

impl StockStatus {
    /// Parse a status slug; unrecognised values are treated as in stock.
    pub fn from_slug(slug: &str) -> Self {
        match slug.trim().to_ascii_lowercase().as_str() {
            "outofstock" | "out_of_stock" | "out-of-stock" => Self::OutOfStock,
            "onbackorder" | "backorder" | "on_backorder" => Self::BackOrder,
            _ => Self::InStock,
        }
    }

    /// Store slug for this status.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::InStock => "instock",
            Self::OutOfStock => "outofstock",
            Self::BackOrder => "onbackorder",
        }
    }

    /// schema.org `ItemAvailability` IRI.
    pub const fn availability_iri(self) -> &'static str {
        match self {
            Self::InStock => "https://schema.org/InStock",
            Self::OutOfStock => "https://schema.org/OutOfStock",
            Self::BackOrder => "https://schema.org/BackOrder",
        }
    }
}

impl From<String> for StockStatus {
    fn from(slug: String) -> Self {
        Self::from_slug(&slug)
    }
}

impl From<StockStatus> for String {
    fn from(status: StockStatus) -> Self {
        status.slug().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_from_slug() {
        assert_eq!(StockStatus::from_slug("instock"), StockStatus::InStock);
        assert_eq!(StockStatus::from_slug("outofstock"), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_slug("onbackorder"), StockStatus::BackOrder);
        assert_eq!(StockStatus::from_slug("OutOfStock"), StockStatus::OutOfStock);
        assert_eq!(StockStatus::from_slug("BackOrder"), StockStatus::BackOrder);
    }

    #[test]
    fn test_stock_status_unknown_is_in_stock() {
        assert_eq!(StockStatus::from_slug("discontinued"), StockStatus::InStock);
        assert_eq!(StockStatus::from_slug(""), StockStatus::InStock);
    }

    #[test]
    fn test_availability_iri() {
        assert_eq!(StockStatus::InStock.availability_iri(), "https://schema.org/InStock");
        assert_eq!(StockStatus::OutOfStock.availability_iri(), "https://schema.org/OutOfStock");
        assert_eq!(StockStatus::BackOrder.availability_iri(), "https://schema.org/BackOrder");
    }

    #[test]
    fn test_commerce_item_from_toml() {
        let toml = r#"
            price = "19.99"
            currency = "GBP"
            stock_status = "onbackorder"
            sku = "W-1"

            [rating]
            value = 4.5
            count = 12
        "#;
        let item: CommerceItem = toml::from_str(toml).unwrap();
        assert_eq!(item.price, "19.99");
        assert_eq!(item.stock_status, StockStatus::BackOrder);
        assert_eq!(item.rating, Some(Rating { value: 4.5, count: 12 }));
        assert_eq!(item.image, "");
    }

    #[test]
    fn test_stock_status_serializes_as_slug() {
        let json = serde_json::to_string(&StockStatus::OutOfStock).unwrap();
        assert_eq!(json, "\"outofstock\"");
    }
}
