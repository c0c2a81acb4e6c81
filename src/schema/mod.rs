//! Schema.org object builders.
//!
//! # Structure
//!
//! | Module        | Purpose                                            |
//! |---------------|----------------------------------------------------|
//! | `object`      | [`SchemaObject`], cleaning and `@context` wrapping |
//! | `address`     | `PostalAddress` fragments                          |
//! | `hours`       | Opening-hours string parsing                       |
//! | `faq`         | Question/answer extraction                         |
//! | `breadcrumb`  | Breadcrumb trail derivation                        |
//! | `registry`    | Selectable entity types                            |
//! | `types`       | One builder per emitted `@type`                    |
//!
//! Builders never fail. Missing input shrinks the object, and an object with
//! nothing to identify it by comes out as `{}`.

pub mod address;
pub mod breadcrumb;
pub mod faq;
pub mod hours;
pub mod object;
pub mod registry;
pub mod types;

pub use object::{CONTEXT, JsonLd, SchemaObject, clean, finish, wrap};
pub use registry::{RegistrationHook, TypeMap, TypeRegistry};

use crate::{
    config::SiteConfig,
    content::{CommerceItem, ContentItem, ContentKind},
};
use chrono::{Datelike, NaiveDate, Utc};
use types::{
    BreadcrumbListBuilder, FaqPageBuilder, LocalBusinessBuilder, OfferBuilder,
    OrganizationBuilder, PersonBuilder, ProductBuilder, ProfessionalServiceBuilder,
    ServiceBuilder, WebPageBuilder, WebSiteBuilder,
};

// ============================================================================
// Builder Contract
// ============================================================================

/// Inputs shared by every builder during one render.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext<'a> {
    pub settings: &'a SiteConfig,
    pub item: Option<&'a ContentItem>,
    pub commerce: Option<&'a CommerceItem>,
    /// Current UTC calendar date.
    pub today: NaiveDate,
}

impl<'a> BuildContext<'a> {
    /// Site-wide context dated today.
    pub fn new(settings: &'a SiteConfig) -> Self {
        Self {
            settings,
            item: None,
            commerce: None,
            today: Utc::now().date_naive(),
        }
    }

    pub fn with_item(mut self, item: Option<&'a ContentItem>) -> Self {
        self.item = item;
        self
    }

    pub fn with_commerce(mut self, commerce: Option<&'a CommerceItem>) -> Self {
        self.commerce = commerce;
        self
    }

    /// Pin the date, for reproducible output.
    pub fn on(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Commerce data, only when the item is a product.
    pub fn product_commerce(&self) -> Option<(&'a ContentItem, &'a CommerceItem)> {
        match (self.item, self.commerce) {
            (Some(item), Some(commerce)) if item.kind == ContentKind::Product => {
                Some((item, commerce))
            }
            _ => None,
        }
    }

    /// Last day of the current year, used as `priceValidUntil`.
    pub fn price_valid_until(&self) -> String {
        format!("{}-12-31", self.today.year())
    }
}

/// A builder for one `@type`.
pub trait SchemaBuilder: Sync {
    /// The `@type` this builder emits.
    fn schema_type(&self) -> &'static str;

    /// Assemble the object. Returns `{}` when there is nothing to describe.
    fn build(&self, ctx: &BuildContext) -> SchemaObject;
}

// ============================================================================
// Schema Kinds
// ============================================================================

/// Every `@type` the engine can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    WebSite,
    WebPage,
    Organization,
    LocalBusiness,
    ProfessionalService,
    Person,
    Service,
    Product,
    Offer,
    FaqPage,
    BreadcrumbList,
}

impl SchemaKind {
    pub const ALL: [Self; 11] = [
        Self::WebSite,
        Self::WebPage,
        Self::Organization,
        Self::LocalBusiness,
        Self::ProfessionalService,
        Self::Person,
        Self::Service,
        Self::Product,
        Self::Offer,
        Self::FaqPage,
        Self::BreadcrumbList,
    ];

    /// The builder for this kind.
    pub fn builder(self) -> &'static dyn SchemaBuilder {
        match self {
            Self::WebSite => &WebSiteBuilder,
            Self::WebPage => &WebPageBuilder,
            Self::Organization => &OrganizationBuilder,
            Self::LocalBusiness => &LocalBusinessBuilder,
            Self::ProfessionalService => &ProfessionalServiceBuilder,
            Self::Person => &PersonBuilder,
            Self::Service => &ServiceBuilder,
            Self::Product => &ProductBuilder,
            Self::Offer => &OfferBuilder,
            Self::FaqPage => &FaqPageBuilder,
            Self::BreadcrumbList => &BreadcrumbListBuilder,
        }
    }

    /// The schema.org type name.
    pub fn as_str(self) -> &'static str {
        self.builder().schema_type()
    }

    /// Build this kind.
    pub fn build(self, ctx: &BuildContext) -> SchemaObject {
        self.builder().build(ctx)
    }
}

// ============================================================================
// Entity Types
// ============================================================================

/// The entity slot of a render, chosen by key from settings or an item
/// override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    /// Page-level only; the page object is already emitted.
    WebPage,
    Organization,
    LocalBusiness,
    ProfessionalService,
    Person,
    Service,
    FaqPage,
    Product,
    Offer,
    /// Unrecognised key: no entity.
    None,
}

impl EntityType {
    /// Resolve a type key. Unknown keys map to [`EntityType::None`].
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "WebPage" => Self::WebPage,
            "Organization" => Self::Organization,
            "LocalBusiness" => Self::LocalBusiness,
            "ProfessionalService" => Self::ProfessionalService,
            "Person" => Self::Person,
            "Service" => Self::Service,
            "FAQPage" => Self::FaqPage,
            "Product" => Self::Product,
            "Offer" => Self::Offer,
            _ => Self::None,
        }
    }

    /// The kind to build, if any.
    pub const fn kind(self) -> Option<SchemaKind> {
        match self {
            Self::WebPage => Some(SchemaKind::WebPage),
            Self::Organization => Some(SchemaKind::Organization),
            Self::LocalBusiness => Some(SchemaKind::LocalBusiness),
            Self::ProfessionalService => Some(SchemaKind::ProfessionalService),
            Self::Person => Some(SchemaKind::Person),
            Self::Service => Some(SchemaKind::Service),
            Self::FaqPage => Some(SchemaKind::FaqPage),
            Self::Product => Some(SchemaKind::Product),
            Self::Offer => Some(SchemaKind::Offer),
            Self::None => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
