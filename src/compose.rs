//! Schema composition for one render.
//!
//! [`SchemaComposer`] picks the builders that apply to a page, collects their
//! non-empty output in order and passes the list through the output hooks.
//!
//! | Context      | Output                                                  |
//! |--------------|---------------------------------------------------------|
//! | `SiteWide`   | WebSite, default entity                                 |
//! | `Singular`   | WebSite, WebPage, entity, BreadcrumbList                |
//! | `Singular` with a custom override | the override alone             |

use crate::{
    config::SiteConfig,
    content::{CommerceItem, ContentItem, ItemId},
    schema::{BuildContext, EntityType, JsonLd, SchemaKind},
};
use chrono::NaiveDate;

/// Hook run over the composed list before empties are dropped.
///
/// Receives the list and the item id (`None` for site-wide renders).
pub type OutputHook = Box<dyn Fn(Vec<JsonLd>, Option<ItemId>) -> Vec<JsonLd> + Send + Sync>;

/// What is being rendered.
#[derive(Debug, Clone, Copy)]
pub enum RenderContext<'a> {
    /// Home, archive and other listing pages.
    SiteWide,
    /// A single content item.
    Singular(&'a ContentItem),
}

impl<'a> RenderContext<'a> {
    pub fn item(&self) -> Option<&'a ContentItem> {
        match self {
            Self::SiteWide => None,
            Self::Singular(item) => Some(item),
        }
    }
}

/// Composes the schema list for a render.
pub struct SchemaComposer<'a> {
    settings: &'a SiteConfig,
    hooks: Vec<OutputHook>,
    today: Option<NaiveDate>,
}

impl<'a> SchemaComposer<'a> {
    pub fn new(settings: &'a SiteConfig) -> Self {
        Self {
            settings,
            hooks: Vec::new(),
            today: None,
        }
    }

    /// Register an output hook. Hooks run in registration order.
    pub fn with_hook(mut self, hook: OutputHook) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Pin the render date instead of reading the clock.
    pub fn on(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn settings(&self) -> &'a SiteConfig {
        self.settings
    }

    fn build_context<'b>(
        &self,
        item: Option<&'b ContentItem>,
        commerce: Option<&'b CommerceItem>,
    ) -> BuildContext<'b>
    where
        'a: 'b,
    {
        let ctx = BuildContext::new(self.settings)
            .with_item(item)
            .with_commerce(commerce);
        match self.today {
            Some(today) => ctx.on(today),
            None => ctx,
        }
    }

    /// Compose the final list for `render`: builders, then hooks, then
    /// empties dropped.
    pub fn compose(
        &self,
        render: RenderContext<'_>,
        commerce: Option<&CommerceItem>,
    ) -> Vec<JsonLd> {
        if !self.settings.schema.enabled {
            return Vec::new();
        }

        let schemas = match render {
            RenderContext::SiteWide => self.site_wide(),
            RenderContext::Singular(item) => self.singular(item, commerce),
        };

        let id = render.item().map(|item| item.id);
        let schemas = self
            .hooks
            .iter()
            .fold(schemas, |schemas, hook| hook(schemas, id));

        schemas.into_iter().filter(|obj| !obj.is_empty()).collect()
    }

    fn site_wide(&self) -> Vec<JsonLd> {
        let ctx = self.build_context(None, None);
        let mut out = Vec::new();
        if self.settings.schema.website {
            out.push(SchemaKind::WebSite.build(&ctx).into());
        }
        if let Some(kind) = EntityType::from_key(&self.settings.schema.default_type).kind() {
            out.push(kind.build(&ctx).into());
        }
        out
    }

    fn singular(&self, item: &ContentItem, commerce: Option<&CommerceItem>) -> Vec<JsonLd> {
        if item.overrides.is_disabled() || !self.settings.schema.is_kind_enabled(item.kind.as_str()) {
            return Vec::new();
        }
        self.item_schemas(item, commerce)
    }

    /// Everything an item would emit, without the kind filter or hooks.
    ///
    /// A custom override replaces the generated objects entirely and is kept
    /// verbatim, whatever JSON value it holds.
    pub fn item_schemas(&self, item: &ContentItem, commerce: Option<&CommerceItem>) -> Vec<JsonLd> {
        if let Some(custom) = item.overrides.custom_value() {
            return vec![JsonLd::from(custom)];
        }

        let ctx = self.build_context(Some(item), commerce);
        let schema = &self.settings.schema;
        let mut out = Vec::new();

        if schema.website {
            out.push(SchemaKind::WebSite.build(&ctx));
        }
        out.push(SchemaKind::WebPage.build(&ctx));

        let key = item.overrides.schema_type().unwrap_or(schema.default_type.as_str());
        match EntityType::from_key(key) {
            EntityType::WebPage => {}
            entity => {
                if let Some(kind) = entity.kind() {
                    out.push(kind.build(&ctx));
                }
            }
        }

        if schema.breadcrumbs {
            out.push(SchemaKind::BreadcrumbList.build(&ctx));
        }

        out.into_iter()
            .filter(|obj| !obj.is_empty())
            .map(JsonLd::from)
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
