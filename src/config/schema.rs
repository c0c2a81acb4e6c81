//! `[schema]` section configuration.
//!
//! Global switches deciding which objects the composer emits.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[schema]` section in sdgen.toml.
///
/// # Example
/// ```toml
/// [schema]
/// enabled = true
/// default_type = "LocalBusiness"
/// website = true
/// enabled_kinds = ["post", "page", "product"]
/// breadcrumbs = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SchemaSection {
    /// Master switch for all output.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub enabled: bool,

    /// Entity type emitted site-wide and for items without an override.
    #[serde(default = "defaults::schema::default_type")]
    #[educe(Default = defaults::schema::default_type())]
    pub default_type: String,

    /// Emit the WebSite object with its sitelinks search action.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = true)]
    pub website: bool,

    /// Content kinds that get per-item schema.
    #[serde(default = "defaults::schema::enabled_kinds")]
    #[educe(Default = defaults::schema::enabled_kinds())]
    pub enabled_kinds: Vec<String>,

    /// Emit a BreadcrumbList for singular items.
    #[serde(default)]
    pub breadcrumbs: bool,
}

impl SchemaSection {
    /// Whether items of `kind` receive schema.
    pub fn is_kind_enabled(&self, kind: &str) -> bool {
        self.enabled_kinds.iter().any(|k| k == kind)
    }
}
