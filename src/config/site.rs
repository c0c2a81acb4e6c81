//! `[site]` section configuration.
//!
//! Identity of the site itself: the values a WebSite object, the WebPage
//! `isPartOf` stub and the breadcrumb Home entry are built from.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[site]` section in sdgen.toml.
///
/// # Example
/// ```toml
/// [site]
/// name = "Acme Ltd"
/// description = "Widgets since 1999"
/// url = "https://acme.example/"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
    /// Site name.
    #[serde(default)]
    pub name: String,

    /// Site tagline.
    #[serde(default)]
    pub description: String,

    /// Site root URL.
    #[serde(default = "defaults::site::url")]
    #[educe(Default = defaults::site::url())]
    pub url: String,

    /// Search URL relative to the site root.
    /// `{search_term_string}` is the placeholder search engines fill in.
    #[serde(default = "defaults::site::search_path")]
    #[educe(Default = defaults::site::search_path())]
    pub search_path: String,
}

impl SiteSection {
    /// Site root URL, always ending with `/`. Empty when no URL is set.
    pub fn home_url(&self) -> String {
        if self.url.is_empty() || self.url.ends_with('/') {
            self.url.clone()
        } else {
            format!("{}/", self.url)
        }
    }

    /// Absolute search URL template for the sitelinks search box.
    pub fn search_url_template(&self) -> String {
        let root = self.url.trim_end_matches('/');
        let path = self.search_path.trim_start_matches('/');
        format!("{root}/{path}")
    }
}
