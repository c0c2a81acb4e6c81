//! Breadcrumb trail derivation.
//!
//! The trail always opens with the site home. For an item it continues with
//! the kind's listing page, the primary category chain (posts only), the
//! parent chain (hierarchical kinds only) and finally the item itself.

use super::SchemaObject;
use crate::{
    config::SiteConfig,
    content::{ContentItem, ContentKind, HierarchyNode, Link},
};

/// One trail step, positioned from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub position: usize,
    pub name: String,
    pub url: String,
}

impl Crumb {
    /// `ListItem` object for this step.
    pub fn to_schema(&self) -> SchemaObject {
        SchemaObject::typed("ListItem")
            .with("position", self.position)
            .with("name", self.name.as_str())
            .with("item", self.url.as_str())
    }
}

/// Accumulates links and numbers them in order.
#[derive(Default)]
struct Trail(Vec<Crumb>);

impl Trail {
    fn push(&mut self, name: &str, url: &str) {
        self.0.push(Crumb {
            position: self.0.len() + 1,
            name: name.to_owned(),
            url: url.to_owned(),
        });
    }

    fn push_link(&mut self, link: &Link) {
        self.push(&link.name, &link.url);
    }

    /// Push `node`'s ancestors root first, then `node` itself when
    /// `include_self` is set.
    fn push_chain(&mut self, node: &HierarchyNode, include_self: bool) {
        let mut chain: Vec<&HierarchyNode> = if include_self {
            node.chain().collect()
        } else {
            node.ancestors().collect()
        };
        chain.reverse();
        for step in chain {
            self.push(&step.name, &step.url);
        }
    }
}

/// Build the breadcrumb trail for `item`, or for the home page alone.
pub fn build_trail(settings: &SiteConfig, item: Option<&ContentItem>) -> Vec<Crumb> {
    let mut trail = Trail::default();
    trail.push(&settings.site.name, &settings.site.home_url());

    let Some(item) = item else {
        return trail.0;
    };

    if item.kind != ContentKind::Page
        && let Some(archive) = &item.archive
    {
        trail.push_link(archive);
    }

    if item.kind == ContentKind::Post
        && let Some(term) = &item.primary_term
    {
        trail.push_chain(term, true);
    }

    if item.is_hierarchical()
        && let Some(parent) = &item.parent
    {
        trail.push_chain(parent, true);
    }

    trail.push(&item.title, &item.url);
    trail.0
}

// ============================================================================
// Tests
// ============================================================================
