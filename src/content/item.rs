//! The content item a page renders.

use super::block::Block;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::iter;

/// Identifier of a content item in the external repository.
pub type ItemId = u64;

/// A post, page, product or custom-kind item.
///
/// Every text field treats the empty string as "not set".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentItem {
    pub id: ItemId,
    pub title: String,
    /// Canonical URL.
    pub url: String,
    pub excerpt: String,
    /// Fully rendered body HTML.
    pub body: String,
    /// Structured body, when the editor provides one.
    pub blocks: Vec<Block>,
    /// ISO 8601 publication timestamp.
    pub published: String,
    /// ISO 8601 last-modified timestamp.
    pub modified: String,
    /// Author display name.
    pub author: String,
    pub kind: ContentKind,
    /// Overrides whether the kind supports parent/child hierarchy.
    pub hierarchical: Option<bool>,
    /// Listing page of the item's kind.
    pub archive: Option<Link>,
    /// Immediate parent, linking on to its own parent.
    pub parent: Option<HierarchyNode>,
    /// Primary taxonomy term, linking on to its parent term.
    pub primary_term: Option<HierarchyNode>,
    /// Featured image URL.
    pub featured_image: String,
    pub overrides: ItemOverrides,
}

impl ContentItem {
    /// Whether items of this kind can have parents.
    pub fn is_hierarchical(&self) -> bool {
        self.hierarchical
            .unwrap_or_else(|| self.kind.is_hierarchical_by_default())
    }
}

// ============================================================================
// Content Kind
// ============================================================================

/// Kind of content item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentKind {
    /// Standard dated post, categorised by taxonomy terms.
    #[default]
    Post,
    /// Static page, arranged in a parent/child tree.
    Page,
    /// Store product.
    Product,
    /// Any other registered kind.
    Custom(String),
}

impl ContentKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Post => "post",
            Self::Page => "page",
            Self::Product => "product",
            Self::Custom(name) => name,
        }
    }

    /// Pages nest; everything else is flat unless the item says otherwise.
    pub const fn is_hierarchical_by_default(&self) -> bool {
        matches!(self, Self::Page)
    }
}

impl From<String> for ContentKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "post" => Self::Post,
            "page" => Self::Page,
            "product" => Self::Product,
            _ => Self::Custom(name),
        }
    }
}

impl From<ContentKind> for String {
    fn from(kind: ContentKind) -> Self {
        match kind {
            ContentKind::Custom(name) => name,
            other => other.as_str().to_owned(),
        }
    }
}

// ============================================================================
// Navigation Links
// ============================================================================

/// A named URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub name: String,
    pub url: String,
}

/// A node in a parent chain: a parent page or a taxonomy term.
///
/// The chain is only walkable upward, from a node towards the root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HierarchyNode {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub parent: Option<Box<HierarchyNode>>,
}

impl HierarchyNode {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            parent: None,
        }
    }

    /// Attach a parent node.
    pub fn with_parent(mut self, parent: HierarchyNode) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// This node followed by its ancestors, nearest first.
    pub fn chain(&self) -> impl Iterator<Item = &HierarchyNode> {
        iter::successors(Some(self), |node| node.parent.as_deref())
    }

    /// Ancestors of this node, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &HierarchyNode> {
        self.chain().skip(1)
    }
}

// ============================================================================
// Per-item Overrides
// ============================================================================

/// Per-item settings stored alongside the item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ItemOverrides {
    /// `Some(false)` turns schema off for this item; unset means enabled.
    pub enabled: Option<bool>,
    /// Entity type replacing the site default.
    pub schema_type: String,
    /// Raw JSON-LD replacing all generated output.
    pub custom_json: String,
}

impl ItemOverrides {
    /// Whether schema output was explicitly switched off.
    pub fn is_disabled(&self) -> bool {
        self.enabled == Some(false)
    }

    /// The type override, if one is set.
    pub fn schema_type(&self) -> Option<&str> {
        let ty = self.schema_type.trim();
        (!ty.is_empty()).then_some(ty)
    }

    /// The raw custom JSON-LD, only if it is non-empty and parses as JSON.
    ///
    /// Invalid text is treated as absent, matching what an editor would store
    /// after validating the field on save.
    pub fn validated_custom_json(&self) -> Option<&str> {
        let raw = self.custom_json.trim();
        if raw.is_empty() {
            return None;
        }
        serde_json::from_str::<Value>(raw).is_ok().then_some(raw)
    }

    /// The custom JSON-LD as parsed, e.g. one object or an array of them.
    ///
    /// A document that parses to `null` reads as absent.
    pub fn custom_value(&self) -> Option<Value> {
        serde_json::from_str(self.validated_custom_json()?)
            .ok()
            .filter(|value: &Value| !value.is_null())
    }
}

// ============================================================================
// Tests
// ============================================================================
