//! Structured body blocks.
//!
//! A content body can be supplied as a tree of blocks, the shape produced by
//! block editors: each block has a name, its own markup and optional nested
//! blocks. Field aliases accept the editor's camel-case export directly.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Block name of an accordion (`<details>`/`<summary>`) container.
pub const DETAILS_BLOCK: &str = "core/details";

/// One node of a structured body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Block {
    /// Block type, e.g. `core/paragraph`.
    #[serde(alias = "blockName")]
    pub name: String,

    /// Raw markup of the block itself.
    #[serde(alias = "innerHTML")]
    pub inner_html: String,

    /// Block attributes.
    pub attrs: Map<String, Value>,

    /// Nested blocks.
    #[serde(alias = "innerBlocks")]
    pub inner_blocks: Vec<Block>,
}

impl Block {
    /// Create a leaf block.
    pub fn new(name: impl Into<String>, inner_html: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner_html: inner_html.into(),
            ..Self::default()
        }
    }

    /// Attach nested blocks.
    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.inner_blocks = children;
        self
    }

    /// Set a string attribute.
    pub fn with_attr(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attrs.insert(key.to_owned(), Value::String(value.into()));
        self
    }

    /// Whether this block is an accordion container.
    pub fn is_details(&self) -> bool {
        self.name == DETAILS_BLOCK
    }

    /// String attribute `key`, if present.
    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(Value::as_str)
    }

    /// Render the block to HTML: its own markup followed by its children's.
    pub fn render(&self) -> String {
        let mut html = self.inner_html.clone();
        for child in &self.inner_blocks {
            html.push_str(&child.render());
        }
        html
    }
}
