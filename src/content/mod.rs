//! Content snapshots.
//!
//! The engine never talks to a content repository. Callers hand it a
//! [`ContentItem`] (and, for products, a [`CommerceItem`]) resolved up front.
//! The CLI reads these from `.toml` or `.json` files.

mod block;
mod commerce;
mod error;
mod item;

pub use block::{Block, DETAILS_BLOCK};
pub use commerce::{CommerceItem, Rating, StockStatus};
pub use error::ContentError;
pub use item::{ContentItem, ContentKind, HierarchyNode, ItemId, ItemOverrides, Link};

use serde::de::DeserializeOwned;
use std::{fs, path::Path};
use walkdir::WalkDir;

/// Snapshot file formats the loader understands.
const SNAPSHOT_EXTENSIONS: &[&str] = &["toml", "json"];

/// Deserialize a snapshot file, picking the format from its extension.
pub fn load_snapshot<T: DeserializeOwned>(path: &Path) -> Result<T, ContentError> {
    let ext = path.extension().and_then(|ext| ext.to_str()).unwrap_or_default();
    if !SNAPSHOT_EXTENSIONS.contains(&ext) {
        return Err(ContentError::UnsupportedFormat(path.to_path_buf()));
    }

    let content =
        fs::read_to_string(path).map_err(|err| ContentError::Io(path.to_path_buf(), err))?;

    match ext {
        "toml" => toml::from_str(&content).map_err(|err| ContentError::Toml(path.to_path_buf(), err)),
        _ => serde_json::from_str(&content).map_err(|err| ContentError::Json(path.to_path_buf(), err)),
    }
}

/// Whether `path` looks like a snapshot file.
pub fn is_snapshot(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SNAPSHOT_EXTENSIONS.contains(&ext))
}

/// Collect snapshot files under `dir`, sorted by path.
pub fn collect_snapshots(dir: &Path) -> Vec<std::path::PathBuf> {
    let mut files: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && is_snapshot(entry.path()))
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

impl ContentItem {
    /// Load an item snapshot.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        load_snapshot(path)
    }
}

impl CommerceItem {
    /// Load a commerce snapshot.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        load_snapshot(path)
    }
}

// ============================================================================
// Tests
// ============================================================================
