//! sdgen - schema.org JSON-LD composition.
//!
//! Builds structured-data objects for a page from site settings, a content
//! item and optional commerce data:
//!
//! ```ignore
//! let config = SiteConfig::load(root, Path::new("sdgen.toml"))?;
//! let schemas = SchemaComposer::new(&config).compose(RenderContext::Singular(&item), None);
//! let html = output::render_scripts(&schemas)?;
//! ```

pub mod compose;
pub mod config;
pub mod content;
pub mod output;
pub mod schema;
pub mod utils;

pub use compose::{OutputHook, RenderContext, SchemaComposer};
pub use config::SiteConfig;
pub use schema::{JsonLd, SchemaBuilder, SchemaKind, SchemaObject};
