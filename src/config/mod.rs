//! Site configuration management for `sdgen.toml`.
//!
//! # Sections
//!
//! | Section            | Purpose                                          |
//! |--------------------|--------------------------------------------------|
//! | `[site]`           | Site identity (name, url, description, search)   |
//! | `[schema]`         | Output switches, default type, enabled kinds     |
//! | `[organization]`   | Organisation / business details and address      |
//! | `[person]`         | Person details                                   |
//! | `[local_business]` | Price range and opening hours                    |
//! | `[service]`        | Service details                                  |
//!
//! Every field has a default, so an empty file (or no file at all) is a valid
//! configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! name = "Acme Ltd"
//! url = "https://acme.example/"
//!
//! [schema]
//! default_type = "LocalBusiness"
//! breadcrumbs = true
//!
//! [organization]
//! name = "Acme Ltd"
//! locality = "Bristol"
//!
//! [local_business]
//! opening_hours = "Mo-Fr 08:30-17:00, Sa 09:00-13:00"
//! ```

mod defaults;
mod entity;
mod error;
mod schema;
mod site;

pub use entity::{LocalBusinessSection, OrganizationSection, PersonSection, ServiceSection};
pub use error::ConfigError;
pub use schema::SchemaSection;
pub use site::SiteSection;

use crate::{log, schema::EntityType};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing sdgen.toml.
///
/// Treated as an immutable snapshot for the duration of a render.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Path the config was loaded from (empty when built in memory)
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub site: SiteSection,

    #[serde(default)]
    pub schema: SchemaSection,

    #[serde(default)]
    pub organization: OrganizationSection,

    #[serde(default)]
    pub person: PersonSection,

    #[serde(default)]
    pub local_business: LocalBusinessSection,

    #[serde(default)]
    pub service: ServiceSection,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self> {
        Self::parse_at(content, Path::new("<inline>"))
    }

    /// Parse `content`, reporting syntax errors against `path`.
    fn parse_at(content: &str, path: &Path) -> Result<Self> {
        let config: SiteConfig =
            toml::from_str(content).map_err(|err| ConfigError::Toml(path.to_path_buf(), err))?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::parse_at(&content, path)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Load `name` from `root`, falling back to defaults when the file is absent.
    pub fn load(root: &Path, name: &Path) -> Result<Self> {
        let path = root.join(name);
        if path.exists() {
            let config = Self::from_path(&path)?;
            log!("config"; "loaded {}", path.display());
            Ok(config)
        } else {
            log!("config"; "{} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Check values that would produce invalid URLs in the output.
    ///
    /// An unrecognised default type is not an error: it only means no entity
    /// object is emitted, so it is reported as a warning.
    pub fn validate(&self) -> Result<()> {
        let url = self.site.url.trim();
        if url.is_empty() {
            bail!(ConfigError::invalid("site.url", "must not be empty"));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            bail!(ConfigError::invalid("site.url", "must start with http:// or https://"));
        }
        if !self.site.search_path.contains("{search_term_string}") {
            bail!(ConfigError::invalid(
                "site.search_path",
                "must contain the {search_term_string} placeholder"
            ));
        }

        if EntityType::from_key(&self.schema.default_type) == EntityType::None {
            log!("warn"; "[schema.default_type] `{}` is not a known type, no entity will be emitted",
                self.schema.default_type);
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
