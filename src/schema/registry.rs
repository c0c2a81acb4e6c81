//! Selectable entity types.
//!
//! The registry only decides what a configuration UI or the `types` command
//! offers. Building is dispatched through [`EntityType`](super::EntityType),
//! so a registered key without a builder simply produces no entity.

use serde::Serialize;
use serde_json::Map;

/// Ordered map of type key to display label.
pub type TypeMap = Map<String, serde_json::Value>;

/// Hook run once over the type map, e.g. to add or relabel types.
///
/// The map's key order is the offer order. Drop types with
/// [`Map::shift_remove`]; `remove` swaps the last entry into the gap.
pub type RegistrationHook = Box<dyn Fn(TypeMap) -> TypeMap + Send + Sync>;

/// Entity types offered by default, with their labels.
const DEFAULT_TYPES: &[(&str, &str)] = &[
    ("Organization", "Organisation"),
    ("LocalBusiness", "Local Business"),
    ("ProfessionalService", "Professional Service"),
    ("Person", "Person"),
    ("Service", "Service"),
    ("FAQPage", "FAQ Page"),
    ("Product", "Product"),
    ("Offer", "Offer"),
];

/// Selectable entity types with display labels, in offer order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TypeRegistry {
    types: TypeMap,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        let types = DEFAULT_TYPES
            .iter()
            .map(|(key, label)| ((*key).to_owned(), (*label).into()))
            .collect();
        Self { types }
    }
}

impl TypeRegistry {
    /// Default types with every hook applied in order.
    pub fn with_hooks(hooks: &[RegistrationHook]) -> Self {
        let types = hooks
            .iter()
            .fold(Self::default().types, |types, hook| hook(types));
        Self { types }
    }

    /// Display label for `key`.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.types.get(key).and_then(|v| v.as_str())
    }

    /// `(key, label)` pairs in offer order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.types
            .iter()
            .map(|(key, label)| (key.as_str(), label.as_str().unwrap_or(key.as_str())))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Choices for a per-item override: `WebPage` first, then every
    /// registered type.
    pub fn override_choices(&self) -> Vec<(&str, &str)> {
        std::iter::once(("WebPage", "WebPage"))
            .chain(self.iter().filter(|(key, _)| *key != "WebPage"))
            .collect()
    }
}
