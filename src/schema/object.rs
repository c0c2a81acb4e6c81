//! JSON-LD object model and the helpers every builder shares.
//!
//! A builder fills a [`SchemaObject`] with plain fields, then hands it to
//! [`finish`], which applies the identity rule, prepends `@context`/`@type`
//! and strips empty values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Vocabulary every emitted object declares.
pub const CONTEXT: &str = "https://schema.org";

/// Keys that make an object worth emitting.
const IDENTIFYING_KEYS: &[&str] = &["name", "url", "itemListElement"];

/// An ordered JSON-LD mapping.
///
/// Key order is insertion order, so `@context` and `@type` lead once
/// [`wrap`] has run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaObject(Map<String, Value>);

impl SchemaObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// A nested fragment carrying only `@type`, e.g. an author or seller.
    pub fn typed(ty: &str) -> Self {
        let mut obj = Self::new();
        obj.set("@type", ty);
        obj
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Insert `value` under `key`, replacing any previous value in place.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.0.insert(key.to_owned(), value.into());
        self
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert a string only when it is non-empty.
    pub fn set_str(&mut self, key: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.set(key, value);
        }
        self
    }

    /// Builder-style [`set_str`](Self::set_str).
    pub fn with_str(mut self, key: &str, value: &str) -> Self {
        self.set_str(key, value);
        self
    }

    /// Attach a nested object when one was built.
    pub fn set_object(&mut self, key: &str, value: Option<SchemaObject>) -> &mut Self {
        if let Some(obj) = value.filter(|obj| !obj.is_empty()) {
            self.set(key, obj);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The object's `@type`, if set.
    pub fn schema_type(&self) -> Option<&str> {
        self.get_str("@type")
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<SchemaObject> for Value {
    fn from(obj: SchemaObject) -> Self {
        obj.into_value()
    }
}

impl From<Map<String, Value>> for SchemaObject {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

// ============================================================================
// Output Entries
// ============================================================================

/// One entry of a composed list: a built object, or a custom document
/// passed through verbatim.
///
/// A custom document may be any JSON value, commonly an object or an array
/// of objects. Each entry becomes one script element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonLd {
    Object(SchemaObject),
    Raw(Value),
}

impl JsonLd {
    /// Whether the entry has nothing to output: `{}`, `[]`, `""` or null.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Object(obj) => obj.is_empty(),
            Self::Raw(value) => is_blank(value),
        }
    }

    /// `@type` of the entry when it is a single object.
    pub fn schema_type(&self) -> Option<&str> {
        match self {
            Self::Object(obj) => obj.schema_type(),
            Self::Raw(value) => value.get("@type").and_then(Value::as_str),
        }
    }

    pub fn as_object(&self) -> Option<&SchemaObject> {
        match self {
            Self::Object(obj) => Some(obj),
            Self::Raw(_) => None,
        }
    }
}

impl From<SchemaObject> for JsonLd {
    fn from(obj: SchemaObject) -> Self {
        Self::Object(obj)
    }
}

impl From<Value> for JsonLd {
    /// Objects become [`JsonLd::Object`]; anything else stays raw.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::Object(SchemaObject(map)),
            other => Self::Raw(other),
        }
    }
}

// ============================================================================
// Shared Helpers
// ============================================================================

/// Whether a value counts as absent: null, `""`, `[]` or `{}`.
///
/// `false`, `0` and `"0"` are real values and survive cleaning.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn retain_filled(map: &mut Map<String, Value>) {
    map.retain(|_, value| !is_blank(value));
}

/// Drop blank values from `obj`, and from each object nested directly in it.
///
/// A nested object left empty by cleaning is dropped too. Arrays are kept
/// as-is unless empty.
pub fn clean(mut obj: SchemaObject) -> SchemaObject {
    for value in obj.0.values_mut() {
        if let Value::Object(nested) = value {
            retain_filled(nested);
        }
    }
    retain_filled(&mut obj.0);
    obj
}

/// Prepend `@context` and `@type` to `data`.
///
/// Keys already in `data` keep their values; a `@type` in `data` wins.
pub fn wrap(ty: &str, data: SchemaObject) -> SchemaObject {
    let mut out = SchemaObject::new().with("@context", CONTEXT).with("@type", ty);
    out.0.extend(data.0);
    out
}

/// Whether `data` has a field an object can be identified by.
pub fn is_identifiable(data: &SchemaObject) -> bool {
    IDENTIFYING_KEYS
        .iter()
        .any(|key| data.get(key).is_some_and(|value| !is_blank(value)))
}

/// Finish a builder: `{}` without an identifying field, otherwise the
/// wrapped and cleaned object.
pub fn finish(ty: &str, data: SchemaObject) -> SchemaObject {
    if !is_identifiable(&data) {
        return SchemaObject::new();
    }
    clean(wrap(ty, data))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> SchemaObject {
        match value {
            Value::Object(map) => SchemaObject::from_map(map),
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_clean_drops_blank_top_level() {
        let cleaned = clean(obj(json!({
            "name": "Acme",
            "url": "",
            "logo": null,
            "sameAs": [],
            "address": {},
            "flag": false,
            "count": 0,
            "zero": "0"
        })));
        let keys: Vec<_> = cleaned.keys().collect();
        assert_eq!(keys, vec!["name", "flag", "count", "zero"]);
    }

    #[test]
    fn test_clean_one_nested_level() {
        let cleaned = clean(obj(json!({
            "name": "Acme",
            "provider": {"@type": "Organization", "name": "Acme", "url": ""},
            "empty": {"url": "", "logo": null}
        })));
        assert_eq!(
            cleaned.into_value(),
            json!({"name": "Acme", "provider": {"@type": "Organization", "name": "Acme"}})
        );
    }

    #[test]
    fn test_clean_leaves_deeper_levels() {
        let cleaned = clean(obj(json!({
            "offers": {"seller": {"name": ""}}
        })));
        assert_eq!(cleaned.into_value(), json!({"offers": {"seller": {"name": ""}}}));
    }

    #[test]
    fn test_wrap_order() {
        let wrapped = wrap("Person", SchemaObject::new().with("name", "Ada"));
        let keys: Vec<_> = wrapped.keys().collect();
        assert_eq!(keys, vec!["@context", "@type", "name"]);
        assert_eq!(wrapped.schema_type(), Some("Person"));
        assert_eq!(wrapped.get_str("@context"), Some(CONTEXT));
    }

    #[test]
    fn test_finish_without_identity_is_empty() {
        let data = SchemaObject::new().with("telephone", "123");
        assert!(finish("Organization", data).is_empty());
        assert!(finish("Organization", SchemaObject::new().with("name", "")).is_empty());
    }

    #[test]
    fn test_finish_with_identity() {
        let data = SchemaObject::new().with("url", "https://x.test/").with("email", "");
        let out = finish("Organization", data);
        assert_eq!(
            out.into_value(),
            json!({"@context": "https://schema.org", "@type": "Organization", "url": "https://x.test/"})
        );
    }

    #[test]
    fn test_set_str_skips_empty() {
        let mut o = SchemaObject::new();
        o.set_str("name", "").set_str("url", "u");
        assert!(!o.contains_key("name"));
        assert_eq!(o.get_str("url"), Some("u"));
    }

    #[test]
    fn test_set_object_skips_none_and_empty() {
        let mut o = SchemaObject::new();
        o.set_object("a", None).set_object("b", Some(SchemaObject::new()));
        assert!(o.is_empty());
        o.set_object("c", Some(SchemaObject::typed("Brand")));
        assert_eq!(o.len(), 1);
    }

    #[test]
    fn test_serializes_transparently() {
        let o = SchemaObject::typed("Brand").with("name", "Acme");
        let json = serde_json::to_string(&o).unwrap();
        assert_eq!(json, r#"{"@type":"Brand","name":"Acme"}"#);
    }

    #[test]
    fn test_json_ld_from_value() {
        let entry = JsonLd::from(json!({"@type": "Event", "name": "Launch"}));
        assert_eq!(entry.schema_type(), Some("Event"));
        assert!(entry.as_object().is_some());

        let entry = JsonLd::from(json!([{"@type": "Event"}]));
        assert_eq!(entry, JsonLd::Raw(json!([{"@type": "Event"}])));
        assert_eq!(entry.schema_type(), None);
        assert!(!entry.is_empty());
    }

    #[test]
    fn test_json_ld_empty_entries() {
        assert!(JsonLd::from(SchemaObject::new()).is_empty());
        assert!(JsonLd::Raw(json!([])).is_empty());
        assert!(JsonLd::Raw(Value::Null).is_empty());
        assert!(!JsonLd::Raw(json!(false)).is_empty());
    }

    #[test]
    fn test_json_ld_serializes_untagged() {
        let entries = vec![
            JsonLd::from(SchemaObject::typed("Brand")),
            JsonLd::Raw(json!([1, 2])),
        ];
        let json = serde_json::to_string(&entries).unwrap();
        assert_eq!(json, r#"[{"@type":"Brand"},[1,2]]"#);
        let parsed: Vec<JsonLd> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entries);
    }
}
