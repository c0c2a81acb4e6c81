//! Serialising composed schema for pages and editors.
//!
//! - [`to_json_ld`] / [`script_tag`] / [`render_scripts`]: page output
//! - [`preview`]: the text an editor sees for one item
//! - [`inject_into_head`]: embed the script tags into an existing page

mod head;

pub use head::inject_into_head;

use crate::{
    compose::SchemaComposer,
    content::{CommerceItem, ContentItem},
    schema::JsonLd,
};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

pub const DISABLED_FOR_ITEM: &str = "// Schema output is disabled for this post.";
pub const DISABLED_GLOBALLY: &str = "// Schema output is globally disabled.";
pub const NOTHING_TO_OUTPUT: &str = "// No schema data to output.";

/// Pretty-print a value with four-space indentation.
///
/// Slashes and non-ASCII characters are written as-is.
fn to_pretty<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    let mut buf = Vec::with_capacity(256);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut ser)?;
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8(buf).unwrap_or_default())
}

/// Pretty JSON-LD text for one entry.
pub fn to_json_ld<T: Serialize + ?Sized>(entry: &T) -> serde_json::Result<String> {
    to_pretty(entry)
}

/// `<script type="application/ld+json">` element for one entry.
///
/// `</` inside the JSON is written as `<\/`, which is still the same JSON
/// string but cannot close the script element.
pub fn script_tag<T: Serialize + ?Sized>(entry: &T) -> serde_json::Result<String> {
    let json = to_json_ld(entry)?.replace("</", "<\\/");
    Ok(format!("<script type=\"application/ld+json\">{json}</script>"))
}

/// Script tags for every non-empty entry, one per line.
pub fn render_scripts(schemas: &[JsonLd]) -> serde_json::Result<String> {
    let mut out = String::new();
    for entry in schemas.iter().filter(|entry| !entry.is_empty()) {
        out.push_str(&script_tag(entry)?);
        out.push('\n');
    }
    Ok(out)
}

/// Editor preview of what `item` would output.
///
/// Unlike a page render, the preview ignores the enabled-kinds filter and
/// output hooks. Messages starting with `//` explain why nothing is shown.
pub fn preview(
    composer: &SchemaComposer,
    item: &ContentItem,
    commerce: Option<&CommerceItem>,
) -> serde_json::Result<String> {
    if item.overrides.is_disabled() {
        return Ok(DISABLED_FOR_ITEM.to_owned());
    }
    if !composer.settings().schema.enabled {
        return Ok(DISABLED_GLOBALLY.to_owned());
    }

    let schemas = composer.item_schemas(item, commerce);
    if schemas.is_empty() {
        return Ok(NOTHING_TO_OUTPUT.to_owned());
    }

    let blocks = schemas
        .iter()
        .map(|entry| to_json_ld(entry))
        .collect::<serde_json::Result<Vec<_>>>()?;
    Ok(blocks.join("\n\n"))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::SiteConfig,
        content::{ContentKind, ItemOverrides},
        schema::SchemaObject,
    };

    fn item() -> ContentItem {
        ContentItem {
            title: "Café menu".into(),
            url: "https://acme.test/menu/".into(),
            kind: ContentKind::Page,
            ..Default::default()
        }
    }

    #[test]
    fn test_json_ld_unescaped_and_indented() {
        let obj = SchemaObject::typed("Thing")
            .with("name", "Café")
            .with("url", "https://acme.test/a/b");
        let json = to_json_ld(&obj).unwrap();
        assert!(json.contains("\"name\": \"Café\""));
        assert!(json.contains("https://acme.test/a/b"));
        assert!(json.contains("\n    \"@type\""));
    }

    #[test]
    fn test_script_tag_escapes_closing_sequence() {
        let obj = SchemaObject::typed("Thing").with("name", "</script><b>");
        let tag = script_tag(&obj).unwrap();
        assert!(tag.starts_with("<script type=\"application/ld+json\">"));
        assert!(tag.ends_with("</script>"));
        assert_eq!(tag.matches("</script>").count(), 1);

        let inner = tag
            .trim_start_matches("<script type=\"application/ld+json\">")
            .trim_end_matches("</script>");
        let parsed: serde_json::Value = serde_json::from_str(inner).unwrap();
        assert_eq!(parsed["name"], "</script><b>");
    }

    #[test]
    fn test_render_scripts_skips_empty() {
        let schemas = vec![
            SchemaObject::typed("A").with("name", "a").into(),
            SchemaObject::new().into(),
            JsonLd::Raw(serde_json::json!([])),
            SchemaObject::typed("B").with("name", "b").into(),
        ];
        let html = render_scripts(&schemas).unwrap();
        assert_eq!(html.matches("<script").count(), 2);
        assert!(html.ends_with("</script>\n"));
    }

    #[test]
    fn test_preview_disabled_item() {
        let config = SiteConfig::default();
        let composer = SchemaComposer::new(&config);
        let item = ContentItem {
            overrides: ItemOverrides {
                enabled: Some(false),
                ..Default::default()
            },
            ..item()
        };
        assert_eq!(preview(&composer, &item, None).unwrap(), DISABLED_FOR_ITEM);
    }

    #[test]
    fn test_preview_globally_disabled() {
        let mut config = SiteConfig::default();
        config.schema.enabled = false;
        let composer = SchemaComposer::new(&config);
        assert_eq!(preview(&composer, &item(), None).unwrap(), DISABLED_GLOBALLY);
    }

    #[test]
    fn test_preview_nothing_to_output() {
        let mut config = SiteConfig::default();
        config.schema.website = false;
        let composer = SchemaComposer::new(&config);
        let item = ContentItem::default();
        assert_eq!(preview(&composer, &item, None).unwrap(), NOTHING_TO_OUTPUT);
    }

    #[test]
    fn test_preview_ignores_enabled_kinds() {
        let mut config = SiteConfig::default();
        config.schema.enabled_kinds = vec!["post".into()];
        let composer = SchemaComposer::new(&config);
        let text = preview(&composer, &item(), None).unwrap();
        assert_eq!(text.matches("\"@context\"").count(), 2);
        assert!(text.contains("}\n\n{"));
        assert!(text.contains("Café menu"));
    }

    #[test]
    fn test_preview_custom_override() {
        let config = SiteConfig::default();
        let composer = SchemaComposer::new(&config);
        let item = ContentItem {
            overrides: ItemOverrides {
                custom_json: r#"{"@type":"Event","name":"Launch"}"#.into(),
                ..Default::default()
            },
            ..item()
        };
        let text = preview(&composer, &item, None).unwrap();
        assert_eq!(text, "{\n    \"@type\": \"Event\",\n    \"name\": \"Launch\"\n}");
    }

    #[test]
    fn test_array_entry_is_one_script() {
        let schemas = vec![JsonLd::Raw(serde_json::json!([
            {"@type": "Event", "name": "Launch"},
            {"@type": "Place", "name": "Hall"}
        ]))];
        let html = render_scripts(&schemas).unwrap();
        assert_eq!(html.matches("<script").count(), 1);
        assert!(html.contains("<script type=\"application/ld+json\">["));
    }

    #[test]
    fn test_preview_array_override() {
        let config = SiteConfig::default();
        let composer = SchemaComposer::new(&config);
        let item = ContentItem {
            overrides: ItemOverrides {
                custom_json: r#"[{"@type":"Event"},{"@type":"Place"}]"#.into(),
                ..Default::default()
            },
            ..item()
        };
        let text = preview(&composer, &item, None).unwrap();
        assert_eq!(
            text,
            "[\n    {\n        \"@type\": \"Event\"\n    },\n    {\n        \"@type\": \"Place\"\n    }\n]"
        );
    }
}
