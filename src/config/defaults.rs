//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

// ============================================================================
// [site] Section Defaults
// ============================================================================

pub mod site {
    pub fn url() -> String {
        "https://example.com/".into()
    }

    pub fn search_path() -> String {
        "/?s={search_term_string}".into()
    }
}

// ============================================================================
// [schema] Section Defaults
// ============================================================================

pub mod schema {
    pub fn default_type() -> String {
        "Organization".into()
    }

    pub fn enabled_kinds() -> Vec<String> {
        vec!["post".into(), "page".into()]
    }
}
