//! PostalAddress fragments.

use super::SchemaObject;
use crate::config::OrganizationSection;

/// Build a `PostalAddress` from the organisation's address fields.
///
/// Returns `None` when street, locality and country are all empty. A region
/// or postal code alone does not make an address.
pub fn build_address(org: &OrganizationSection) -> Option<SchemaObject> {
    if org.street.is_empty() && org.locality.is_empty() && org.country.is_empty() {
        return None;
    }

    let address = SchemaObject::typed("PostalAddress")
        .with_str("streetAddress", &org.street)
        .with_str("addressLocality", &org.locality)
        .with_str("addressRegion", &org.region)
        .with_str("postalCode", &org.postal_code)
        .with_str("addressCountry", &org.country);
    Some(address)
}
