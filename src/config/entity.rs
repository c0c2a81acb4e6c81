//! Entity detail sections: `[organization]`, `[person]`, `[local_business]`
//! and `[service]`.
//!
//! Every field is optional free text. An empty string means "not set" and is
//! never emitted.

use serde::{Deserialize, Serialize};

/// `[organization]` section, shared by Organization, LocalBusiness,
/// ProfessionalService, and the provider/seller/brand fragments.
///
/// # Example
/// ```toml
/// [organization]
/// name = "Acme Ltd"
/// url = "https://acme.example/"
/// street = "1 High Street"
/// locality = "Bristol"
/// country = "GB"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrganizationSection {
    pub name: String,
    pub url: String,
    /// Logo image URL.
    pub logo: String,
    pub phone: String,
    pub email: String,
    pub street: String,
    /// City or town.
    pub locality: String,
    /// State, county or region.
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

/// `[person]` section, used when the entity type is Person.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PersonSection {
    pub name: String,
    pub url: String,
    pub job_title: String,
    /// Portrait image URL.
    pub image: String,
}

/// `[local_business]` section. Address fields come from `[organization]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocalBusinessSection {
    /// Free text such as `"££"` or `"$10-50"`.
    pub price_range: String,
    /// Compact weekly hours, e.g. `"Mo-Fr 08:30-17:00, Sa 09:00-13:00"`.
    pub opening_hours: String,
}

/// `[service]` section, used by Service and ProfessionalService.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceSection {
    pub name: String,
    pub description: String,
    pub url: String,
    /// E.g. "Consulting", "Legal Services".
    pub service_type: String,
    /// Geographic area where the service is available.
    pub area: String,
}
