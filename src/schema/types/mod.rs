//! One builder per emitted `@type`.
//!
//! Builders are unit structs; all state comes from the [`BuildContext`].
//!
//! [`BuildContext`]: super::BuildContext

mod breadcrumb_list;
mod faq_page;
mod local_business;
mod offer;
mod organization;
mod person;
mod product;
mod professional_service;
mod service;
mod webpage;
mod website;

pub use breadcrumb_list::BreadcrumbListBuilder;
pub use faq_page::FaqPageBuilder;
pub use local_business::LocalBusinessBuilder;
pub use offer::OfferBuilder;
pub use organization::OrganizationBuilder;
pub use person::PersonBuilder;
pub use product::ProductBuilder;
pub use professional_service::ProfessionalServiceBuilder;
pub use service::ServiceBuilder;
pub use webpage::WebPageBuilder;
pub use website::WebSiteBuilder;

use super::SchemaObject;
use crate::config::OrganizationSection;

/// `{"@type": ty, "name": org name}`, or `None` without an organisation name.
fn organization_ref(ty: &str, org: &OrganizationSection) -> Option<SchemaObject> {
    (!org.name.is_empty()).then(|| SchemaObject::typed(ty).with("name", org.name.as_str()))
}
