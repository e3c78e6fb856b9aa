//! Content documents stored in the content lake.
//!
//! Field names follow the lake's camelCase JSON. Reads are lenient: `null`
//! where a list or string is expected decodes to the empty value.

use serde::{Deserialize, Deserializer, Serialize};

use crate::blocks::Block;
use crate::error::{AderynError, Result};

/// Decode `null` as `T::default()`.
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Document trait
// ---------------------------------------------------------------------------

/// A top-level content document with a fixed `_type`.
pub trait Document: Serialize {
    const TYPE: &'static str;
}

/// Serialize a document to JSON with its `_type` set, ready for a mutation.
pub fn to_document_value<D: Document>(doc: &D) -> Result<serde_json::Value> {
    let mut value = serde_json::to_value(doc)
        .map_err(|e| AderynError::parse(format!("failed to serialize {}: {e}", D::TYPE)))?;
    let Some(object) = value.as_object_mut() else {
        return Err(AderynError::parse(format!("{} did not serialize to an object", D::TYPE)));
    };
    object.insert("_type".into(), serde_json::Value::String(D::TYPE.into()));
    Ok(value)
}

// ---------------------------------------------------------------------------
// Shared value types
// ---------------------------------------------------------------------------

/// URL segment, stored as `{ "current": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

impl Slug {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
        }
    }
}

/// Per-document search metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
}

/// Pointer to another document or asset.
///
/// Queries may dereference the target and project its slug alongside `_ref`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "_type", default = "Reference::type_name")]
    kind: String,
    #[serde(rename = "_ref")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl Reference {
    fn type_name() -> String {
        "reference".into()
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self {
            kind: Self::type_name(),
            id: id.into(),
            slug: None,
        }
    }

    /// A reference whose target slug is already known.
    pub fn resolved(id: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::new(id)
        }
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// Free-standing page such as "About Us".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub slug: Slug,
    #[serde(default, deserialize_with = "null_default")]
    pub content: Vec<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_navigation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
}

impl Document for Page {
    const TYPE: &'static str = "page";
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Category tag of a service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceCategory {
    BuildingSurveys,
    LandlordTenant,
    ProjectDelivery,
    ProfessionalServices,
    PartyWall,
    Other,
    /// A tag this site has no fixed label for.
    Unlisted(String),
}

impl ServiceCategory {
    /// Every category with a fixed label, in menu order.
    pub const LISTED: [Self; 6] = [
        Self::BuildingSurveys,
        Self::LandlordTenant,
        Self::ProjectDelivery,
        Self::ProfessionalServices,
        Self::PartyWall,
        Self::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::BuildingSurveys => "building-surveys",
            Self::LandlordTenant => "landlord-tenant",
            Self::ProjectDelivery => "project-delivery",
            Self::ProfessionalServices => "professional-services",
            Self::PartyWall => "party-wall",
            Self::Other => "other",
            Self::Unlisted(tag) => tag,
        }
    }

    /// Fixed display label, `None` for unlisted tags.
    pub fn label(&self) -> Option<&'static str> {
        Some(match self {
            Self::BuildingSurveys => "Building Surveys",
            Self::LandlordTenant => "Landlord and Tenant",
            Self::ProjectDelivery => "Project Delivery",
            Self::ProfessionalServices => "Professional Services",
            Self::PartyWall => "Party Wall Matters",
            Self::Other => "Other Services",
            Self::Unlisted(_) => return None,
        })
    }
}

impl From<String> for ServiceCategory {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "building-surveys" => Self::BuildingSurveys,
            "landlord-tenant" => Self::LandlordTenant,
            "project-delivery" => Self::ProjectDelivery,
            "professional-services" => Self::ProfessionalServices,
            "party-wall" => Self::PartyWall,
            "other" => Self::Other,
            _ => Self::Unlisted(tag),
        }
    }
}

impl From<&str> for ServiceCategory {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<ServiceCategory> for String {
    fn from(category: ServiceCategory) -> Self {
        category.as_str().to_string()
    }
}

impl std::fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A service offered by the consultancy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub slug: Slug,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ServiceCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub content: Vec<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
}

impl Document for Service {
    const TYPE: &'static str = "service";
}

// ---------------------------------------------------------------------------
// SiteSettings
// ---------------------------------------------------------------------------

/// Singleton holding company-wide details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
    #[serde(default, deserialize_with = "null_default")]
    pub offices: Vec<Office>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
}

impl SiteSettings {
    /// Fixed document id of the singleton.
    pub const ID: &'static str = "siteSettings";

    pub fn email(&self) -> Option<&str> {
        self.contact_info.as_ref()?.email.as_deref()
    }
}

impl Document for SiteSettings {
    const TYPE: &'static str = "siteSettings";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Office {
    #[serde(rename = "_key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// Singleton holding the main menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub main_navigation: Vec<NavItem>,
}

impl Navigation {
    /// Fixed document id of the singleton.
    pub const ID: &'static str = "navigation";
}

impl Document for Navigation {
    const TYPE: &'static str = "navigation";
}

/// Top-level menu entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    #[serde(rename = "_key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub title: String,
    pub link: NavLink,
    #[serde(default, deserialize_with = "null_default", skip_serializing_if = "Vec::is_empty")]
    pub sub_items: Vec<NavSubItem>,
}

/// Dropdown entry under a [`NavItem`]. Same link variants, no further nesting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavSubItem {
    #[serde(rename = "_key", default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub title: String,
    pub link: NavLink,
}

/// Target of a menu entry. Exactly one payload exists per link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNavLink", into = "RawNavLink")]
pub enum NavLink {
    /// `None` when the page was never selected or has been deleted.
    Page(Option<Reference>),
    /// `None` when the service was never selected or has been deleted.
    Service(Option<Reference>),
    External(String),
    /// Site-relative path such as `/contact-us`.
    Custom(String),
}

impl NavLink {
    /// The `type` discriminator stored on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Page(_) => "page",
            Self::Service(_) => "service",
            Self::External(_) => "external",
            Self::Custom(_) => "custom",
        }
    }
}

/// Wire shape: a `type` discriminator beside one field per variant.
///
/// The editor hides the fields of unselected variants without clearing them,
/// so stored documents may carry stale values there. Only the selected field
/// is read, and only the selected field is written.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RawNavLink {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    service: Option<Reference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    external: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom: Option<String>,
}

impl TryFrom<RawNavLink> for NavLink {
    type Error = String;

    fn try_from(raw: RawNavLink) -> std::result::Result<Self, Self::Error> {
        let missing = |field: &str| format!("link type '{field}' has no {field} target");
        match raw.kind.as_deref() {
            // Dereferencing a deleted document yields null.
            Some("page") => Ok(Self::Page(raw.page)),
            Some("service") => Ok(Self::Service(raw.service)),
            Some("external") => raw
                .external
                .filter(|u| !u.is_empty())
                .map(Self::External)
                .ok_or_else(|| missing("external")),
            Some("custom") => raw
                .custom
                .filter(|p| !p.is_empty())
                .map(Self::Custom)
                .ok_or_else(|| missing("custom")),
            Some(other) => Err(format!("unknown link type '{other}'")),
            None => Err("link has no type".into()),
        }
    }
}

impl From<NavLink> for RawNavLink {
    fn from(link: NavLink) -> Self {
        let kind = Some(link.kind().to_string());
        match link {
            NavLink::Page(r) => Self {
                kind,
                page: r,
                ..Self::default()
            },
            NavLink::Service(r) => Self {
                kind,
                service: r,
                ..Self::default()
            },
            NavLink::External(url) => Self {
                kind,
                external: Some(url),
                ..Self::default()
            },
            NavLink::Custom(path) => Self {
                kind,
                custom: Some(path),
                ..Self::default()
            },
        }
    }
}
